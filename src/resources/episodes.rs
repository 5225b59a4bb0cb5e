use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: i64,
    pub series_id: i64,
    pub title: String,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInput {
    pub series_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct EpisodesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn episodes(&self) -> EpisodesApi<'_> {
        EpisodesApi { client: self }
    }
}

impl EpisodesApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<Episode>> {
        self.client.get("Episodes/getAllEpisodes", opts).await
    }

    pub async fn create(&self, input: &EpisodeInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Episodes/addNewEpisode", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &EpisodeInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("Episodes/updateEpisode/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("Episodes/deleteEpisode/{id}"), opts).await
    }
}
