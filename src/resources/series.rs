use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: i64,
    pub title: String,
    /// Backend field `type`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInput {
    pub title: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct SeriesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn series(&self) -> SeriesApi<'_> {
        SeriesApi { client: self }
    }
}

impl SeriesApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<Series>> {
        self.client.get("Series/getAllSeries", opts).await
    }

    pub async fn create(&self, input: &SeriesInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Series/addNewSeries", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &SeriesInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("Series/updateSeries/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("Series/deleteSeries/{id}"), opts).await
    }
}
