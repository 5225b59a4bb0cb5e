use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub movie_url: Option<String>,
}

/// Create/update payload. Absent optional fields are omitted from the body
/// rather than sent as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_url: Option<String>,
}

#[derive(Debug)]
pub struct MoviesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn movies(&self) -> MoviesApi<'_> {
        MoviesApi { client: self }
    }
}

impl MoviesApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<Movie>> {
        self.client.get("Movies/getAllMovies", opts).await
    }

    pub async fn create(&self, input: &MovieInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Movies/addNewMovie", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &MovieInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("Movies/updateMovie/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("Movies/deleteMovie/{id}"), opts).await
    }
}
