use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// `password` is required when creating and usually omitted on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl UsersApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<User>> {
        self.client.get("User/getAllUsers", opts).await
    }

    pub async fn get(&self, id: i64, opts: &RequestOptions) -> Result<User> {
        self.client.get(&format!("User/getUserById/{id}"), opts).await
    }

    pub async fn create(&self, input: &UserInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("User/addNewuser", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &UserInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("User/updateuser/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("User/deleteuser/{id}"), opts).await
    }
}
