use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's enrollment in a plan. Dates travel as the backend's plain
/// `YYYY-MM-DD` strings, not timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    pub id: i64,
    pub user_id: i64,
    pub subscription_id: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscriptionInput {
    pub user_id: i64,
    pub subscription_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct UserSubscriptionsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn user_subscriptions(&self) -> UserSubscriptionsApi<'_> {
        UserSubscriptionsApi { client: self }
    }
}

impl UserSubscriptionsApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<UserSubscription>> {
        self.client.get("UserSubscription/getAllUserSub", opts).await
    }

    pub async fn create(&self, input: &UserSubscriptionInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("UserSubscription/addNewUserSub", input, opts).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &UserSubscriptionInput,
        opts: &RequestOptions,
    ) -> Result<Value> {
        self.client.put(&format!("UserSubscription/updateUserSub/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("UserSubscription/deleteUserSub/{id}"), opts).await
    }
}
