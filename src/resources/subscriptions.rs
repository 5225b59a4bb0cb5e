use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A subscription plan (price per `duration` days).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub duration: i64,
}

#[derive(Debug)]
pub struct SubscriptionsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi { client: self }
    }
}

impl SubscriptionsApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<Subscription>> {
        self.client.get("Subscription/getAllSubscriptions", opts).await
    }

    pub async fn create(&self, input: &SubscriptionInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Subscription/addNewSubscription", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &SubscriptionInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("Subscription/updateSubscription/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("Subscription/deleteSubscription/{id}"), opts).await
    }
}
