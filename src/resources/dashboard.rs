use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Headline counters for the overview screen. Fields default to `None` so an
/// older backend that omits a counter still decodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_movies: Option<i64>,
    #[serde(default)]
    pub total_series: Option<i64>,
    #[serde(default)]
    pub active_users: Option<i64>,
    #[serde(default)]
    pub active_subscriptions: Option<i64>,
}

#[derive(Debug)]
pub struct DashboardApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { client: self }
    }
}

impl DashboardApi<'_> {
    pub async fn stats(&self, opts: &RequestOptions) -> Result<DashboardStats> {
        self.client.get("Dashboard/DashboardStats", opts).await
    }
}
