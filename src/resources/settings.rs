use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub current_password: String,
    pub new_password: String,
}

/// Account settings surface. The settings record itself has no stable shape
/// across backend versions, so it is exposed as raw JSON.
#[derive(Debug)]
pub struct SettingsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn settings(&self) -> SettingsApi<'_> {
        SettingsApi { client: self }
    }
}

impl SettingsApi<'_> {
    pub async fn get_data(&self, opts: &RequestOptions) -> Result<Value> {
        self.client.get("Setting/GetSettingData", opts).await
    }

    pub async fn update(&self, payload: &Value, opts: &RequestOptions) -> Result<Value> {
        self.client.put("Setting/UpdateSetting", payload, opts).await
    }

    pub async fn change_password(&self, input: &ChangePasswordInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Setting/ChangePassword", input, opts).await
    }
}
