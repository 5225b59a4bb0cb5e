use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct ChannelsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn channels(&self) -> ChannelsApi<'_> {
        ChannelsApi { client: self }
    }
}

impl ChannelsApi<'_> {
    pub async fn list(&self, opts: &RequestOptions) -> Result<Vec<Channel>> {
        self.client.get("Channel/getAllChannels", opts).await
    }

    pub async fn create(&self, input: &ChannelInput, opts: &RequestOptions) -> Result<Value> {
        self.client.post("Channel/addNewChannel", input, opts).await
    }

    pub async fn update(&self, id: i64, input: &ChannelInput, opts: &RequestOptions) -> Result<Value> {
        self.client.put(&format!("Channel/updatechannel/{id}"), input, opts).await
    }

    pub async fn delete(&self, id: i64, opts: &RequestOptions) -> Result<Value> {
        self.client.delete(&format!("Channel/deletechannel/{id}"), opts).await
    }
}
