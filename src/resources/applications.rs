//! 应用：通话和短信事件回调地址的集合

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub incoming_call_url: Option<String>,
    pub incoming_call_url_callback_timeout: Option<u64>,
    pub incoming_call_fallback_url: Option<String>,
    pub incoming_message_url: Option<String>,
    pub incoming_message_url_callback_timeout: Option<u64>,
    pub incoming_message_fallback_url: Option<String>,
    pub callback_http_method: Option<String>,
    pub auto_answer: Option<bool>,
}

/// 创建或更新应用的参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_call_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_call_fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_message_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_message_fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_http_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_answer: Option<bool>,
}

/// POST /users/{userId}/applications，返回新应用的 ID
pub async fn create<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<String> {
    client
        .post_user_resource(&["applications"], params)
        .await?
        .location_id()
}

pub async fn find(client: &Client, id: &str) -> Result<Application> {
    client
        .get_user_resource(&["applications", id], crate::resources::NO_PARAMS)
        .await?
        .json()
}

pub async fn list<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<Vec<Application>> {
    client
        .get_user_resource(&["applications"], params)
        .await?
        .json_list()
}

pub async fn update<P: Serialize + ?Sized>(client: &Client, id: &str, params: &P) -> Result<()> {
    client
        .post_user_resource(&["applications", id], params)
        .await?;
    Ok(())
}

pub async fn delete(client: &Client, id: &str) -> Result<()> {
    client.delete_user_resource(&["applications", id]).await?;
    Ok(())
}
