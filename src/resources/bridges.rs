//! 桥接：把两路通话的音频连接在一起

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::resources::NO_PARAMS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bridge {
    pub id: String,
    pub state: Option<String>,
    pub bridge_audio: Option<bool>,
    pub calls: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub activated_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBridge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_audio: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub call_ids: Vec<String>,
}

/// 更新桥接时传入完整的通话列表，空列表会移除全部通话
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBridge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_audio: Option<bool>,
    pub call_ids: Vec<String>,
}

/// POST /users/{userId}/bridges，返回新桥接的 ID
pub async fn create<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<String> {
    client
        .post_user_resource(&["bridges"], params)
        .await?
        .location_id()
}

pub async fn find(client: &Client, id: &str) -> Result<Bridge> {
    client
        .get_user_resource(&["bridges", id], NO_PARAMS)
        .await?
        .json()
}

pub async fn list(client: &Client) -> Result<Vec<Bridge>> {
    client
        .get_user_resource(&["bridges"], NO_PARAMS)
        .await?
        .json_list()
}

pub async fn update<P: Serialize + ?Sized>(client: &Client, id: &str, params: &P) -> Result<()> {
    client.post_user_resource(&["bridges", id], params).await?;
    Ok(())
}

pub mod audio {
    use super::*;

    /// POST /users/{userId}/bridges/{bridgeId}/audio
    pub async fn play<P: Serialize + ?Sized>(
        client: &Client,
        bridge_id: &str,
        params: &P,
    ) -> Result<()> {
        client
            .post_user_resource(&["bridges", bridge_id, "audio"], params)
            .await?;
        Ok(())
    }
}

pub mod calls {
    use super::*;
    use crate::resources::calls::Call;

    /// GET /users/{userId}/bridges/{bridgeId}/calls
    pub async fn list(client: &Client, bridge_id: &str) -> Result<Vec<Call>> {
        client
            .get_user_resource(&["bridges", bridge_id, "calls"], NO_PARAMS)
            .await?
            .json_list()
    }
}
