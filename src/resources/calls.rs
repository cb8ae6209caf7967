//! 通话及其子资源：音频、DTMF、收号、事件、录音和转写

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::resources::NO_PARAMS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub direction: Option<String>,
    pub from: String,
    pub to: String,
    pub state: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub active_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub chargeable_duration: Option<u64>,
    pub bridge: Option<String>,
    pub conference: Option<String>,
    pub recordings: Option<String>,
    pub transcriptions: Option<String>,
    pub events: Option<String>,
    pub recording_enabled: Option<bool>,
    pub transcription_enabled: Option<bool>,
    pub callback_url: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCall {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_max_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl CreateCall {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }
}

/// 修改通话状态：接听 (`active`)、挂断 (`completed`)、拒接 (`rejected`)、转接 (`transferring`)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_caller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_file_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl UpdateCall {
    pub fn state(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..Self::default()
        }
    }

    pub fn hangup() -> Self {
        Self::state("completed")
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCalls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// POST /users/{userId}/calls，返回新通话的 ID
pub async fn create<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<String> {
    client
        .post_user_resource(&["calls"], params)
        .await?
        .location_id()
}

pub async fn find(client: &Client, id: &str) -> Result<Call> {
    client
        .get_user_resource(&["calls", id], NO_PARAMS)
        .await?
        .json()
}

pub async fn list<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<Vec<Call>> {
    client
        .get_user_resource(&["calls"], params)
        .await?
        .json_list()
}

pub async fn update<P: Serialize + ?Sized>(client: &Client, id: &str, params: &P) -> Result<()> {
    client.post_user_resource(&["calls", id], params).await?;
    Ok(())
}

pub mod audio {
    use super::*;

    /// POST /users/{userId}/calls/{callId}/audio
    pub async fn play<P: Serialize + ?Sized>(
        client: &Client,
        call_id: &str,
        params: &P,
    ) -> Result<()> {
        client
            .post_user_resource(&["calls", call_id, "audio"], params)
            .await?;
        Ok(())
    }
}

pub mod dtmf {
    use super::*;

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SendDtmf {
        pub dtmf_out: String,
    }

    impl SendDtmf {
        pub fn new(digits: impl Into<String>) -> Self {
            Self {
                dtmf_out: digits.into(),
            }
        }
    }

    /// POST /users/{userId}/calls/{callId}/dtmf
    pub async fn send<P: Serialize + ?Sized>(
        client: &Client,
        call_id: &str,
        params: &P,
    ) -> Result<()> {
        client
            .post_user_resource(&["calls", call_id, "dtmf"], params)
            .await?;
        Ok(())
    }

    pub mod gather {
        use super::*;

        #[derive(Debug, Clone, Deserialize, PartialEq)]
        #[serde(rename_all = "camelCase")]
        pub struct Gather {
            pub id: String,
            pub state: Option<String>,
            pub reason: Option<String>,
            pub created_time: Option<DateTime<Utc>>,
            pub completed_time: Option<DateTime<Utc>>,
            pub call: Option<String>,
            pub digits: Option<String>,
        }

        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct CreateGather {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub max_digits: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub inter_digit_timeout: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub terminating_digits: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub tag: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub prompt: Option<crate::resources::PlayAudio>,
        }

        /// 目前只支持把状态改为 `completed` 以结束收号
        #[derive(Debug, Clone, Serialize)]
        pub struct UpdateGather {
            pub state: String,
        }

        impl UpdateGather {
            pub fn complete() -> Self {
                Self {
                    state: "completed".to_string(),
                }
            }
        }

        /// POST /users/{userId}/calls/{callId}/gather，返回收号 ID
        pub async fn create<P: Serialize + ?Sized>(
            client: &Client,
            call_id: &str,
            params: &P,
        ) -> Result<String> {
            client
                .post_user_resource(&["calls", call_id, "gather"], params)
                .await?
                .location_id()
        }

        /// GET /users/{userId}/calls/{callId}/gather/{gatherId}
        pub async fn results(client: &Client, call_id: &str, gather_id: &str) -> Result<Gather> {
            client
                .get_user_resource(&["calls", call_id, "gather", gather_id], NO_PARAMS)
                .await?
                .json()
        }

        /// POST /users/{userId}/calls/{callId}/gather/{gatherId}
        pub async fn update<P: Serialize + ?Sized>(
            client: &Client,
            call_id: &str,
            gather_id: &str,
            params: &P,
        ) -> Result<()> {
            client
                .post_user_resource(&["calls", call_id, "gather", gather_id], params)
                .await?;
            Ok(())
        }
    }
}

pub mod events {
    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct CallEvent {
        pub id: String,
        pub time: Option<DateTime<Utc>>,
        pub name: String,
        pub data: Option<String>,
    }

    /// GET /users/{userId}/calls/{callId}/events/{eventId}
    pub async fn find(client: &Client, call_id: &str, event_id: &str) -> Result<CallEvent> {
        client
            .get_user_resource(&["calls", call_id, "events", event_id], NO_PARAMS)
            .await?
            .json()
    }

    /// GET /users/{userId}/calls/{callId}/events
    pub async fn list(client: &Client, call_id: &str) -> Result<Vec<CallEvent>> {
        client
            .get_user_resource(&["calls", call_id, "events"], NO_PARAMS)
            .await?
            .json_list()
    }
}

pub mod recordings {
    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Recording {
        pub id: String,
        pub media: Option<String>,
        pub call: Option<String>,
        pub state: Option<String>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
    }

    /// GET /users/{userId}/calls/{callId}/recordings
    pub async fn list(client: &Client, call_id: &str) -> Result<Vec<Recording>> {
        client
            .get_user_resource(&["calls", call_id, "recordings"], NO_PARAMS)
            .await?
            .json_list()
    }
}

pub mod transcriptions {
    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Transcription {
        pub id: String,
        pub state: Option<String>,
        pub text: Option<String>,
        pub time: Option<DateTime<Utc>>,
        pub chargeable_duration: Option<u64>,
        pub text_size: Option<u64>,
        pub text_url: Option<String>,
    }

    /// GET /users/{userId}/calls/{callId}/transcriptions
    pub async fn list(client: &Client, call_id: &str) -> Result<Vec<Transcription>> {
        client
            .get_user_resource(&["calls", call_id, "transcriptions"], NO_PARAMS)
            .await?
            .json_list()
    }
}
