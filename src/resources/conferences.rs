//! 会议及会议成员

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::resources::NO_PARAMS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,
    pub state: Option<String>,
    pub from: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    pub active_members: Option<u32>,
    pub hold: Option<bool>,
    pub mute: Option<bool>,
    pub callback_url: Option<String>,
    pub fallback_url: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConference {
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// 结束会议 (`state = completed`)、全体静音或保持
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// POST /users/{userId}/conferences，返回新会议的 ID
pub async fn create<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<String> {
    client
        .post_user_resource(&["conferences"], params)
        .await?
        .location_id()
}

pub async fn find(client: &Client, id: &str) -> Result<Conference> {
    client
        .get_user_resource(&["conferences", id], NO_PARAMS)
        .await?
        .json()
}

pub async fn update<P: Serialize + ?Sized>(client: &Client, id: &str, params: &P) -> Result<()> {
    client
        .post_user_resource(&["conferences", id], params)
        .await?;
    Ok(())
}

pub mod audio {
    use super::*;

    /// POST /users/{userId}/conferences/{conferenceId}/audio
    pub async fn play<P: Serialize + ?Sized>(
        client: &Client,
        conference_id: &str,
        params: &P,
    ) -> Result<()> {
        client
            .post_user_resource(&["conferences", conference_id, "audio"], params)
            .await?;
        Ok(())
    }
}

pub mod members {
    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Member {
        pub id: String,
        pub state: Option<String>,
        pub added_time: Option<DateTime<Utc>>,
        pub removed_time: Option<DateTime<Utc>>,
        pub hold: Option<bool>,
        pub mute: Option<bool>,
        pub join_tone: Option<bool>,
        pub leaving_tone: Option<bool>,
        pub call: Option<String>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AddMember {
        pub call_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub join_tone: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub leaving_tone: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mute: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hold: Option<bool>,
    }

    impl AddMember {
        pub fn new(call_id: impl Into<String>) -> Self {
            Self {
                call_id: call_id.into(),
                ..Self::default()
            }
        }
    }

    /// 移出会议 (`state = completed`)、静音或保持单个成员
    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateMember {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mute: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hold: Option<bool>,
    }

    /// POST /users/{userId}/conferences/{conferenceId}/members，返回成员 ID
    pub async fn add<P: Serialize + ?Sized>(
        client: &Client,
        conference_id: &str,
        params: &P,
    ) -> Result<String> {
        client
            .post_user_resource(&["conferences", conference_id, "members"], params)
            .await?
            .location_id()
    }

    pub async fn find(client: &Client, conference_id: &str, member_id: &str) -> Result<Member> {
        client
            .get_user_resource(&["conferences", conference_id, "members", member_id], NO_PARAMS)
            .await?
            .json()
    }

    pub async fn list(client: &Client, conference_id: &str) -> Result<Vec<Member>> {
        client
            .get_user_resource(&["conferences", conference_id, "members"], NO_PARAMS)
            .await?
            .json_list()
    }

    pub async fn update<P: Serialize + ?Sized>(
        client: &Client,
        conference_id: &str,
        member_id: &str,
        params: &P,
    ) -> Result<()> {
        client
            .post_user_resource(&["conferences", conference_id, "members", member_id], params)
            .await?;
        Ok(())
    }

    pub mod audio {
        use super::*;

        /// POST /users/{userId}/conferences/{conferenceId}/members/{memberId}/audio
        pub async fn play<P: Serialize + ?Sized>(
            client: &Client,
            conference_id: &str,
            member_id: &str,
            params: &P,
        ) -> Result<()> {
            client
                .post_user_resource(
                    &["conferences", conference_id, "members", member_id, "audio"],
                    params,
                )
                .await?;
            Ok(())
        }
    }
}
