//! 远端资源的调用封装
//!
//! 每个子模块对应一个 API 资源，函数与接口一一对应：固定的路径模板加上
//! 参数结构。参数可以是本模块提供的结构体，也可以是任意可序列化的值
//! (例如 `serde_json::json!`)。
//!
//! 除了号码查询/订购以外，所有路径都以 `/users/{userId}` 为根。

pub mod account;
pub mod applications;
pub mod available_numbers;
pub mod bridges;
pub mod calls;
pub mod conferences;
pub mod domains;
pub mod messages;

use serde::Serialize;

/// 播放音频或朗读文本，用于通话、桥接、会议和会议成员
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAudio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl PlayAudio {
    pub fn file(url: impl Into<String>) -> Self {
        Self {
            file_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn sentence(text: impl Into<String>) -> Self {
        Self {
            sentence: Some(text.into()),
            ..Self::default()
        }
    }

    /// 空的 fileUrl 会停止当前播放
    pub fn stop() -> Self {
        Self::file("")
    }
}

/// 无参数的 GET 请求
pub(crate) const NO_PARAMS: &() = &();
