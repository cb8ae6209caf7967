use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandwidthError {
    #[error("API 错误 (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("URL 解析错误: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("无效的请求参数: {0}")]
    InvalidParams(String),

    #[error("响应缺少 Location 头")]
    MissingLocation,

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML 解析错误: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BandwidthError {
    /// 远端返回的 HTTP 状态码，仅 `Api` 错误有值
    pub fn status(&self) -> Option<u16> {
        match self {
            BandwidthError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for bandwidth crate
pub type Result<T> = std::result::Result<T, BandwidthError>;
