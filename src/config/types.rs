use serde::Deserialize;
use std::collections::HashMap;

use crate::{BandwidthError, Result};

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.catapult.inetwork.com/v1";
/// 默认请求超时 (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 构建 `Client` 所需的全部配置
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub user_id: String,
    pub api_token: String,
    pub api_secret: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("user_id", &self.user_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn new(
        user_id: impl Into<String>,
        api_token: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            api_token: api_token.into(),
            api_secret: api_secret.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 从环境变量读取配置
    ///
    /// 必需: BANDWIDTH_USER_ID, BANDWIDTH_API_TOKEN, BANDWIDTH_API_SECRET
    /// 可选: BANDWIDTH_BASE_URL
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| BandwidthError::Config(format!("环境变量 {} 未设置", key)))
        };

        let mut config = Self::new(
            required("BANDWIDTH_USER_ID")?,
            required("BANDWIDTH_API_TOKEN")?,
            required("BANDWIDTH_API_SECRET")?,
        );
        if let Some(base_url) = lookup("BANDWIDTH_BASE_URL").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// bandwidth.toml 文件内容
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// 未指定 profile 时使用的名称
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Config>,
}

impl ConfigFile {
    pub fn profile(&self, name: &str) -> Option<&Config> {
        self.profiles.get(name)
    }

    /// `default_profile` 指向的配置；未设置时如果只有一个 profile 则使用它
    pub fn default_config(&self) -> Option<&Config> {
        match &self.default_profile {
            Some(name) => self.profile(name),
            None if self.profiles.len() == 1 => self.profiles.values().next(),
            None => self.profile("default"),
        }
    }
}
