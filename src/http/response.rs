use reqwest::header::{HeaderMap as Headers, LOCATION};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::types::Status;
use crate::{BandwidthError, Result};

#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub headers: Headers,
    pub body: String,
    pub duration: Duration,
}

impl Response {
    pub fn new(status: u16, headers: Headers, body: String, duration: Duration) -> Result<Self> {
        Ok(Self {
            status: Status::new(status)?,
            headers,
            body,
            duration,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 将响应体解析为指定类型
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// 列表接口在没有数据时可能返回空响应体
    pub fn json_list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if self.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.json()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// 创建类接口返回 201，新资源的 ID 是 Location 的最后一段路径
    pub fn location_id(&self) -> Result<String> {
        let location = self.location().ok_or(BandwidthError::MissingLocation)?;
        id_from_location(location).ok_or(BandwidthError::MissingLocation)
    }
}

pub(crate) fn id_from_location(location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
