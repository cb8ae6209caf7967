use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap as Headers, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::http::types::Method;
use crate::{BandwidthError, Result};

/// 一次 API 调用的完整描述，由 `Client::request` 构建，交给 `Client::execute` 发送
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        let mut headers = Headers::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Result<Self> {
        let name: HeaderName = key
            .parse()
            .map_err(|_| BandwidthError::InvalidParams(format!("invalid header name: {}", key)))?;
        let value: HeaderValue = value
            .parse()
            .map_err(|_| BandwidthError::InvalidParams(format!("invalid header value for {}", key)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_string(data)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(json);
        Ok(self)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// 把参数结构体展开为查询字符串，`null` 字段忽略
    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        let pairs = query_pairs(params)?;
        if !pairs.is_empty() {
            self.url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(self)
    }

    /// 请求路径 (不含查询字符串)
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(params)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(BandwidthError::InvalidParams(format!(
                "query parameters must be an object, got {}",
                other
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => pairs.push((key, s)),
            Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
            Value::Array(_) | Value::Object(_) => {
                return Err(BandwidthError::InvalidParams(format!(
                    "query parameter {} must be a scalar",
                    key
                )));
            }
        }
    }
    Ok(pairs)
}
