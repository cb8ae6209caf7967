use serde::Serialize;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::types::Method;
use crate::{BandwidthError, Result};

const USER_AGENT: &str = concat!("bandwidth-rs/", env!("CARGO_PKG_VERSION"));

/// Bandwidth API 客户端
///
/// 构建后不可变，clone 之后共享同一个连接池，可以在多个任务中并发使用。
/// 每次调用只发送一个请求：没有重试，也没有缓存。
#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base_url: Url,
    user_id: String,
    api_token: String,
    api_secret: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(
        user_id: impl Into<String>,
        api_token: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(&Config::new(user_id, api_token, api_secret))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(BandwidthError::Config(
                "timeout_secs 必须大于 0".to_string(),
            ));
        }

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner,
            base_url: parse_base_url(&config.base_url)?,
            user_id: config.user_id.clone(),
            api_token: config.api_token.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    /// 替换 API 地址，例如指向沙箱或本地模拟服务
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// 以 base_url 为根构建请求，路径段会做百分号编码
    pub fn request(&self, method: Method, segments: &[&str]) -> Request {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Request::new(method, url)
    }

    /// 以 `users/{user_id}` 为根构建请求
    pub fn user_request(&self, method: Method, segments: &[&str]) -> Request {
        let mut scoped = Vec::with_capacity(segments.len() + 2);
        scoped.push("users");
        scoped.push(self.user_id.as_str());
        scoped.extend_from_slice(segments);
        self.request(method, &scoped)
    }

    pub async fn get_resource<P: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        params: &P,
    ) -> Result<Response> {
        let request = self.request(Method::Get, segments).with_params(params)?;
        self.execute(request).await
    }

    pub async fn post_resource<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Response> {
        let request = self.request(Method::Post, segments).with_json(body)?;
        self.execute(request).await
    }

    /// POST 请求，参数放在查询字符串中 (号码订购接口)
    pub async fn post_resource_with_query<P: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        params: &P,
    ) -> Result<Response> {
        let request = self.request(Method::Post, segments).with_params(params)?;
        self.execute(request).await
    }

    pub async fn delete_resource(&self, segments: &[&str]) -> Result<Response> {
        self.execute(self.request(Method::Delete, segments)).await
    }

    pub async fn get_user_resource<P: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        params: &P,
    ) -> Result<Response> {
        let request = self.user_request(Method::Get, segments).with_params(params)?;
        self.execute(request).await
    }

    pub async fn post_user_resource<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Response> {
        let request = self.user_request(Method::Post, segments).with_json(body)?;
        self.execute(request).await
    }

    pub async fn delete_user_resource(&self, segments: &[&str]) -> Result<Response> {
        self.execute(self.user_request(Method::Delete, segments)).await
    }

    /// 发送请求；非 2xx 响应转换为 `BandwidthError::Api`
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method;
        tracing::debug!(%method, url = %request.url, "sending request");

        let mut req = self
            .inner
            .request(method.into(), request.url.clone())
            .headers(request.headers)
            .basic_auth(&self.api_token, Some(&self.api_secret));

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let start = Instant::now();
        let response = req.send().await?;
        let duration = start.elapsed();

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(
            %method,
            path = request.url.path(),
            status,
            elapsed_ms = duration.as_millis() as u64,
            "received response"
        );

        let response = Response::new(status, headers, body, duration)?;
        if !response.is_success() {
            let kind = if response.status.is_server_error() {
                "server error"
            } else if response.status.is_client_error() {
                "client error"
            } else {
                "unexpected status"
            };
            tracing::warn!(%method, path = request.url.path(), status, kind, "request failed");
            return Err(BandwidthError::Api {
                status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(BandwidthError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}
