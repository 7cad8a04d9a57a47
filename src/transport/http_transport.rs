use crate::auth::AuthManager;
use crate::client::CropGuardConfig;
use crate::errors::{CropGuardError, CropGuardResult, NetworkError};
use crate::transport::response_parser::ResponseParser;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use http::{HeaderMap, Method};
use serde_json::Value;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Byte stream of a streaming gateway response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = CropGuardResult<Bytes>> + Send>>;

/// Object-safe HTTP layer the services talk through. JSON bodies go in and
/// out as `serde_json::Value`; typed conversion happens in the services.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and parses the response body as JSON.
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> CropGuardResult<Value>;

    /// Sends a request and returns the raw response body as a byte stream.
    /// Non-2xx responses are mapped to errors before any bytes are yielded.
    async fn request_stream(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> CropGuardResult<ByteStream>;
}

/// Production transport backed by reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: CropGuardConfig,
    auth: Arc<dyn AuthManager>,
}

impl ReqwestTransport {
    pub fn new(config: CropGuardConfig, auth: Arc<dyn AuthManager>) -> CropGuardResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(config.max_connections);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.clone())
                .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            auth,
        })
    }

    fn build_url(&self, path: &str) -> CropGuardResult<url::Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let url = format!("{}/{}", base, path.trim_start_matches('/'));
        Ok(url::Url::parse(&url)?)
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
        timeout: Option<Duration>,
    ) -> CropGuardResult<reqwest::RequestBuilder> {
        let url = self.build_url(path)?;
        let auth_header = self.auth.authorization_header().await?;

        let mut request = self
            .client
            .request(method, url)
            .header(http::header::AUTHORIZATION, auth_header)
            .headers(headers);

        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        Ok(request)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> CropGuardResult<Value> {
        let request = self
            .build_request(method, path, body, headers, Some(self.config.timeout))
            .await?;

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CropGuardError::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                CropGuardError::from(e)
            }
        })?;

        ResponseParser::parse_json(response).await
    }

    async fn request_stream(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> CropGuardResult<ByteStream> {
        // No overall timeout on streams; the caller decides how long a
        // conversation may run.
        let request = self
            .build_request(method, path, body, headers, None)
            .await?;

        let response = request.send().await?;
        let response = ResponseParser::check_status(response).await?;

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(CropGuardError::from));

        Ok(Box::pin(stream))
    }
}
