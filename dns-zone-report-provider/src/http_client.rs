//! HTTP transport
//!
//! Providers build URLs and interpret responses; the transport only moves bytes.
//!
//! # Contract
//! - Every request is a `GET` with `Authorization: Bearer <token>` and
//!   `Content-Type: application/json`.
//! - Any status code is a successful transport result; status interpretation belongs
//!   to the provider.
//! - Nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use thiserror::Error;

use crate::utils::log_sanitizer::truncate_for_log;

/// Connect timeout (seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Total request timeout (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Raw HTTP response handed back to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed `Retry-After` header (seconds), if present.
    pub retry_after: Option<u64>,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Response without a `Retry-After` header.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }
}

/// Transport-level failure: the request never produced a complete response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connect or total timeout fired.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure, TLS failure, body read failure, ...
    #[error("{0}")]
    Network(String),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Authenticated `GET` transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue `GET url` authenticated with `bearer_token`.
    async fn get(&self, url: &str, bearer_token: &str) -> Result<HttpResponse, TransportError>;
}

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Result<Client, TransportError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| TransportError::Client(e.to_string()))
}

/// [`HttpTransport`] backed by `reqwest`.
///
/// Owns its own connection pool; dropping the transport closes it.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: create_http_client()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        // Extract Retry-After before consuming the body
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}
