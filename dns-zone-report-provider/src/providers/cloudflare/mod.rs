//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpTransport, ReqwestTransport};
use crate::traits::ProviderErrorMapper;
use crate::types::DEFAULT_PAGE_SIZE;

pub(crate) use types::{CloudflareErrorBody, CloudflareResponse, CloudflareResultInfo};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
    pub(crate) page_size: u32,
}

impl CloudflareProvider {
    /// Provider backed by a fresh `reqwest` client.
    pub fn new(api_token: String) -> Result<Self> {
        let transport = ReqwestTransport::new().map_err(|e| ProviderError::NetworkError {
            provider: "cloudflare".to_string(),
            detail: e.to_string(),
        })?;
        Ok(Self::with_transport(Arc::new(transport), api_token))
    }

    /// Provider using the given transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, api_token: String) -> Self {
        Self {
            transport,
            api_token,
            base_url: CF_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the API base URL (trailing slashes are ignored).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Requested page size; clamped per endpoint, and never below 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field("provider", &self.provider_name())
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
