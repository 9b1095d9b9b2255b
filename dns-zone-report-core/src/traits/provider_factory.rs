//! Provider 工厂抽象 Trait

use std::sync::Arc;

use dns_zone_report_provider::{
    create_provider, DnsProvider, ProviderCredentials, ProviderOptions,
};

use crate::error::CoreResult;

/// Builds a provider for one service call.
///
/// Services call [`create`](Self::create) once per public operation, so every
/// operation owns its HTTP client for its whole call tree.
pub trait ProviderFactory: Send + Sync {
    /// Create a provider authenticated with `api_token`.
    fn create(&self, api_token: String) -> CoreResult<Arc<dyn DnsProvider>>;
}

/// Factory for the Cloudflare provider backed by `reqwest`.
pub struct DefaultProviderFactory {
    options: ProviderOptions,
}

impl DefaultProviderFactory {
    #[must_use]
    pub fn new(options: ProviderOptions) -> Self {
        Self { options }
    }
}

impl Default for DefaultProviderFactory {
    fn default() -> Self {
        Self::new(ProviderOptions::default())
    }
}

impl ProviderFactory for DefaultProviderFactory {
    fn create(&self, api_token: String) -> CoreResult<Arc<dyn DnsProvider>> {
        Ok(create_provider(
            ProviderCredentials::Cloudflare { api_token },
            &self.options,
        )?)
    }
}
