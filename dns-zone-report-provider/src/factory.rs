//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CloudflareProvider;
use crate::traits::DnsProvider;
use crate::types::{ProviderCredentials, ProviderOptions};

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// Every call builds a new provider with its own HTTP client.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_zone_report_provider::{create_provider, ProviderCredentials, ProviderOptions};
///
/// let provider = create_provider(
///     ProviderCredentials::Cloudflare {
///         api_token: "your-token".to_string(),
///     },
///     &ProviderOptions::default(),
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    options: &ProviderOptions,
) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        ProviderCredentials::Cloudflare { api_token } => {
            let mut provider = CloudflareProvider::new(api_token)?.with_page_size(options.page_size);
            if let Some(base_url) = &options.base_url {
                provider = provider.with_base_url(base_url.as_str());
            }
            Ok(Arc::new(provider))
        }
    }
}
