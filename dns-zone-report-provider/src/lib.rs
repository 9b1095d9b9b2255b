//! # dns-zone-report-provider
//!
//! Read-only access to a DNS provider's zones and records.
//!
//! Every listing call follows the provider's page-based pagination until the last page
//! and returns the complete, ordered result set. Raw items missing a required field are
//! dropped; any failed page fails the whole call.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | Bearer Token |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_zone_report_provider::{
//!     create_provider, DnsProvider, ProviderCredentials, ProviderOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials::Cloudflare {
//!         api_token: "your-token".to_string(),
//!     };
//!     let provider = create_provider(credentials, &ProviderOptions::default())?;
//!
//!     for zone in provider.list_zones().await? {
//!         for record in provider.list_records(&zone).await? {
//!             println!("{} {} {} -> {}", zone.name, record.record_type, record.name, record.content);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried automatically.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export transport seam
pub use http_client::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    DEFAULT_PAGE_SIZE, DnsRecord, PaginationParams, ProviderCredentials, ProviderOptions, Zone,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete providers
pub use providers::CloudflareProvider;
