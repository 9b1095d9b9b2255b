//! Domain records and request parameters.

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A DNS zone as reported by the provider.
///
/// Only built from a raw item that carried every required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Provider-assigned opaque identifier.
    pub id: String,
    /// Domain name, e.g. `example.com`.
    pub name: String,
    /// Provider lifecycle state, e.g. `active` or `pending`.
    pub status: String,
}

/// A single DNS record of a zone.
///
/// The owning zone is not stored; records returned for zone `Z` belong to `Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Provider-assigned opaque identifier.
    pub id: String,
    /// Record type string, e.g. `A` or `CNAME`.
    pub record_type: String,
    /// Fully-qualified record name.
    pub name: String,
    /// Record value.
    pub content: String,
}

/// Page cursor for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Credentials for a provider, one variant per supported provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCredentials {
    /// Cloudflare API token (Bearer auth).
    Cloudflare {
        /// API token.
        api_token: String,
    },
}

/// Options shared by every provider instance created through the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Override the API base URL (without trailing slash). `None` uses the provider default.
    pub base_url: Option<String>,
    /// Requested page size; each provider clamps it to its own maximum.
    pub page_size: u32,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
