//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;
use super::http::non_empty;

/// Cloudflare error code mapping, falling back to the HTTP status.
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication error
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9109: Unauthorized to access requested resource / Max auth failures reached
            // 10000: Authentication error
            Some("6003" | "6103" | "6111" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: non_empty(raw.message),
                }
            }

            // 7000: No route for that URI
            // 7003: Could not route to /path. perhaps your object identifier is invalid?
            Some("7000" | "7003") => self.not_found(raw, context),

            _ => match context.status {
                Some(401) => ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: non_empty(raw.message),
                },
                Some(403) => ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: non_empty(raw.message),
                },
                Some(404) => self.not_found(raw, context),
                Some(429) => ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: non_empty(raw.message),
                },
                Some(status) if status != 200 => ProviderError::HttpStatus {
                    provider: self.provider_name().to_string(),
                    status,
                    raw_message: non_empty(raw.message),
                },
                // Error reported inside a 200 envelope
                _ => self.unknown_error(raw),
            },
        }
    }
}

impl CloudflareProvider {
    fn not_found(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        ProviderError::NotFound {
            provider: self.provider_name().to_string(),
            path: context.path.unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: non_empty(raw.message),
        }
    }
}
