//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use dns_zone_report_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Auth token missing, or the configuration holding it could not be read.
    ///
    /// Raised before any network call is attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider request failed (transport failure, non-200 status, malformed body).
    #[error("Provider request failed: {0}")]
    Provider(#[from] ProviderError),

    /// The report sink could not create a sheet, write a row or save.
    #[error("Report error: {0}")]
    Report(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad configuration, rejected token, ...); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::Report(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_is_wrapped_with_its_message() {
        let err: CoreError = ProviderError::NetworkError {
            provider: "cloudflare".to_string(),
            detail: "connection refused".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Provider request failed: [cloudflare] Network error: connection refused"
        );
        assert!(!err.is_expected());
    }

    #[test]
    fn configuration_error_is_expected() {
        let err = CoreError::Configuration("missing authToken".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing authToken");
        assert!(err.is_expected());
    }
}
