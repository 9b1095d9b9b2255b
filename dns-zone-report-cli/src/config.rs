//! JSON 配置文件凭证来源

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dns_zone_report_core::error::{CoreError, CoreResult};
use dns_zone_report_core::traits::CredentialProvider;
use serde::Deserialize;

/// Default location of the token file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/cloudflare.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudflareConfig {
    auth_token: Option<String>,
}

/// Reads the API token from `{"authToken": "..."}`.
///
/// The file is read on every call, so edits are picked up between runs of the same process.
pub struct JsonFileCredentialProvider {
    path: PathBuf,
}

impl JsonFileCredentialProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_token(path: &Path) -> CoreResult<String> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "Cannot read configuration file {}: {e}",
                path.display()
            ))
        })?;

        let config: CloudflareConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Configuration(format!(
                "Invalid configuration file {}: {e}",
                path.display()
            ))
        })?;

        match config.auth_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(CoreError::Configuration(format!(
                "Missing authToken in {}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl CredentialProvider for JsonFileCredentialProvider {
    async fn get_token(&self) -> CoreResult<String> {
        tracing::debug!("Loading API token from {}", self.path.display());
        Self::read_token(&self.path)
    }
}
