//! 凭证提供者抽象 Trait

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};

/// 凭证提供者 Trait
///
/// 平台实现:
/// - CLI: `JsonFileCredentialProvider`（`{"authToken": "..."}` 配置文件）
/// - 注入: [`StaticCredentialProvider`]（命令行参数 / 环境变量）
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// 获取 API token
    ///
    /// # Returns
    /// * `Ok(token)` - 非空 token
    /// * `Err(CoreError::Configuration)` - token 缺失或配置不可读
    async fn get_token(&self) -> CoreResult<String>;
}

/// Token supplied up front.
pub struct StaticCredentialProvider {
    token: Option<String>,
}

impl StaticCredentialProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that always reports a missing token.
    #[must_use]
    pub fn missing() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_token(&self) -> CoreResult<String> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(CoreError::Configuration(
                "Missing API token for Cloudflare".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_trimmed_token() {
        let provider = StaticCredentialProvider::new("  abc123\n");
        assert_eq!(provider.get_token().await.unwrap(), "abc123");
    }

    #[tokio::test]
    async fn blank_token_is_configuration_error() {
        let provider = StaticCredentialProvider::new("   ");
        assert!(matches!(
            provider.get_token().await,
            Err(CoreError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn missing_token_is_configuration_error() {
        let provider = StaticCredentialProvider::missing();
        assert!(matches!(
            provider.get_token().await,
            Err(CoreError::Configuration(_))
        ));
    }
}
