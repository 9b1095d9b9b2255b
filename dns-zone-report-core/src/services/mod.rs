//! 业务逻辑服务层

mod report_service;
mod zone_service;

pub use report_service::ReportService;
pub use zone_service::ZoneService;

use std::sync::Arc;

use dns_zone_report_provider::DnsProvider;

use crate::error::CoreResult;
use crate::traits::{CredentialProvider, ProviderFactory};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的凭证来源。
pub struct ServiceContext {
    /// 凭证来源
    pub credential_provider: Arc<dyn CredentialProvider>,
    /// Provider 工厂
    pub provider_factory: Arc<dyn ProviderFactory>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        provider_factory: Arc<dyn ProviderFactory>,
    ) -> Self {
        Self {
            credential_provider,
            provider_factory,
        }
    }

    /// 获取 Provider 实例
    ///
    /// The token is resolved first, so a configuration error never reaches the factory.
    pub async fn create_provider(&self) -> CoreResult<Arc<dyn DnsProvider>> {
        let token = self.credential_provider.get_token().await?;
        self.provider_factory.create(token)
    }
}
