use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::http_client::TransportError;
use crate::types::{DnsRecord, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求的资源路径（用于 `NotFound`）
    pub path: Option<String>,
    /// HTTP 状态码（用于错误码无法识别时的回退）
    pub status: Option<u16>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：传输层错误
    fn transport_error(&self, err: TransportError) -> ProviderError {
        match err {
            TransportError::Timeout(detail) => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail,
            },
            TransportError::Network(detail) | TransportError::Client(detail) => {
                ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail,
                }
            }
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only DNS provider.
///
/// Both listing operations return the complete result set across every page, in the
/// provider's order, with malformed items dropped. A failure on any page fails the whole call.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取全部 zone（自动翻页）
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// 获取指定 zone 的全部 DNS 记录（自动翻页）
    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>>;
}
