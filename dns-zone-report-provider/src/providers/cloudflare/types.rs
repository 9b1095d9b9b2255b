//! Cloudflare API 类型定义

use serde::Deserialize;
use serde_json::Value;

/// Cloudflare API 通用响应
///
/// Items stay untyped (`Value`) so that a single malformed record can be dropped
/// without failing the whole page.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse {
    /// Absent on some proxies/mirrors; only an explicit `false` is an error.
    #[serde(default)]
    pub success: Option<bool>,
    pub result: Option<Vec<Value>>,
    #[serde(default)]
    pub errors: Option<Vec<CloudflareError>>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CloudflareResultInfo {
    pub page: u32,
    pub total_pages: u32,
}

/// 仅用于解析错误响应体（非 200）
#[derive(Debug, Deserialize)]
pub struct CloudflareErrorBody {
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
}
