//! Cloudflare HTTP 请求方法（分页拉取）

use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpResponse;
use crate::types::PaginationParams;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::{CloudflareErrorBody, CloudflareProvider, CloudflareResponse, CloudflareResultInfo};

impl CloudflareProvider {
    fn page_url(&self, path: &str, params: PaginationParams) -> String {
        format!(
            "{}/{path}?page={}&per_page={}",
            self.base_url, params.page, params.page_size
        )
    }

    /// 执行单页 GET 请求
    ///
    /// Only a 200 response whose body carries both `result` (array) and
    /// `result_info` is a page; everything else is an error.
    pub(crate) async fn get_page(
        &self,
        path: &str,
        params: PaginationParams,
    ) -> Result<(Vec<Value>, CloudflareResultInfo)> {
        let url = self.page_url(path, params);
        log::debug!(
            "[{}] GET {url} (token {})",
            self.provider_name(),
            mask_secret(&self.api_token)
        );

        let response = self
            .transport
            .get(&url, &self.api_token)
            .await
            .map_err(|e| self.transport_error(e))?;

        if response.status != 200 {
            return Err(self.status_error(path, &response));
        }

        let cf_response: CloudflareResponse =
            serde_json::from_str(&response.body).map_err(|e| {
                log::error!("[{}] JSON 解析失败: {e}", self.provider_name());
                log::error!(
                    "[{}] 原始响应: {}",
                    self.provider_name(),
                    truncate_for_log(&response.body)
                );
                self.parse_error(e)
            })?;

        if cf_response.success == Some(false) {
            let raw = first_error(cf_response.errors.unwrap_or_default())
                .unwrap_or_else(|| RawApiError::new("Unknown error"));
            log::error!("[{}] API 错误: {}", self.provider_name(), raw.message);
            return Err(self.map_error(
                raw,
                ErrorContext {
                    path: Some(path.to_string()),
                    status: None,
                },
            ));
        }

        let items = cf_response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))?;
        let info = cf_response
            .result_info
            .ok_or_else(|| self.parse_error("响应中缺少 result_info 字段"))?;

        Ok((items, info))
    }

    /// 拉取全部分页并按页序拼接
    ///
    /// Page N+1 is requested only after page N was parsed. Any failing page fails the
    /// whole call and the items gathered so far are dropped.
    pub(crate) async fn get_all(&self, path: &str, max_page_size: u32) -> Result<Vec<Value>> {
        let mut params = PaginationParams {
            page: 1,
            page_size: self.page_size.min(max_page_size),
        };
        let mut items = Vec::new();

        loop {
            let (mut batch, info) = self.get_page(path, params).await?;
            log::debug!(
                "[{}] {path}: page {}/{} ({} items)",
                self.provider_name(),
                info.page,
                info.total_pages,
                batch.len()
            );
            items.append(&mut batch);

            // A provider echoing a stale page number must not stall the loop
            let current = info.page.max(params.page);
            if current >= info.total_pages {
                break;
            }
            params.page = current + 1;
        }

        Ok(items)
    }

    /// 将非 200 响应映射为错误
    fn status_error(&self, path: &str, response: &HttpResponse) -> ProviderError {
        let raw = serde_json::from_str::<CloudflareErrorBody>(&response.body)
            .ok()
            .and_then(|body| first_error(body.errors))
            .unwrap_or_else(|| RawApiError::new(truncate_for_log(&response.body)));

        if response.status == 429 {
            log::warn!(
                "[{}] Rate limited (HTTP 429), retry_after={:?}",
                self.provider_name(),
                response.retry_after
            );
            return ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: response.retry_after,
                raw_message: non_empty(raw.message),
            };
        }

        log::warn!(
            "[{}] HTTP {} for {path}: {}",
            self.provider_name(),
            response.status,
            raw.message
        );
        self.map_error(
            raw,
            ErrorContext {
                path: Some(path.to_string()),
                status: Some(response.status),
            },
        )
    }
}

fn first_error(errors: Vec<super::types::CloudflareError>) -> Option<RawApiError> {
    errors
        .into_iter()
        .next()
        .map(|e| RawApiError::with_code(e.code.to_string(), e.message))
}

pub(super) fn non_empty(message: String) -> Option<String> {
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}
