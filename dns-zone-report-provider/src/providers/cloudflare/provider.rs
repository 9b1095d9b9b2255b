//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::traits::{DnsProvider, ProviderErrorMapper};
use crate::types::{DnsRecord, Zone};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{CloudflareProvider, MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES};

impl CloudflareProvider {
    /// 将原始 zone 转换为 `Zone`，缺少 `id` / `name` / `status` 任一字段时返回 `None`
    pub(crate) fn zone_from_raw(raw: &Value) -> Option<Zone> {
        let item = raw.as_object()?;
        Some(Zone {
            id: field_as_string(item, "id")?,
            name: field_as_string(item, "name")?,
            status: field_as_string(item, "status")?,
        })
    }

    /// 将原始记录转换为 `DnsRecord`，缺少 `id` / `type` / `name` / `content` 任一字段时返回 `None`
    pub(crate) fn record_from_raw(raw: &Value) -> Option<DnsRecord> {
        let item = raw.as_object()?;
        Some(DnsRecord {
            id: field_as_string(item, "id")?,
            record_type: field_as_string(item, "type")?,
            name: field_as_string(item, "name")?,
            content: field_as_string(item, "content")?,
        })
    }

    fn parse_items<T>(&self, raw: Vec<Value>, kind: &str, parse: fn(&Value) -> Option<T>) -> Vec<T> {
        let total = raw.len();
        let parsed: Vec<T> = raw
            .iter()
            .filter_map(|item| {
                let value = parse(item);
                if value.is_none() {
                    log::debug!(
                        "[{}] Skipping malformed {kind}: {}",
                        self.provider_name(),
                        truncate_for_log(&item.to_string())
                    );
                }
                value
            })
            .collect();

        if parsed.len() < total {
            log::info!(
                "[{}] Skipped {} of {total} {kind} items with missing fields",
                self.provider_name(),
                total - parsed.len()
            );
        }
        parsed
    }
}

/// Scalar field read as a string. `null`, arrays and objects count as missing.
fn field_as_string(item: &Map<String, Value>, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let raw = self.get_all("zones", MAX_PAGE_SIZE_ZONES).await?;
        Ok(self.parse_items(raw, "zone", Self::zone_from_raw))
    }

    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>> {
        let path = format!("zones/{}/dns_records", urlencoding::encode(&zone.id));
        let raw = self.get_all(&path, MAX_PAGE_SIZE_RECORDS).await?;
        Ok(self.parse_items(raw, "record", Self::record_from_raw))
    }
}
