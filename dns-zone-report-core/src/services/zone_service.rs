//! Zone / 记录查询服务

use std::sync::Arc;

use dns_zone_report_provider::{DnsRecord, Zone};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// Zone / 记录查询服务
///
/// Every call builds its own provider and runs one atomic fetch-parse-return.
/// No cursor or session survives between calls.
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出账号下的全部 zone（跨所有分页）
    pub async fn list_zones(&self) -> CoreResult<Vec<Zone>> {
        let provider = self.ctx.create_provider().await?;
        let zones = provider
            .list_zones()
            .await
            .map_err(|e| log_failure("zones", e.into()))?;
        log::info!("Listed {} zones", zones.len());
        Ok(zones)
    }

    /// 列出 zone 下的全部 DNS 记录（跨所有分页）
    pub async fn list_records(&self, zone: &Zone) -> CoreResult<Vec<DnsRecord>> {
        let provider = self.ctx.create_provider().await?;
        let records = provider
            .list_records(zone)
            .await
            .map_err(|e| log_failure(&zone.name, e.into()))?;
        log::info!("Listed {} records for {}", records.len(), zone.name);
        Ok(records)
    }
}

fn log_failure(target: &str, err: CoreError) -> CoreError {
    if err.is_expected() {
        log::warn!("Failed to list {target}: {err}");
    } else {
        log::error!("Failed to list {target}: {err}");
    }
    err
}
