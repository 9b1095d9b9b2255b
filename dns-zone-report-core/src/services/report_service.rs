//! 报表导出服务

use std::sync::Arc;

use dns_zone_report_provider::{DnsRecord, Zone};

use crate::error::CoreResult;
use crate::services::{ServiceContext, ZoneService};
use crate::traits::{ProgressReporter, ReportSink, SheetId};
use crate::types::{ScanOptions, ScanSummary, ZoneFailure};

pub const SUMMARY_SHEET: &str = "Summary";
const SUMMARY_HEADER: [&str; 4] = ["Domain", "Name", "Type", "Content"];
const ZONE_HEADER: [&str; 3] = ["Name", "Type", "Content"];

/// 报表导出服务
///
/// Writes a summary sheet with every record of every zone, followed by one sheet per zone.
/// Zones and records are fetched one after another, never concurrently.
pub struct ReportService {
    zones: ZoneService,
    reporter: Arc<dyn ProgressReporter>,
}

impl ReportService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            zones: ZoneService::new(ctx),
            reporter,
        }
    }

    /// 导出全部 zone 及其记录
    ///
    /// A failing zone listing aborts the export. A zone whose records cannot be fetched gets
    /// no sheet; it aborts the export with `fail_fast`, otherwise it is listed in
    /// [`ScanSummary::failed_zones`]. Sink failures always abort.
    pub async fn export(
        &self,
        sink: &mut dyn ReportSink,
        options: &ScanOptions,
    ) -> CoreResult<ScanSummary> {
        let summary_sheet = sink.add_sheet(SUMMARY_SHEET, &SUMMARY_HEADER)?;
        let mut summary = ScanSummary::default();

        self.reporter.on_start("Generating a list of the Cloudflare zones");
        let zones = self.finish(self.zones.list_zones().await)?;
        summary.zone_count = zones.len();

        for zone in &zones {
            self.reporter
                .on_start(&format!("Collecting DNS records for {}", zone.name));

            let records = match self.zones.list_records(zone).await {
                Ok(records) => records,
                Err(e) => {
                    self.reporter.on_error(&e.to_string());
                    if options.fail_fast {
                        return Err(e);
                    }
                    summary.failed_zones.push(ZoneFailure {
                        zone_name: zone.name.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            self.finish(write_zone(sink, summary_sheet, zone, &records))?;
            summary.record_count += records.len();
        }

        self.reporter.on_start("Saving the report");
        summary.output = self.finish(sink.save())?;

        if !summary.is_complete() {
            log::warn!(
                "Exported {} of {} zones; failed: {}",
                summary.zone_count - summary.failed_zones.len(),
                summary.zone_count,
                summary
                    .failed_zones
                    .iter()
                    .map(|f| f.zone_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Ok(summary)
    }

    fn finish<T>(&self, result: CoreResult<T>) -> CoreResult<T> {
        match &result {
            Ok(_) => self.reporter.on_success(),
            Err(e) => self.reporter.on_error(&e.to_string()),
        }
        result
    }
}

fn write_zone(
    sink: &mut dyn ReportSink,
    summary_sheet: SheetId,
    zone: &Zone,
    records: &[DnsRecord],
) -> CoreResult<()> {
    let sheet = sink.add_sheet(&zone.name, &ZONE_HEADER)?;
    for record in records {
        let (name, record_type, content) = (
            record.name.as_str(),
            record.record_type.as_str(),
            record.content.as_str(),
        );
        sink.write_row(sheet, &[name, record_type, content])?;
        sink.write_row(summary_sheet, &[zone.name.as_str(), name, record_type, content])?;
    }
    Ok(())
}
