//! Core 层类型定义

use std::path::PathBuf;

// Re-export provider domain records
pub use dns_zone_report_provider::{DnsRecord, Zone};

/// Report export options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Abort the export on the first zone whose records cannot be fetched.
    pub fail_fast: bool,
}

/// A zone whose records could not be collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFailure {
    pub zone_name: String,
    pub reason: String,
}

/// Result of a report export
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Zones returned by the provider
    pub zone_count: usize,
    /// Records written across all exported zones
    pub record_count: usize,
    pub failed_zones: Vec<ZoneFailure>,
    /// Location reported by the sink after saving
    pub output: Option<PathBuf>,
}

impl ScanSummary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed_zones.is_empty()
    }
}
