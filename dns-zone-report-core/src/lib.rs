//! DNS Zone Report Core Library
//!
//! Orchestrates the read-only zone / record listing and the report export:
//! - Zone Service: list every zone, list every record of a zone
//! - Report Service: write a summary sheet plus one sheet per zone to a [`ReportSink`]
//!
//! The token source, report destination and progress output are injected through traits,
//! so this crate has no dependency on any config format, file type or terminal.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ReportService, ServiceContext, ZoneService};
pub use traits::{
    CredentialProvider, DefaultProviderFactory, ProgressReporter, ProviderFactory, ReportSink,
    SheetId, StaticCredentialProvider,
};
pub use types::{DnsRecord, ScanOptions, ScanSummary, Zone, ZoneFailure};
