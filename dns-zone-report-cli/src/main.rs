//! DNS Zone Report
//!
//! Exports every Cloudflare zone and its DNS records into an XLSX audit report:
//! a `Summary` sheet holding all records plus one sheet per zone.
//!
//! # Usage
//! ```bash
//! # Token from config/cloudflare.json ({"authToken": "..."})
//! dns-zone-report
//!
//! # Token from the environment, report written to ./reports
//! CLOUDFLARE_API_TOKEN=... dns-zone-report --output-dir reports -v
//! ```

mod config;
mod console;
mod xlsx;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use dns_zone_report_core::services::{ReportService, ServiceContext};
use dns_zone_report_core::traits::{
    CredentialProvider, DefaultProviderFactory, StaticCredentialProvider,
};
use dns_zone_report_core::types::{ScanOptions, ScanSummary};
use dns_zone_report_provider::{ProviderOptions, DEFAULT_PAGE_SIZE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{JsonFileCredentialProvider, DEFAULT_CONFIG_PATH};
use console::ConsoleReporter;
use xlsx::XlsxReportSink;

/// Exit code when the report was saved but some zones could not be collected.
const EXIT_PARTIAL: u8 = 2;

// ============================================================
// CLI Definition
// ============================================================

#[derive(Parser)]
#[command(name = "dns-zone-report")]
#[command(about = "Export Cloudflare zones and DNS records to an XLSX report", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding {"authToken": "..."}
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Cloudflare API token (takes precedence over the config file)
    #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Directory the report is written to
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    /// Items requested per page (clamped to the endpoint maximum)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,

    /// Override the API base URL
    #[arg(long, hide = true)]
    base_url: Option<String>,

    /// Abort on the first zone whose records cannot be fetched
    #[arg(long)]
    fail_fast: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ============================================================
// Main Entry Point
// ============================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(summary) if summary.is_complete() => ExitCode::SUCCESS,
        Ok(summary) => {
            eprintln!(
                " {} {} zone(s) could not be collected",
                "!".yellow(),
                summary.failed_zones.len()
            );
            for failure in &summary.failed_zones {
                eprintln!("   {}: {}", failure.zone_name, failure.reason);
            }
            ExitCode::from(EXIT_PARTIAL)
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the progress lines on stdout.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<ScanSummary> {
    let credential_provider: Arc<dyn CredentialProvider> = match cli.api_token {
        Some(token) => Arc::new(StaticCredentialProvider::new(token)),
        None => Arc::new(JsonFileCredentialProvider::new(cli.config)),
    };
    let options = ProviderOptions {
        base_url: cli.base_url,
        page_size: cli.page_size,
    };

    let ctx = Arc::new(ServiceContext::new(
        credential_provider,
        Arc::new(DefaultProviderFactory::new(options)),
    ));
    let service = ReportService::new(ctx, Arc::new(ConsoleReporter::new()));

    let mut sink = XlsxReportSink::new(cli.output_dir, chrono::Local::now());
    let summary = service
        .export(&mut sink, &ScanOptions {
            fail_fast: cli.fail_fast,
        })
        .await?;

    if let Some(path) = &summary.output {
        println!(
            " {} zones, {} records written to {}",
            summary.zone_count,
            summary.record_count,
            path.display().to_string().cyan()
        );
    }
    Ok(summary)
}
