//! XLSX 报表输出

use std::path::PathBuf;

use chrono::{DateTime, Local};
use dns_zone_report_core::error::{CoreError, CoreResult};
use dns_zone_report_core::traits::{ReportSink, SheetId};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Excel limit on worksheet name length.
const MAX_TITLE_LEN: usize = 31;
const INVALID_TITLE_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Writes the report to `<output_dir>/cloudflare-YYYYMMDDHHMM.xlsx`.
///
/// Header rows are bold and every column is autofit when saving.
pub struct XlsxReportSink {
    workbook: Workbook,
    header_format: Format,
    output_dir: PathBuf,
    file_name: String,
    titles: Vec<String>,
    /// Next free row per sheet
    next_rows: Vec<u32>,
}

impl XlsxReportSink {
    pub fn new(output_dir: impl Into<PathBuf>, created_at: DateTime<Local>) -> Self {
        Self {
            workbook: Workbook::new(),
            header_format: Format::new().set_bold(),
            output_dir: output_dir.into(),
            file_name: format!("cloudflare-{}.xlsx", created_at.format("%Y%m%d%H%M")),
            titles: Vec::new(),
            next_rows: Vec::new(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

fn report_error(e: XlsxError) -> CoreError {
    CoreError::Report(e.to_string())
}

fn column(index: usize) -> CoreResult<u16> {
    u16::try_from(index).map_err(|_| CoreError::Report(format!("Too many columns: {index}")))
}

impl ReportSink for XlsxReportSink {
    fn add_sheet(&mut self, title: &str, header: &[&str]) -> CoreResult<SheetId> {
        let requested = title;
        let title = unique_title(&sanitize_title(requested), &self.titles);
        if title != requested {
            tracing::debug!("Sheet title '{requested}' adjusted to '{title}'");
        }

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&title).map_err(report_error)?;
        for (i, field) in header.iter().enumerate() {
            worksheet
                .write_string_with_format(0, column(i)?, *field, &self.header_format)
                .map_err(report_error)?;
        }

        self.titles.push(title);
        self.next_rows.push(1);
        Ok(SheetId(self.titles.len() - 1))
    }

    fn write_row(&mut self, sheet: SheetId, fields: &[&str]) -> CoreResult<()> {
        let row = self
            .next_rows
            .get_mut(sheet.0)
            .ok_or_else(|| CoreError::Report(format!("Unknown sheet {}", sheet.0)))?;
        let worksheet = self
            .workbook
            .worksheet_from_index(sheet.0)
            .map_err(report_error)?;

        for (i, field) in fields.iter().enumerate() {
            worksheet
                .write_string(*row, column(i)?, *field)
                .map_err(report_error)?;
        }
        *row += 1;
        Ok(())
    }

    fn save(&mut self) -> CoreResult<Option<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            CoreError::Report(format!(
                "Cannot create output directory {}: {e}",
                self.output_dir.display()
            ))
        })?;

        for worksheet in self.workbook.worksheets_mut() {
            worksheet.autofit();
        }

        let path = self.output_path();
        self.workbook.save(&path).map_err(report_error)?;
        tracing::info!("Report saved to {}", path.display());
        Ok(Some(path))
    }
}

/// Apply Excel worksheet naming rules.
///
/// Forbidden characters become `_`, surrounding apostrophes are dropped and the result is
/// cut to 31 characters. An empty result becomes `Sheet`.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if INVALID_TITLE_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let truncated: String = replaced
        .trim_matches('\'')
        .chars()
        .take(MAX_TITLE_LEN)
        .collect();
    let trimmed = truncated.trim_end_matches('\'');

    if trimmed.trim().is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Make `title` unique among `taken` (case-insensitive) with a ` (n)` suffix.
fn unique_title(title: &str, taken: &[String]) -> String {
    let is_taken = |candidate: &str| {
        let lower = candidate.to_lowercase();
        taken.iter().any(|t| t.to_lowercase() == lower)
    };
    if !is_taken(title) {
        return title.to_string();
    }

    let mut n = 2;
    loop {
        let suffix = format!(" ({n})");
        let keep = MAX_TITLE_LEN.saturating_sub(suffix.chars().count());
        let head: String = title.chars().take(keep).collect();
        let candidate = format!("{head}{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
