//! 报表输出抽象 Trait

use std::path::PathBuf;

use crate::error::CoreResult;

/// Handle of a sheet created by [`ReportSink::add_sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub usize);

/// Tabular report destination.
///
/// Sheets keep their creation order; rows keep their write order. Implementations own
/// every rendering concern (title rules, styling, file format).
pub trait ReportSink {
    /// Create a sheet and write its header row.
    ///
    /// `title` is a display name; implementations may adjust it to fit their format.
    fn add_sheet(&mut self, title: &str, header: &[&str]) -> CoreResult<SheetId>;

    /// Append one row to a sheet.
    fn write_row(&mut self, sheet: SheetId, fields: &[&str]) -> CoreResult<()>;

    /// Persist the report. Returns the written location, if any.
    fn save(&mut self) -> CoreResult<Option<PathBuf>>;
}
