//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during extraction
///
/// Missing cells, out-of-range shared-string or style indices and a missing
/// styles part are not errors; they resolve to [`CellValue::Empty`] or a
/// plain number.
///
/// [`CellValue::Empty`]: sheet_pluck_core::CellValue::Empty
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The requested 1-based worksheet index has no part in the package
    #[error("Sheet not found: no worksheet part for sheet index {0}")]
    SheetNotFound(usize),

    /// Core error (invalid range expression)
    #[error("{0}")]
    Core(#[from] sheet_pluck_core::Error),
}
