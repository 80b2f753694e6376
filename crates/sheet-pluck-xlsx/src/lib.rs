//! # sheet-pluck-xlsx
//!
//! Extracts typed values from single-column cell ranges of one XLSX
//! worksheet without building a workbook object model.
//!
//! Only three parts of the package are read: the worksheet, the shared
//! string table and the styles part. Each call builds its lookup tables
//! fresh and discards them when it returns.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheet_pluck_xlsx::RangeReader;
//!
//! let result = RangeReader::read_file("report.xlsx", 1, &["H12-H300", "B2"]).unwrap();
//! for (row, value) in result.column("H").unwrap().rows() {
//!     println!("H{row}: {value}");
//! }
//! ```

pub mod date;
pub mod error;
pub mod extract;
pub mod package;
pub mod reader;
pub mod resolve;
pub mod sheet;
pub mod shared_strings;
pub mod styles;

pub use error::{XlsxError, XlsxResult};
pub use extract::{extract_ranges, extract_with_index};
pub use package::{MemoryPackage, PartSource, ZipPackage};
pub use reader::RangeReader;
pub use resolve::resolve_cell;
pub use sheet::{RawCell, SheetIndex};
pub use shared_strings::SharedStringTable;
pub use styles::{FormatKind, StyleTable};

pub use sheet_pluck_core::{CellAddress, CellRange, CellValue, RangeResult};
