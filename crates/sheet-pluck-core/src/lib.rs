//! # sheet-pluck-core
//!
//! Core data types for the sheet-pluck range extractor.
//!
//! This crate has no I/O. It provides:
//! - [`CellAddress`] and [`CellRange`] - single-column addressing and range expressions
//! - [`CellValue`] - the typed value resolved for one cell
//! - [`RangeResult`] - column → row → value mapping returned by an extraction
//!
//! ## Example
//!
//! ```rust
//! use sheet_pluck_core::CellRange;
//!
//! let range = CellRange::parse("h12-h14").unwrap();
//! assert_eq!(range.column(), "H");
//! assert_eq!(range.rows().collect::<Vec<_>>(), vec![12, 13, 14]);
//! ```

pub mod cell;
pub mod error;
pub mod range;

pub use cell::{CellAddress, CellRange, CellValue};
pub use error::{Error, Result};
pub use range::{ColumnValues, RangeResult};
