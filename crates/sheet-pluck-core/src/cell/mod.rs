//! Cell-related types
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "H12")
//! - [`CellRange`] - One column and an inclusive row span (e.g., "H12-H300")
//! - [`CellValue`] - The typed value resolved for a cell

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::CellValue;
