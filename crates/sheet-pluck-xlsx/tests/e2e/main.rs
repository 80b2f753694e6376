//! End-to-end tests for sheet-pluck-xlsx.
//!
//! Each test builds the exact package it needs in memory with
//! `zip::ZipWriter`, then extracts ranges from it with `RangeReader` and
//! asserts on the typed values.

mod common;
mod reading;

// Re-export common utilities for submodules
pub use common::*;
