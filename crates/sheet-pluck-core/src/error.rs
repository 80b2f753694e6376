//! Error types for sheet-pluck-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheet-pluck-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// A range expression matches neither `COLn-COLm` nor `COLn`,
    /// or its two column tokens differ
    #[error("Invalid range expression: {0}")]
    InvalidRangeExpression(String),
}
