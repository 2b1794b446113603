//! Centralized error types for rowtable.
//!
//! This module provides the error hierarchy for the widget with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.
//!
//! The design philosophy is to fail loudly on caller-contract violations
//! (malformed records, mismatched declarations) and to degrade silently on
//! cosmetic edge cases, which never surface here at all.

use thiserror::Error;

/// Errors raised by [`Table`](crate::Table) construction and row loading.
///
/// Every variant is a caller-contract violation: the embedding application
/// handed the widget declarations or records that cannot be rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row record does not contain one of the declared field keys.
    #[error("row {row} is missing the declared field key '{key}'")]
    MissingField {
        /// The declared field key that could not be looked up.
        key: String,
        /// Zero-based index of the offending record in the loaded sequence.
        row: usize,
    },

    /// The column descriptor list and the field-key list have different lengths.
    #[error("{columns} column descriptors declared for {keys} field keys")]
    ColumnCount {
        /// Number of column descriptors supplied.
        columns: usize,
        /// Number of field keys supplied.
        keys: usize,
    },
}

impl TableError {
    /// Create a missing-field error.
    pub fn missing_field(key: impl Into<String>, row: usize) -> Self {
        TableError::MissingField {
            key: key.into(),
            row,
        }
    }
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, TableError>;
