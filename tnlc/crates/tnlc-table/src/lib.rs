//! tnlc-table - The columnar table the VM transforms.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! A [`Frame`] is an ordered collection of named [`Series`] of equal length.
//! Column order is observable (it is the CSV header order), so the frame is
//! backed by an insertion-ordered map. Each series is homogeneously typed:
//! integers, unsigned integers, strings, or booleans.
//!
//! The operations here are exactly the vocabulary the interpreter needs:
//! element-wise arithmetic, per-cell string transforms, rename, snapshot,
//! write-back, and a CSV codec. Type errors (arithmetic on a string column,
//! string ops on an integer column) are reported as [`TableError`]s and the
//! interpreter passes them through without catching.

mod csv;
mod frame;
mod series;

pub use frame::Frame;
pub use series::Series;

use thiserror::Error;

/// Errors from frame/series operations and the CSV codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// An arithmetic map hit a non-numeric column.
    #[error("cannot apply numeric operation `{op}` to {dtype} column")]
    NotNumeric { op: &'static str, dtype: &'static str },

    /// A string map hit a non-string column.
    #[error("cannot apply string operation `{op}` to {dtype} column")]
    NotString { op: &'static str, dtype: &'static str },

    /// Checked arithmetic overflowed.
    #[error("integer overflow in `{op}`")]
    Overflow { op: &'static str },

    /// Floor division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A series of the wrong length was inserted into a frame.
    #[error("column `{name}` has length {len}, expected {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    /// CSV input had no header row.
    #[error("no columns to parse from empty input")]
    EmptyInput,

    /// A CSV record had the wrong number of fields.
    #[error("expected {expected} fields in line {line}, saw {saw}")]
    RaggedRow {
        line: usize,
        expected: usize,
        saw: usize,
    },

    /// A quoted CSV field was never closed.
    #[error("unterminated quoted field in CSV input")]
    UnterminatedQuote,
}
