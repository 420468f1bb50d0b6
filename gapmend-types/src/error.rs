use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gapmend workspace.
///
/// Covers argument validation, violated series preconditions (ordering,
/// uniqueness, grid alignment), unknown labels, and missing fields.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GapmendError {
    /// Issues with the supplied or produced data.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "series for AAPL".
        what: String,
    },

    /// The timeframe label is not one of the supported labels.
    #[error("unknown timeframe label: {label}")]
    UnknownTimeframe {
        /// The label as supplied by the caller.
        label: String,
    },

    /// The reference field is absent from the input columns.
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the field that was requested.
        field: String,
    },

    /// Two bars share the same timestamp.
    #[error("duplicate timestamp at position {position}: {ts}")]
    DuplicateTimestamp {
        /// Index of the second occurrence.
        position: usize,
        /// RFC 3339 rendering of the timestamp.
        ts: String,
    },

    /// A bar is earlier than its predecessor.
    #[error("timestamps not increasing at position {position}: {ts}")]
    NonMonotonic {
        /// Index of the offending bar.
        position: usize,
        /// RFC 3339 rendering of the timestamp.
        ts: String,
    },

    /// An observation does not land on the expected grid.
    #[error("observation at {ts} does not fall on the expected grid")]
    OffGrid {
        /// RFC 3339 rendering of the timestamp.
        ts: String,
    },
}

impl GapmendError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `UnknownTimeframe` error.
    pub fn unknown_timeframe(label: impl Into<String>) -> Self {
        Self::UnknownTimeframe {
            label: label.into(),
        }
    }

    /// Helper: build a `MissingField` error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true if the error reports a violated series precondition
    /// (ordering, uniqueness, or grid alignment) rather than a bad argument.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTimestamp { .. } | Self::NonMonotonic { .. } | Self::OffGrid { .. }
        )
    }
}
