//! Error types for line splitting

use thiserror::Error;

/// Result type alias for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Why a split failed
///
/// The set is closed: every failing call reports exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SplitErrorKind {
    /// Input line was empty - nothing to parse
    #[error("string value is empty")]
    NullInput,
    /// A quoted span was opened and never closed by end of input
    #[error("unmatched quote")]
    UnmatchedQuote,
}

/// Error returned by a failed split
///
/// Carries enough context for the caller to report or log the failure:
/// the operation that failed, the offending input line, and the kind.
/// No partial field list accompanies an error.
///
/// # Examples
///
/// ```
/// use csvsplit::{split, SplitErrorKind};
///
/// let err = split("a,\"b").unwrap_err();
/// assert_eq!(err.kind, SplitErrorKind::UnmatchedQuote);
/// assert_eq!(err.input, "a,\"b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("csvsplit.{operation}: {input}: {kind}")]
pub struct SplitError {
    /// Name of the failing operation
    pub operation: &'static str,
    /// The input line that failed to split
    pub input: String,
    /// What went wrong
    pub kind: SplitErrorKind,
}

impl SplitError {
    pub(crate) fn new(operation: &'static str, input: &str, kind: SplitErrorKind) -> Self {
        SplitError {
            operation,
            input: input.to_string(),
            kind,
        }
    }
}
