//! Error type for the MDLP core

use thiserror::Error;

/// Errors surfaced by the discretization core.
///
/// Degenerate numeric cases (single-class slices, `k == 1` in the acceptance
/// test) are not errors: they compute to well-defined values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MdlpError {
    /// Empty arrays, mismatched lengths, NaN features or out-of-range indices.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MdlpError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MdlpError::InvalidInput(message.into())
    }
}

/// Result alias for the MDLP core.
pub type MdlpResult<T> = Result<T, MdlpError>;
