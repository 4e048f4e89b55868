//! FILENAME: converter/src/error.rs

use thiserror::Error;

/// Errors surfaced by the conversion core.
///
/// All variants are recoverable at row granularity: a caller processing
/// a batch of expressions skips the failing row and continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Unrecognized character or parenthesis-balance violation detected
    /// while tokenizing.
    #[error("malformed expression: {reason}")]
    Malformed { reason: String },

    /// Operator/operand stack arity mismatch detected during conversion:
    /// insufficient operands for an operator, or more than one residual
    /// sub-expression at end of input.
    #[error("unbalanced expression: {reason}")]
    Unbalanced { reason: String },

    /// The expression matched a known-unsupported construct. Raised by
    /// the driver's pre-filter before the core is invoked.
    #[error("unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
}

impl ConversionError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ConversionError::Malformed {
            reason: reason.into(),
        }
    }

    pub fn unbalanced(reason: impl Into<String>) -> Self {
        ConversionError::Unbalanced {
            reason: reason.into(),
        }
    }
}
