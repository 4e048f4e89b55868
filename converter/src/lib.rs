//! FILENAME: converter/src/lib.rs
//! PURPOSE: Library root for the infix-to-prefix expression converter.
//! CONTEXT: This crate is the computational core of the extraction tool.
//! It turns a raw infix expression string into a fully parenthesized
//! prefix expression string, ready for consumption by an s-expression
//! based rewrite engine.
//!
//! PIPELINE: Infix String --> Lexer --> Tokens --> Converter --> Prefix Tree
//!           --> Normalizer --> Rendered Prefix String
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, %
//! - Comparison: ==, !=, <, >, <=, >=
//! - Logical: &&, ||, ! (not)
//! - Unary negation: -a (rewritten to (* a -1) for bare identifiers)
//! - Parentheses for grouping
//! - Identifiers, $-prefixed names, and numeric literals as operands

pub mod error;
pub mod lexer;
pub mod normalize;
pub mod ops;
pub mod prefix;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use error::ConversionError;
pub use lexer::tokenize;
pub use normalize::rewrite_negated_identifiers;
pub use prefix::{to_prefix, Prefix};
pub use token::Token;

/// Cosmetic 1-bit unsigned cast marker stripped before tokenizing.
/// The cast carries no information the converter models, so its removal
/// is a pure textual substitution.
pub const UINT1_CAST: &str = "(uint1)";

/// Converts a raw infix expression string into its rendered prefix form.
///
/// Composes the full core pipeline: cast stripping, tokenizing,
/// infix-to-prefix conversion, unary-negation normalization, and
/// rendering. A failure at any stage surfaces as a typed
/// `ConversionError`; callers never receive a partially converted
/// result.
pub fn process(raw: &str) -> Result<String, ConversionError> {
    let stripped = raw.replace(UINT1_CAST, "");
    let tokens = tokenize(&stripped)?;
    let tree = to_prefix(&tokens)?;
    let normalized = rewrite_negated_identifiers(tree);
    Ok(normalized.to_string())
}
