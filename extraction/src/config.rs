//! FILENAME: extraction/src/config.rs
//! PURPOSE: Filter configuration applied to rows before conversion.
//! CONTEXT: The corpus contains constructs the converter's
//! operator/operand model does not cover (type casts, builtin calls,
//! vectorized-operation markers, generic method/this references). Rows
//! mentioning them are skipped up front, without invoking the core.
//! The filter is an explicit value passed into the pipeline, so it is
//! testable independently of the converter.

use crate::error::ExtractionError;
use converter::ConversionError;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Maximum accepted length of the input expression field. Rows at or
/// above this length are skipped.
pub const DEFAULT_MAX_EXPRESSION_LENGTH: usize = 1000;

/// Substrings marking constructs the converter does not support.
///
/// The list is carried over from the extraction runs that produced the
/// corpus, entry for entry. The duplicate "op->type" and the bare
/// "this" entry are preserved as-is rather than second-guessed, which
/// is why this is a list and not a set.
pub const DEFAULT_DENYLIST: [&str; 14] = [
    "int32",
    "float32",
    "select",
    "broadcast",
    "ramp",
    "fold",
    "Overflow",
    "can_prove",
    "canprove",
    "op->type",
    "op->type",
    "Call",
    "this",
    "IRMatcher",
];

/// Row filter: length threshold plus denylisted substrings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterConfig {
    pub max_expression_length: usize,
    pub denylisted_substrings: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            max_expression_length: DEFAULT_MAX_EXPRESSION_LENGTH,
            denylisted_substrings: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Loads a filter configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ExtractionError> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(|e| ExtractionError::Config(e.to_string()))
    }

    /// Checks an input expression against the filter. Returns the
    /// matched construct as an `UnsupportedConstruct` error so the
    /// pipeline reports one error domain for all skip reasons.
    pub fn check(&self, expression: &str) -> Result<(), ConversionError> {
        if expression.len() >= self.max_expression_length {
            return Err(ConversionError::UnsupportedConstruct {
                construct: format!(
                    "expression length {} exceeds limit {}",
                    expression.len(),
                    self.max_expression_length
                ),
            });
        }

        for banned in &self.denylisted_substrings {
            if expression.contains(banned.as_str()) {
                return Err(ConversionError::UnsupportedConstruct {
                    construct: banned.clone(),
                });
            }
        }

        Ok(())
    }
}
