//! FILENAME: converter/src/normalize.rs
//! PURPOSE: Canonicalizes unary negation in a prefix expression tree.
//! CONTEXT: Downstream consumers expect unary negation expressed as
//! multiplication by -1, keeping their operator set minimal. The rewrite
//! runs on the tree before rendering, so it cannot drift out of sync
//! with the renderer's whitespace conventions.
//!
//! RULE: (- X) where X is a bare identifier becomes (* X -1).
//! Numeric literals are deliberately NOT rewritten: (- 5) stays (- 5),
//! and negation of compound sub-expressions is left untouched.

use crate::prefix::Prefix;
use crate::token::is_identifier;

/// Rewrites every unary-minus-of-an-identifier node in the tree to an
/// explicit multiplication by -1, bottom-up.
///
/// Idempotent: the rewritten form contains no unary minus, so applying
/// the pass again is a no-op.
pub fn rewrite_negated_identifiers(expr: Prefix) -> Prefix {
    match expr {
        Prefix::Atom(_) => expr,
        Prefix::App { op, args } => {
            let args: Vec<Prefix> = args.into_iter().map(rewrite_negated_identifiers).collect();

            // Unary minus over a bare identifier; binary minus has two
            // args and never matches.
            if op == "-" && args.len() == 1 {
                if let Prefix::Atom(name) = &args[0] {
                    if is_identifier(name) {
                        return Prefix::App {
                            op: "*".to_string(),
                            args: vec![Prefix::Atom(name.clone()), Prefix::Atom("-1".to_string())],
                        };
                    }
                }
            }

            Prefix::App { op, args }
        }
    }
}
