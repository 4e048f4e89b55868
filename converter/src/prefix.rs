//! FILENAME: converter/src/prefix.rs
//! PURPOSE: Converts a stream of infix Tokens into a prefix expression tree.
//! CONTEXT: This is the second stage of the conversion pipeline. It runs
//! classic operator-precedence shunting, adapted to build prefix
//! sub-expressions directly instead of an output queue:
//!
//!   - an operator stack holds pending operators and a sentinel for each
//!     open parenthesis;
//!   - an output stack holds already-built prefix sub-expressions.
//!
//! "Finalizing" an operator pops its arity worth of sub-expressions from
//! the output stack (operand order restored) and pushes the combined
//! application. At end of input exactly one sub-expression must remain;
//! anything else means the input was malformed or used an unmodeled
//! construct, and conversion fails rather than producing wrong output.

use crate::error::ConversionError;
use crate::ops;
use crate::token::Token;

/// A prefix expression: either a bare operand or an operator applied to
/// already-prefix arguments.
#[derive(Debug, PartialEq, Clone)]
pub enum Prefix {
    Atom(String),
    App { op: String, args: Vec<Prefix> },
}

impl std::fmt::Display for Prefix {
    /// Renders the fully parenthesized prefix form: atoms bare,
    /// applications as `(op arg1 arg2)` with single-space separation
    /// and no whitespace inside the parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prefix::Atom(text) => write!(f, "{}", text),
            Prefix::App { op, args } => {
                write!(f, "({}", op)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Entries on the operator stack. The sentinel bounds finalization at
/// each open parenthesis.
enum StackOp {
    Sentinel,
    Op {
        symbol: String,
        unary: bool,
        precedence: u8,
    },
}

/// Converts a token sequence in infix order into a prefix expression tree.
pub fn to_prefix(tokens: &[Token]) -> Result<Prefix, ConversionError> {
    let mut operators: Vec<StackOp> = Vec::new();
    let mut output: Vec<Prefix> = Vec::new();

    // True after a token that can end an operand: an operator following
    // a value is binary, an operator anywhere else is in unary position.
    let mut previous_is_value = false;

    for token in tokens {
        match token {
            Token::Operand(text) => {
                output.push(Prefix::Atom(text.clone()));
                previous_is_value = true;
            }

            Token::LeftParen => {
                operators.push(StackOp::Sentinel);
                previous_is_value = false;
            }

            Token::RightParen => {
                loop {
                    match operators.pop() {
                        Some(StackOp::Sentinel) => break,
                        Some(StackOp::Op { symbol, unary, .. }) => {
                            finalize(&mut output, &symbol, unary)?;
                        }
                        // The lexer guarantees balance, but conversion
                        // must fail safely if called on raw tokens.
                        None => {
                            return Err(ConversionError::unbalanced(
                                "closing parenthesis without matching open",
                            ))
                        }
                    }
                }
                previous_is_value = true;
            }

            Token::Operator(symbol) => {
                let unary = !previous_is_value;
                let precedence = lookup_precedence(symbol, unary)?;

                // Finalize stacked operators that bind at least as
                // tightly. Left-associative binaries pop on equal
                // precedence (preserving left-to-right order); stacked
                // unaries pop only for strictly greater precedence.
                loop {
                    let should_pop = match operators.last() {
                        Some(StackOp::Op {
                            precedence: stacked_precedence,
                            ..
                        }) => {
                            if unary {
                                *stacked_precedence > precedence
                            } else {
                                *stacked_precedence >= precedence
                            }
                        }
                        _ => false,
                    };
                    if !should_pop {
                        break;
                    }
                    if let Some(StackOp::Op {
                        symbol: stacked_symbol,
                        unary: stacked_unary,
                        ..
                    }) = operators.pop()
                    {
                        finalize(&mut output, &stacked_symbol, stacked_unary)?;
                    }
                }

                operators.push(StackOp::Op {
                    symbol: symbol.clone(),
                    unary,
                    precedence,
                });
                previous_is_value = false;
            }
        }
    }

    // Finalize everything left on the operator stack.
    while let Some(entry) = operators.pop() {
        match entry {
            StackOp::Sentinel => {
                return Err(ConversionError::unbalanced(
                    "unclosed parenthesis at end of input",
                ))
            }
            StackOp::Op { symbol, unary, .. } => finalize(&mut output, &symbol, unary)?,
        }
    }

    // Exactly one sub-expression must remain.
    match output.len() {
        1 => Ok(output.pop().unwrap_or(Prefix::Atom(String::new()))),
        0 => Err(ConversionError::unbalanced("empty expression")),
        n => Err(ConversionError::unbalanced(format!(
            "{} residual sub-expressions at end of input",
            n
        ))),
    }
}

/// Looks up the precedence of `symbol` for the position it appears in.
/// The table is total over the lexer's output; a miss means the token
/// stream used an operator the converter does not model.
fn lookup_precedence(symbol: &str, unary: bool) -> Result<u8, ConversionError> {
    let entry = if unary {
        ops::unary_precedence(symbol)
    } else {
        ops::binary_precedence(symbol)
    };

    entry.ok_or_else(|| {
        ConversionError::unbalanced(format!(
            "operator '{}' cannot be used in {} position",
            symbol,
            if unary { "unary" } else { "binary" }
        ))
    })
}

/// Pops `op`'s operands from the output stack (2 for binary, 1 for
/// unary) and pushes the combined prefix application.
fn finalize(output: &mut Vec<Prefix>, op: &str, unary: bool) -> Result<(), ConversionError> {
    let arity = if unary { 1 } else { 2 };

    if output.len() < arity {
        return Err(ConversionError::unbalanced(format!(
            "operator '{}' expects {} operand(s), found {}",
            op,
            arity,
            output.len()
        )));
    }

    // split_off keeps the operands in source order.
    let args = output.split_off(output.len() - arity);
    output.push(Prefix::App {
        op: op.to_string(),
        args,
    });
    Ok(())
}
