//! FILENAME: converter/src/ops.rs
//! PURPOSE: Operator precedence and arity table.
//! CONTEXT: The converter drives its stack discipline from this table.
//! The table is total over everything the lexer can emit: an operator
//! without an entry is a lookup failure, never a silent default.
//!
//! PRECEDENCE (binding strength, low to high):
//!   1  ||
//!   2  &&
//!   3  == !=
//!   4  < > <= >=
//!   5  + -        (binary)
//!   6  * / %
//!   7  - !        (unary, effectively right-associative)

/// Precedence rank of a binary operator, or `None` if the symbol has no
/// binary reading. All modeled binary operators are left-associative.
pub fn binary_precedence(symbol: &str) -> Option<u8> {
    match symbol {
        "||" => Some(1),
        "&&" => Some(2),
        "==" | "!=" => Some(3),
        "<" | ">" | "<=" | ">=" => Some(4),
        "+" | "-" => Some(5),
        "*" | "/" | "%" => Some(6),
        _ => None,
    }
}

/// Precedence rank of a unary operator, or `None` if the symbol cannot
/// appear in unary (prefix-of-expression) position.
pub fn unary_precedence(symbol: &str) -> Option<u8> {
    match symbol {
        "-" | "!" => Some(7),
        _ => None,
    }
}
