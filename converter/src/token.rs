//! FILENAME: converter/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed
//! by the infix-to-prefix converter. They are immutable once produced.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// An identifier (including $-prefixed names) or numeric literal.
    Operand(String),
    /// An operator symbol, single or multi character (e.g. "+", "<=").
    Operator(String),
    LeftParen,
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Operand(s) => write!(f, "{}", s),
            Token::Operator(s) => write!(f, "{}", s),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Returns true if `text` matches the identifier pattern
/// `[A-Za-z_$][A-Za-z_$0-9]*`.
///
/// Numeric literals do not match; the unary-negation rewrite uses this
/// to restrict itself to bare identifiers.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}
