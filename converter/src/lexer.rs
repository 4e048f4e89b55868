//! FILENAME: converter/src/lexer.rs
//! PURPOSE: Scans a raw infix expression string into a stream of Tokens.
//! CONTEXT: This is the first stage of the conversion pipeline. It handles
//! whitespace skipping, maximal-munch operand scanning, and greedy
//! matching of multi-character operators before single-character ones.
//!
//! SUPPORTED OPERATORS:
//! - Single char: + - * / % < > ! ( )
//! - Multi char: <= >= == != && ||
//!
//! Parenthesis balance is tracked with a running depth counter: the
//! counter must never go negative and must return to exactly zero at
//! end of input, otherwise the expression is malformed.

use crate::error::ConversionError;
use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token, or `None` at end
    /// of input.
    fn next_token(&mut self) -> Result<Option<Token>, ConversionError> {
        self.skip_whitespace();

        let token = match self.input.next() {
            Some('(') => Token::LeftParen,
            Some(')') => Token::RightParen,

            Some(ch @ ('+' | '*' | '/' | '%' | '-')) => Token::Operator(ch.to_string()),

            // Handle < and potentially <=
            Some('<') => self.read_with_optional_equals('<'),

            // Handle > and potentially >=
            Some('>') => self.read_with_optional_equals('>'),

            // Handle ! and potentially !=
            Some('!') => self.read_with_optional_equals('!'),

            // == is the only operator starting with '='
            Some('=') => self.read_paired('=')?,

            // && and || have no single-character reading
            Some('&') => self.read_paired('&')?,
            Some('|') => self.read_paired('|')?,

            // Operands: identifiers (including $-prefixed) and numbers
            Some(ch) if is_operand_start(ch) => self.read_operand(ch),

            // End of input
            None => return Ok(None),

            Some(ch) => {
                return Err(ConversionError::malformed(format!(
                    "unrecognized character '{}'",
                    ch
                )))
            }
        };

        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Handles operators that may be followed by '=': <, >, ! become
    /// <=, >=, != when the next character is '='.
    fn read_with_optional_equals(&mut self, first: char) -> Token {
        if self.input.peek() == Some(&'=') {
            self.input.next();
            Token::Operator(format!("{}=", first))
        } else {
            Token::Operator(first.to_string())
        }
    }

    /// Handles operators that only exist doubled: ==, &&, ||.
    fn read_paired(&mut self, ch: char) -> Result<Token, ConversionError> {
        if self.input.peek() == Some(&ch) {
            self.input.next();
            Ok(Token::Operator(format!("{}{}", ch, ch)))
        } else {
            Err(ConversionError::malformed(format!(
                "unrecognized character '{}'",
                ch
            )))
        }
    }

    /// Reads a maximal run of operand characters. Covers identifiers,
    /// $-prefixed names, and numeric literals (digits with an optional
    /// decimal point) with one scan; the run is kept as opaque text.
    fn read_operand(&mut self, first_char: char) -> Token {
        let mut text = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if is_operand_continuation(ch) {
                text.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        Token::Operand(text)
    }
}

/// Returns true if `ch` can start an operand: letters, underscore,
/// dollar sign, or a digit.
fn is_operand_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Returns true if `ch` can continue an operand. The decimal point is
/// allowed so floating literals like "1.5" stay a single token.
fn is_operand_continuation(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch == '.'
}

/// Tokenizes an infix expression string.
///
/// Pure function of its input: no side effects, no shared state. Fails
/// with a `Malformed` error on the first unrecognized character or
/// parenthesis-balance violation.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ConversionError> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;

    while let Some(token) = lexer.next_token()? {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(ConversionError::malformed(
                        "closing parenthesis without matching open",
                    ));
                }
            }
            _ => {}
        }
        tokens.push(token);
    }

    if depth != 0 {
        return Err(ConversionError::malformed(format!(
            "{} unclosed parenthesis(es) at end of input",
            depth
        )));
    }

    Ok(tokens)
}
