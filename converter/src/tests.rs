//! FILENAME: converter/src/tests.rs
//! PURPOSE: Consolidated unit tests for the converter crate.

use crate::error::ConversionError;
use crate::lexer::tokenize;
use crate::normalize::rewrite_negated_identifiers;
use crate::prefix::{to_prefix, Prefix};
use crate::process;
use crate::token::{is_identifier, Token};

/// Convenience: full pipeline minus the cast strip, as a rendered string.
fn convert(input: &str) -> String {
    let tokens = tokenize(input).unwrap();
    let tree = to_prefix(&tokens).unwrap();
    rewrite_negated_identifiers(tree).to_string()
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let tokens = tokenize("a + 2").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Operand("a".to_string()),
            Token::Operator("+".to_string()),
            Token::Operand("2".to_string()),
        ]
    );
}

#[test]
fn lexer_handles_no_whitespace() {
    let tokens = tokenize("a+b*c").unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[1], Token::Operator("+".to_string()));
    assert_eq!(tokens[3], Token::Operator("*".to_string()));
}

#[test]
fn lexer_matches_multichar_operators_greedily() {
    let tokens = tokenize("a <= b == c != d >= e").unwrap();
    assert_eq!(tokens[1], Token::Operator("<=".to_string()));
    assert_eq!(tokens[3], Token::Operator("==".to_string()));
    assert_eq!(tokens[5], Token::Operator("!=".to_string()));
    assert_eq!(tokens[7], Token::Operator(">=".to_string()));
}

#[test]
fn lexer_tokenizes_logical_operators() {
    let tokens = tokenize("a && b || !c").unwrap();
    assert_eq!(tokens[1], Token::Operator("&&".to_string()));
    assert_eq!(tokens[3], Token::Operator("||".to_string()));
    assert_eq!(tokens[4], Token::Operator("!".to_string()));
}

#[test]
fn lexer_keeps_dollar_names_as_single_operands() {
    let tokens = tokenize("$v0 + $v1").unwrap();
    assert_eq!(tokens[0], Token::Operand("$v0".to_string()));
    assert_eq!(tokens[2], Token::Operand("$v1".to_string()));
}

#[test]
fn lexer_keeps_decimal_literals_together() {
    let tokens = tokenize("1.5 * x").unwrap();
    assert_eq!(tokens[0], Token::Operand("1.5".to_string()));
}

#[test]
fn lexer_rejects_unrecognized_characters() {
    let result = tokenize("a # b");
    assert!(matches!(result, Err(ConversionError::Malformed { .. })));
}

#[test]
fn lexer_rejects_lone_ampersand_and_pipe() {
    assert!(tokenize("a & b").is_err());
    assert!(tokenize("a | b").is_err());
    assert!(tokenize("a = b").is_err());
}

#[test]
fn lexer_rejects_unclosed_parenthesis() {
    let result = tokenize("(a + b");
    assert!(matches!(result, Err(ConversionError::Malformed { .. })));
}

#[test]
fn lexer_rejects_early_closing_parenthesis() {
    let result = tokenize("a + b)");
    assert!(matches!(result, Err(ConversionError::Malformed { .. })));
}

#[test]
fn lexer_returns_empty_stream_for_blank_input() {
    assert_eq!(tokenize("   ").unwrap(), Vec::new());
}

// ========================================
// CONVERTER TESTS - PRECEDENCE
// ========================================

#[test]
fn converter_respects_multiplication_precedence() {
    assert_eq!(convert("a + b * c"), "(+ a (* b c))");
}

#[test]
fn converter_respects_parenthesized_grouping() {
    assert_eq!(convert("(a + b) * c"), "(* (+ a b) c)");
}

#[test]
fn converter_is_left_associative_on_equal_precedence() {
    assert_eq!(convert("a - b - c"), "(- (- a b) c)");
    assert_eq!(convert("a / b / c"), "(/ (/ a b) c)");
}

#[test]
fn converter_handles_modulo() {
    assert_eq!(convert("a % b + c"), "(+ (% a b) c)");
}

#[test]
fn converter_orders_comparison_below_arithmetic() {
    assert_eq!(convert("a + b < c * d"), "(< (+ a b) (* c d))");
}

#[test]
fn converter_orders_logical_below_comparison() {
    assert_eq!(convert("a < b && c <= d"), "(&& (< a b) (<= c d))");
    assert_eq!(convert("a == b || c != d"), "(|| (== a b) (!= c d))");
}

#[test]
fn converter_handles_nested_parentheses() {
    assert_eq!(convert("((a + b) * (c - d))"), "(* (+ a b) (- c d))");
}

#[test]
fn converter_handles_single_operand() {
    assert_eq!(convert("x"), "x");
    assert_eq!(convert("42"), "42");
}

// ========================================
// CONVERTER TESTS - UNARY OPERATORS
// ========================================

#[test]
fn converter_negates_numeric_literal() {
    let tokens = tokenize("- 5").unwrap();
    assert_eq!(to_prefix(&tokens).unwrap().to_string(), "(- 5)");
}

#[test]
fn converter_detects_unary_after_open_paren() {
    let tokens = tokenize("a * (- 5)").unwrap();
    assert_eq!(to_prefix(&tokens).unwrap().to_string(), "(* a (- 5))");
}

#[test]
fn converter_detects_unary_after_operator() {
    let tokens = tokenize("a * - 5").unwrap();
    assert_eq!(to_prefix(&tokens).unwrap().to_string(), "(* a (- 5))");
}

#[test]
fn converter_binds_unary_tighter_than_binary() {
    let tokens = tokenize("- 5 + b").unwrap();
    assert_eq!(to_prefix(&tokens).unwrap().to_string(), "(+ (- 5) b)");
}

#[test]
fn converter_stacks_unary_operators() {
    let tokens = tokenize("! ! a").unwrap();
    assert_eq!(to_prefix(&tokens).unwrap().to_string(), "(! (! a))");
}

#[test]
fn converter_handles_logical_not() {
    assert_eq!(convert("!(a < b)"), "(! (< a b))");
}

// ========================================
// CONVERTER TESTS - FAILURE MODES
// ========================================

#[test]
fn converter_fails_on_trailing_operator() {
    // Detection point (lexer vs converter) is unspecified; only failure
    // itself is asserted.
    let tokens = tokenize("a + ").unwrap();
    assert!(to_prefix(&tokens).is_err());
}

#[test]
fn converter_fails_on_adjacent_operands() {
    let tokens = tokenize("a b").unwrap();
    assert!(matches!(
        to_prefix(&tokens),
        Err(ConversionError::Unbalanced { .. })
    ));
}

#[test]
fn converter_fails_on_empty_input() {
    assert!(matches!(
        to_prefix(&[]),
        Err(ConversionError::Unbalanced { .. })
    ));
}

#[test]
fn converter_fails_on_binary_operator_in_unary_position() {
    let tokens = tokenize("* a").unwrap();
    assert!(to_prefix(&tokens).is_err());
}

// ========================================
// NORMALIZER TESTS
// ========================================

#[test]
fn normalizer_rewrites_negated_identifier() {
    assert_eq!(convert("- x"), "(* x -1)");
}

#[test]
fn normalizer_rewrites_negated_dollar_name() {
    assert_eq!(convert("- $v0"), "(* $v0 -1)");
}

#[test]
fn normalizer_leaves_negated_literal_alone() {
    // Boundary: only bare identifiers are rewritten, never numerics.
    assert_eq!(convert("- 5"), "(- 5)");
}

#[test]
fn normalizer_leaves_negated_compound_alone() {
    assert_eq!(convert("- (a + b)"), "(- (+ a b))");
}

#[test]
fn normalizer_leaves_binary_minus_alone() {
    assert_eq!(convert("a - b"), "(- a b)");
}

#[test]
fn normalizer_rewrites_nested_occurrences() {
    assert_eq!(convert("b * - a"), "(* b (* a -1))");
}

#[test]
fn normalizer_is_idempotent() {
    let tokens = tokenize("- x + - y").unwrap();
    let once = rewrite_negated_identifiers(to_prefix(&tokens).unwrap());
    let twice = rewrite_negated_identifiers(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn identifier_pattern_excludes_numerics() {
    assert!(is_identifier("x"));
    assert!(is_identifier("_tmp"));
    assert!(is_identifier("$v12"));
    assert!(!is_identifier("5"));
    assert!(!is_identifier("1.5"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("a-b"));
}

// ========================================
// PROCESS (END-TO-END) TESTS
// ========================================

#[test]
fn process_strips_uint1_cast() {
    assert_eq!(process("(uint1)(a < b)").unwrap(), "(< a b)");
}

#[test]
fn process_converts_full_halide_style_expression() {
    assert_eq!(
        process("(v0 + 8) <= v1 || v0 < v1").unwrap(),
        "(|| (<= (+ v0 8) v1) (< v0 v1))"
    );
}

#[test]
fn process_applies_negation_rewrite() {
    assert_eq!(process("a + - b").unwrap(), "(+ a (* b -1))");
}

#[test]
fn process_propagates_conversion_failures() {
    assert!(process("(a + b").is_err());
    assert!(process("a + ").is_err());
}

// ========================================
// SEMANTIC PRESERVATION
// ========================================
// Both a reference infix evaluator and a prefix evaluator live here in
// test code only; the production crate never evaluates expressions.

/// Minimal recursive-descent evaluator for arithmetic infix input.
fn eval_infix(tokens: &[Token]) -> f64 {
    fn additive(tokens: &[Token], pos: &mut usize) -> f64 {
        let mut left = multiplicative(tokens, pos);
        while let Some(Token::Operator(op)) = tokens.get(*pos) {
            match op.as_str() {
                "+" => {
                    *pos += 1;
                    left += multiplicative(tokens, pos);
                }
                "-" => {
                    *pos += 1;
                    left -= multiplicative(tokens, pos);
                }
                _ => break,
            }
        }
        left
    }

    fn multiplicative(tokens: &[Token], pos: &mut usize) -> f64 {
        let mut left = unary(tokens, pos);
        while let Some(Token::Operator(op)) = tokens.get(*pos) {
            match op.as_str() {
                "*" => {
                    *pos += 1;
                    left *= unary(tokens, pos);
                }
                "/" => {
                    *pos += 1;
                    left /= unary(tokens, pos);
                }
                _ => break,
            }
        }
        left
    }

    fn unary(tokens: &[Token], pos: &mut usize) -> f64 {
        if let Some(Token::Operator(op)) = tokens.get(*pos) {
            if op == "-" {
                *pos += 1;
                return -unary(tokens, pos);
            }
        }
        primary(tokens, pos)
    }

    fn primary(tokens: &[Token], pos: &mut usize) -> f64 {
        match &tokens[*pos] {
            Token::Operand(text) => {
                *pos += 1;
                text.parse().unwrap()
            }
            Token::LeftParen => {
                *pos += 1;
                let value = additive(tokens, pos);
                assert_eq!(tokens[*pos], Token::RightParen);
                *pos += 1;
                value
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    let mut pos = 0;
    let value = additive(tokens, &mut pos);
    assert_eq!(pos, tokens.len());
    value
}

/// Evaluator for the rendered prefix form, driven by re-tokenizing the
/// converter's own output.
fn eval_prefix(tokens: &[Token], pos: &mut usize) -> f64 {
    match &tokens[*pos] {
        Token::Operand(text) => {
            *pos += 1;
            text.parse().unwrap()
        }
        Token::LeftParen => {
            *pos += 1;
            let op = match &tokens[*pos] {
                Token::Operator(symbol) => symbol.clone(),
                other => panic!("expected operator, found {:?}", other),
            };
            *pos += 1;
            let mut args = Vec::new();
            while tokens[*pos] != Token::RightParen {
                args.push(eval_prefix(tokens, pos));
            }
            *pos += 1;
            match (op.as_str(), args.as_slice()) {
                ("+", [a, b]) => a + b,
                ("-", [a, b]) => a - b,
                ("-", [a]) => -a,
                ("*", [a, b]) => a * b,
                ("/", [a, b]) => a / b,
                (op, args) => panic!("unexpected application of {} to {} args", op, args.len()),
            }
        }
        other => panic!("unexpected token {:?}", other),
    }
}

#[test]
fn conversion_preserves_arithmetic_semantics() {
    let cases = [
        "1 + 2 * 3",
        "(1 + 2) * 3",
        "10 - 4 - 3",
        "2 * (3 + 4) / 7",
        "- 5 + 12",
        "8 / 2 / 2",
        "1.5 * 4 - 2",
        "((2 + 3) * (4 - 1))",
    ];

    for case in cases {
        let infix_tokens = tokenize(case).unwrap();
        let expected = eval_infix(&infix_tokens);

        let rendered = to_prefix(&infix_tokens).unwrap().to_string();
        let prefix_tokens = tokenize(&rendered).unwrap();
        let mut pos = 0;
        let actual = eval_prefix(&prefix_tokens, &mut pos);
        assert_eq!(pos, prefix_tokens.len(), "leftover tokens for {}", case);

        assert!(
            (expected - actual).abs() < 1e-9,
            "{} evaluated to {} in infix but {} in prefix",
            case,
            expected,
            actual
        );
    }
}

// ========================================
// RENDER ROUND-TRIP
// ========================================

#[test]
fn rendered_prefix_retokenizes_cleanly() {
    let tokens = tokenize("a + b * c && ! d").unwrap();
    let rendered = to_prefix(&tokens).unwrap().to_string();
    // The rendered form uses the same alphabet the lexer accepts.
    assert!(tokenize(&rendered).is_ok());
}

#[test]
fn render_formats_applications_without_inner_whitespace() {
    let tree = Prefix::App {
        op: "+".to_string(),
        args: vec![
            Prefix::Atom("a".to_string()),
            Prefix::App {
                op: "*".to_string(),
                args: vec![Prefix::Atom("b".to_string()), Prefix::Atom("c".to_string())],
            },
        ],
    };
    assert_eq!(tree.to_string(), "(+ a (* b c))");
}
