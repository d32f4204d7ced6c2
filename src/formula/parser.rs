//! Recursive-descent parser turning a token stream into a [`Formula`] tree.
//!
//! The grammar needs no precedence climbing: negation is a simple prefix
//! with no parentheses, and every binary connective is mandatorily
//! parenthesized, so one token of lookahead at each position fully
//! determines what to parse next.

use crate::formula::error::FormulaError;
use crate::formula::node::Formula;
use crate::formula::tokenizer::{tokenize, Token, TokenKind};

/// Parse a formula string into a [`Formula`]. Total on well-formed input;
/// returns a [`FormulaError`] naming the offending token/position otherwise.
pub fn parse(text: &str) -> Result<Formula, FormulaError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut pos = 0;
    let formula = parse_expr(&tokens, &mut pos)?;
    if pos != tokens.len() {
        let tok = &tokens[pos];
        return Err(FormulaError::TrailingInput {
            pos: tok.pos,
            found: tok.kind.to_string(),
        });
    }
    Ok(formula)
}

fn parse_expr(tokens: &[Token], pos: &mut usize) -> Result<Formula, FormulaError> {
    let tok = tokens.get(*pos).ok_or(FormulaError::UnexpectedEof {
        expected: "a formula",
    })?;
    match &tok.kind {
        TokenKind::Ident(name) => {
            *pos += 1;
            Ok(Formula::mk_atom(name.clone()))
        }
        TokenKind::Not => {
            *pos += 1;
            let inner = parse_expr(tokens, pos)?;
            Ok(Formula::mk_not(inner))
        }
        TokenKind::LParen => {
            *pos += 1;
            let left = parse_expr(tokens, pos)?;
            let op_tok = tokens.get(*pos).ok_or(FormulaError::UnexpectedEof {
                expected: "an operator",
            })?;
            let op_pos = op_tok.pos;
            let make: fn(Formula, Formula) -> Formula = match &op_tok.kind {
                TokenKind::Or => Formula::mk_or,
                TokenKind::And => Formula::mk_and,
                TokenKind::Arrow => Formula::mk_impl,
                other => {
                    return Err(FormulaError::ExpectedOperator {
                        pos: op_pos,
                        found: other.to_string(),
                    })
                }
            };
            *pos += 1;
            let right = parse_expr(tokens, pos)?;
            let close = tokens.get(*pos).ok_or(FormulaError::UnexpectedEof {
                expected: "')'",
            })?;
            if !matches!(close.kind, TokenKind::RParen) {
                return Err(FormulaError::ExpectedCloseParen {
                    pos: close.pos,
                    found: close.kind.to_string(),
                });
            }
            *pos += 1;
            Ok(make(left, right))
        }
        other => Err(FormulaError::UnexpectedToken {
            pos: tok.pos,
            found: other.to_string(),
        }),
    }
}
