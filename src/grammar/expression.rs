//! The expression precedence ladder, from `AssignmentExpression` down to
//! `PrimaryExpression`. Each level is its own rule node even where a
//! single child passes straight through, so a caller reading the CST sees
//! the full chain the way `SPEC_FULL.md` §8's scenarios describe it.

use super::member;
use super::object;
use super::token_consumer::TokenConsumer;
use crate::cst::RuleKind;
use crate::engine::{alt, Engine};
use crate::error::ParseResult;
use crate::token::TokenKind;

pub(super) fn assignment_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::AssignmentExpression, |e| {
        e.or(&[
            alt("Assignment", assignment_form),
            alt("ConditionalExpression", conditional_expression),
        ])
    })
}

/// `LeftHandSideExpression = AssignmentExpression`. Tried before the
/// plain conditional-expression fallback; a full re-parse-and-rollback
/// when there's no `=`, the same backtracking discipline used for the
/// member/call ambiguity in `member.rs`.
fn assignment_form(engine: &mut Engine) -> ParseResult<()> {
    member::left_hand_side_expression(engine)?;
    engine.eq()?;
    assignment_expression(engine)
}

fn conditional_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ConditionalExpression, |e| {
        logical_or_expression(e)?;
        e.option(|e| {
            e.question()?;
            assignment_expression(e)?;
            e.colon()?;
            assignment_expression(e)
        })
    })
}

fn logical_or_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::LogicalOrExpression, |e| {
        logical_and_expression(e)?;
        e.many(|e| {
            e.consume_terminal(TokenKind::PipePipe)?;
            logical_and_expression(e)
        })
    })
}

fn logical_and_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::LogicalAndExpression, |e| {
        equality_expression(e)?;
        e.many(|e| {
            e.consume_terminal(TokenKind::AmpAmp)?;
            equality_expression(e)
        })
    })
}

fn equality_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::EqualityExpression, |e| {
        relational_expression(e)?;
        e.many(|e| {
            e.or(&[
                alt("==", |e| e.consume_terminal(TokenKind::EqEq)),
                alt("!=", |e| e.consume_terminal(TokenKind::BangEq)),
            ])?;
            relational_expression(e)
        })
    })
}

fn relational_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::RelationalExpression, |e| {
        additive_expression(e)?;
        e.many(|e| {
            e.or(&[
                alt("<", |e| e.consume_terminal(TokenKind::Lt)),
                alt(">", |e| e.consume_terminal(TokenKind::Gt)),
                alt("<=", |e| e.consume_terminal(TokenKind::LtEq)),
                alt(">=", |e| e.consume_terminal(TokenKind::GtEq)),
            ])?;
            additive_expression(e)
        })
    })
}

fn additive_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::AdditiveExpression, |e| {
        multiplicative_expression(e)?;
        e.many(|e| {
            e.or(&[
                alt("+", |e| e.consume_terminal(TokenKind::Plus)),
                alt("-", |e| e.consume_terminal(TokenKind::Minus)),
            ])?;
            multiplicative_expression(e)
        })
    })
}

fn multiplicative_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::MultiplicativeExpression, |e| {
        unary_expression(e)?;
        e.many(|e| {
            e.or(&[
                alt("*", |e| e.consume_terminal(TokenKind::Star)),
                alt("/", |e| e.consume_terminal(TokenKind::Slash)),
                alt("%", |e| e.consume_terminal(TokenKind::Percent)),
            ])?;
            unary_expression(e)
        })
    })
}

fn unary_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::UnaryExpression, |e| {
        e.option(|e| {
            e.or(&[
                alt("!", |e| e.consume_terminal(TokenKind::Bang)),
                alt("-", |e| e.consume_terminal(TokenKind::Minus)),
                alt("+", |e| e.consume_terminal(TokenKind::Plus)),
                alt("~", |e| e.consume_terminal(TokenKind::Tilde)),
            ])
        })?;
        postfix_expression(e)
    })
}

/// `PostfixExpression`: a `LeftHandSideExpression` with an optional
/// trailing `++`/`--`, the engine's worked example of a clean `Option`
/// that backs all the way out when the lookahead doesn't match
/// (`SPEC_FULL.md` §8, scenario: bare identifier postfix expression).
fn postfix_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::PostfixExpression, |e| {
        member::left_hand_side_expression(e)?;
        e.option(|e| {
            e.or(&[
                alt("++", |e| e.consume_terminal(TokenKind::PlusPlus)),
                alt("--", |e| e.consume_terminal(TokenKind::MinusMinus)),
            ])
        })
    })
}

pub(super) fn primary_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::PrimaryExpression, |e| {
        e.or(&[
            alt("ObjectLiteral", object::object_literal),
            alt("ParenthesizedExpression", parenthesized_expression),
            alt("NumericLiteral", Engine::numeric_literal),
            alt("StringLiteral", Engine::string_literal),
            alt("BooleanLiteral", Engine::boolean_literal),
            alt("IdentifierReference", identifier_reference),
        ])
    })
}

fn parenthesized_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ParenthesizedExpression, |e| {
        e.l_paren()?;
        assignment_expression(e)?;
        e.r_paren()
    })
}

pub(super) fn identifier_reference(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::IdentifierReference, Engine::identifier)
}
