//! Member access and call chains.
//!
//! `a.b.c()[0]` is ambiguous between "a call/index chain" and "a plain
//! member chain" until the parser sees whether a `(` or `[` suffix turns
//! up; there's no separate lookahead grammar for it. Instead
//! `LeftHandSideExpression` tries `CallExpression` first: it fully
//! re-parses the member chain, then requires at least one call/index
//! suffix; if there isn't one, `or` rolls the whole attempt back and
//! falls through to the plain `MemberExpression` alternative. No
//! left recursion ever happens on the Rust call stack — `Many` threads
//! the chain iteratively.

use super::expression;
use super::token_consumer::TokenConsumer;
use crate::cst::RuleKind;
use crate::engine::{alt, Engine};
use crate::error::ParseResult;

pub(super) fn left_hand_side_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::LeftHandSideExpression, |e| {
        e.or(&[
            alt("CallExpression", call_expression),
            alt("MemberExpression", member_expression),
        ])
    })
}

fn member_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::MemberExpression, |e| {
        expression::primary_expression(e)?;
        e.many(dot_suffix)
    })
}

fn call_expression(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::CallExpression, |e| {
        member_expression(e)?;
        call_or_bracket_suffix(e)?;
        e.many(|e| {
            e.or(&[
                alt("Arguments", arguments_suffix),
                alt("BracketExpression", bracket_suffix),
                alt("Dot", dot_suffix),
            ])
        })
    })
}

fn call_or_bracket_suffix(engine: &mut Engine) -> ParseResult<()> {
    engine.or(&[
        alt("Arguments", arguments_suffix),
        alt("BracketExpression", bracket_suffix),
    ])
}

fn dot_suffix(engine: &mut Engine) -> ParseResult<()> {
    engine.dot()?;
    engine.identifier()
}

fn arguments_suffix(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::Arguments, |e| {
        e.l_paren()?;
        e.option(|e| {
            expression::assignment_expression(e)?;
            e.many(|e| {
                e.comma()?;
                expression::assignment_expression(e)
            })
        })?;
        e.r_paren()
    })
}

fn bracket_suffix(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::BracketExpression, |e| {
        e.l_bracket()?;
        expression::assignment_expression(e)?;
        e.r_bracket()
    })
}
