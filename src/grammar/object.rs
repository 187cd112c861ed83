//! Object literals, and the `PropertyDefinition` ambiguity between a
//! shorthand identifier reference and a method definition
//! (`SPEC_FULL.md` §8: `({ m() {} })`). Trying `MethodDefinition` first
//! means a shorthand property never gets mistaken for one — a method
//! always has the `(` a shorthand property can't produce — so ordering
//! alone resolves it without any extra lookahead.

use super::expression;
use super::statement;
use super::token_consumer::TokenConsumer;
use crate::cst::RuleKind;
use crate::engine::{alt, Engine};
use crate::error::ParseResult;

pub(super) fn object_literal(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ObjectLiteral, |e| {
        e.l_brace()?;
        e.option(|e| {
            property_definition(e)?;
            e.many(|e| {
                e.comma()?;
                property_definition(e)
            })?;
            e.option(Engine::comma)
        })?;
        e.r_brace()
    })
}

fn property_definition(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::PropertyDefinition, |e| {
        e.or(&[
            alt("MethodDefinition", method_definition),
            alt("IdentifierReference", expression::identifier_reference),
        ])
    })
}

fn method_definition(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::MethodDefinition, |e| {
        e.identifier()?;
        e.l_paren()?;
        e.option(formal_parameter_list)?;
        e.r_paren()?;
        e.l_brace()?;
        e.many(statement::statement_list_item)?;
        e.r_brace()
    })
}

fn formal_parameter_list(engine: &mut Engine) -> ParseResult<()> {
    engine.identifier()?;
    engine.many(|e| {
        e.comma()?;
        e.identifier()
    })
}
