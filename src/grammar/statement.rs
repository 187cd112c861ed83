//! Statements: the top-level fault-tolerant item list down through
//! variable declarations and blocks.

use super::expression;
use super::token_consumer::TokenConsumer;
use crate::cst::RuleKind;
use crate::engine::{alt, Engine};
use crate::error::ParseResult;

/// `ModuleItemList`: zero or more `StatementListItem`s, recovering from a
/// malformed one by skipping a single token instead of aborting the parse.
pub(super) fn module_item_list(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ModuleItemList, |e| {
        e.fault_tolerance_many(statement_list_item)
    })
}

pub(super) fn statement_list_item(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::StatementListItem, statement)
}

fn statement(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::Statement, |e| {
        e.or(&[
            alt("VariableDeclaration", variable_declaration),
            alt("BlockStatement", block_statement),
            alt("ExpressionStatement", expression_statement),
        ])
    })
}

fn block_statement(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::BlockStatement, |e| {
        e.l_brace()?;
        e.many(statement_list_item)?;
        e.r_brace()
    })
}

/// An `AssignmentExpression` followed by an optional `;`. Real automatic
/// semicolon insertion is out of scope; treating the terminator as
/// optional is the cheapest approximation that still lets a trailing
/// expression at end of input parse cleanly.
fn expression_statement(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ExpressionStatement, |e| {
        expression::assignment_expression(e)?;
        e.option(Engine::semicolon)
    })
}

fn variable_declaration(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::VariableDeclaration, |e| {
        variable_let_or_const(e)?;
        variable_declaration_list(e)?;
        e.semicolon()
    })
}

fn variable_let_or_const(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::VariableLetOrConst, |e| {
        e.or(&[
            alt("let", Engine::let_tok),
            alt("const", Engine::const_tok),
            alt("var", Engine::var_tok),
        ])
    })
}

fn variable_declaration_list(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::VariableDeclarationList, |e| {
        variable_declarator(e)?;
        e.many(|e| {
            e.comma()?;
            variable_declarator(e)
        })
    })
}

fn variable_declarator(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::VariableDeclarator, |e| {
        binding_identifier(e)?;
        e.option(initializer)
    })
}

fn binding_identifier(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::BindingIdentifier, Engine::identifier)
}

fn initializer(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::Initializer, |e| {
        e.eq()?;
        expression::assignment_expression(e)
    })
}
