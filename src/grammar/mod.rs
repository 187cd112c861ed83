//! The ECMAScript-subset grammar that exercises the engine
//! (`SPEC_FULL.md` §4.6). Every `pub(crate)` function here that opens with
//! `engine.rule(RuleKind::X, ...)` is a *rule*: calling it attaches an `X`
//! node to whatever node is currently open. Functions that don't wrap
//! themselves in `engine.rule` are plain helpers operating on the
//! currently open node (a dispatch table, a repeated-suffix body, ...).
//! Rule status is therefore a property of how a function is written, fixed
//! before `Engine::parse` ever runs, never inferred at runtime.
//!
//! §4.6 also has the engine track the grammar's name for diagnostic
//! tooling, separately from any rule node's name: [`DIALECT_NAME`] is what
//! this grammar hands to [`Engine::parse`], retrievable afterwards via
//! [`Engine::dialect_name`](crate::engine::Engine::dialect_name).
//!
//! The grammar itself chases no particular ECMAScript edition to the
//! letter: it covers exactly enough of statements, expressions, and
//! object literals to need every one of the engine's four combinators and
//! its fault-tolerance path, and no more.

mod expression;
mod member;
mod object;
mod statement;
mod token_consumer;

use crate::cst::RuleKind;
use crate::engine::Engine;
use crate::error::ParseResult;

/// This grammar's name, carried by the engine purely for diagnostic
/// tooling (see the module doc comment).
pub const DIALECT_NAME: &str = "ecmascript-subset";

/// The grammar's entry point: a `Program` wrapping a fault-tolerant list
/// of module items. This is what callers hand to [`Engine::parse`].
pub fn program(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::Program, statement::module_item_list)
}

/// `ArrowParameters` has no body: arrow-function parameter lists are out
/// of scope for this grammar, and the rule exists only to show that an
/// empty rule body still produces a well-formed (childless) node.
/// Deliberately never wired into `expression::primary_expression`'s
/// dispatch table — an always-succeeding alternative placed there would
/// shadow every alternative tried after it.
#[allow(dead_code)]
pub(crate) fn arrow_parameters(engine: &mut Engine) -> ParseResult<()> {
    engine.rule(RuleKind::ArrowParameters, |_| Ok(()))
}
