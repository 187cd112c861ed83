//! A hand-written recursive-descent parsing engine: a token view, a
//! backtracking cursor, a concrete syntax tree, and four structured
//! combinators (`Or`, `Many`, `Option`, `FaultToleranceMany`) that a
//! grammar is built out of instead of hand-rolled lookahead.
//!
//! [`grammar`] layers a small ECMAScript subset on top as a driver: just
//! enough statements, expressions, and object literals to put every
//! combinator and the fault-tolerance path through its paces.
//!
//! ```
//! use rd_cst_parser::{lexer, parse};
//!
//! let tokens = lexer::tokenize("let x = 1;");
//! let (cst, diagnostics) = parse(tokens, None).unwrap();
//! assert!(diagnostics.is_empty());
//! assert_eq!(cst.children().len(), 1);
//! ```

pub mod ast;
pub mod cst;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod limit;
pub mod token;

use cst::CstNode;
use engine::Engine;
use error::{Diagnostic, ParseError};
use token::Token;

/// Parse a token array (as produced by [`lexer::tokenize`]) with the
/// ECMAScript-subset grammar's entry rule.
///
/// `recursion_limit` overrides [`limit::LimitTracker`]'s default; pass
/// `None` to use it.
pub fn parse(
    tokens: Vec<Token>,
    recursion_limit: Option<usize>,
) -> Result<(CstNode, Vec<Diagnostic>), ParseError> {
    Engine::parse(tokens, recursion_limit, grammar::DIALECT_NAME, grammar::program)
}

/// Parse source text directly: [`lexer::tokenize`] followed by [`parse`].
pub fn parse_source(
    source: &str,
    recursion_limit: Option<usize>,
) -> Result<(CstNode, Vec<Diagnostic>), ParseError> {
    parse(lexer::tokenize(source), recursion_limit)
}
