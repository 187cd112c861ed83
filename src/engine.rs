//! The rule runtime: rule invocation, child-attachment discipline, and the
//! four structured combinators (`or`, `many`, `option`,
//! `fault_tolerance_many`).
//!
//! There is no decorator in Rust to mark "this method is a rule" the way
//! the source grammar this engine is modeled on does. Instead, rule-ness is
//! a property of *how a grammar function is called*: a rule function is
//! written as a thin wrapper around [`Engine::rule`], while a helper
//! function just takes `&mut Engine` and calls the same primitives against
//! whatever node is currently open. Both are ordinary Rust functions; the
//! distinction is a convention enforced by how `src/grammar/*.rs` is
//! written, not by the type system.

use crate::cst::{CstNode, NodeKind, RuleKind};
use crate::error::{Diagnostic, ErrorKind, ParseError, ParseFailure, ParseResult};
use crate::limit::LimitTracker;
use crate::token::{SourceLocation, Token, TokenKind};

/// A saved `(cursor, node-stack depth, open-node child count)` triple.
///
/// Checkpoints nest naturally along the Rust call stack: each combinator
/// holds its own `Checkpoint` value locally and passes it to exactly one of
/// `restore`/`commit` before returning, so there is no separate save-stack
/// to manage explicitly (unlike a language where `save`/`restore` are
/// pushed onto a shared mutable stack).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    node_stack_len: usize,
    child_count: usize,
}

/// One branch of an [`Engine::or`] call. `name` exists purely for the
/// `NoAlternative` diagnostic; it plays no role in matching.
#[derive(Clone, Copy)]
pub struct Alternative {
    pub name: &'static str,
    pub run: fn(&mut Engine) -> ParseResult<()>,
}

/// Build an [`Alternative`]. Grammar modules call this to build the
/// tables passed to `or`.
pub const fn alt(name: &'static str, run: fn(&mut Engine) -> ParseResult<()>) -> Alternative {
    Alternative { name, run }
}

/// Owns the token array, the cursor position, and the in-progress CST's
/// open-parent chain for a single parse. Not reentrant: rules recurse on
/// the same `&mut Engine`. Two parses never share an `Engine`.
pub struct Engine {
    tokens: Vec<Token>,
    pos: usize,
    node_stack: Vec<CstNode>,
    diagnostics: Vec<Diagnostic>,
    recursion: LimitTracker,
    /// The deepest cursor position any attempt (successful or rolled back)
    /// reached. Used for the furthest-reach diagnostic (`SPEC_FULL.md` §7).
    furthest: usize,
    /// The grammar's name, carried for diagnostic tooling only. A CST
    /// node's `name` is always its rule name, never this.
    dialect_name: &'static str,
}

impl Engine {
    fn new(tokens: Vec<Token>, dialect_name: &'static str) -> Self {
        Self {
            tokens,
            pos: 0,
            node_stack: Vec::new(),
            diagnostics: Vec::new(),
            recursion: LimitTracker::default(),
            furthest: 0,
            dialect_name,
        }
    }

    /// The grammar's name, as given to [`Engine::parse`]. Exists purely
    /// for diagnostic tooling (e.g. prefixing an error report with which
    /// dialect produced it); never used to decide parsing behavior.
    pub fn dialect_name(&self) -> &'static str {
        self.dialect_name
    }

    /// Parse `tokens` (which must end with a [`TokenKind::Eof`] sentinel)
    /// by running `entry`, which is expected to call `engine.rule(kind,
    /// ..)` exactly once for the grammar's entry rule. `dialect_name`
    /// identifies the grammar for diagnostic tooling.
    ///
    /// Returns the entry rule's `CstNode` plus any diagnostics recorded by
    /// `fault_tolerance_many` along the way, or a [`ParseError`] if an
    /// unrecoverable failure escaped without ever reaching a
    /// `fault_tolerance_many`.
    pub fn parse(
        tokens: Vec<Token>,
        recursion_limit: Option<usize>,
        dialect_name: &'static str,
        entry: impl FnOnce(&mut Engine) -> ParseResult<()>,
    ) -> Result<(CstNode, Vec<Diagnostic>), ParseError> {
        let mut engine = Engine::new(tokens, dialect_name);
        if let Some(limit) = recursion_limit {
            engine.recursion = LimitTracker::new(limit);
        }
        engine.node_stack.push(CstNode::new_rule_root());

        match entry(&mut engine) {
            Ok(()) => {
                if engine.node_stack.len() != 1 {
                    let pos = engine.pos;
                    return Err(engine.into_parse_error(ParseFailure::new(
                        ErrorKind::CheckpointImbalance,
                        pos,
                    )));
                }
                let mut root = engine.node_stack.pop().expect("just checked len == 1");
                let entry_node = root
                    .children
                    .pop()
                    .expect("entry rule must append exactly one child to the synthetic root");
                Ok((entry_node, engine.diagnostics))
            }
            Err(failure) => Err(engine.into_parse_error(failure)),
        }
    }

    fn into_parse_error(self, failure: ParseFailure) -> ParseError {
        let at_index = if failure.is_recoverable() {
            self.furthest.max(failure.at)
        } else {
            failure.at
        };
        let message = failure.kind.to_string();
        ParseError {
            at: self.loc_at(at_index),
            kind: failure.kind,
            message,
        }
    }

    fn loc_at(&self, index: usize) -> SourceLocation {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .map(|t| t.loc)
            .unwrap_or(SourceLocation {
                start: crate::token::Position { line: 1, column: 1 },
                end: crate::token::Position { line: 1, column: 1 },
                index: 0,
            })
    }

    // -- token view / cursor -------------------------------------------

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek(&self, k: usize) -> Option<&Token> {
        self.tokens.get(self.pos + k)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current().map(|t| t.kind == kind).unwrap_or(false)
    }

    pub fn at_eof(&self) -> bool {
        self.current()
            .map(|t| t.kind == TokenKind::Eof)
            .unwrap_or(true)
    }

    fn fail(&mut self, kind: ErrorKind) -> ParseFailure {
        if self.pos > self.furthest {
            self.furthest = self.pos;
        }
        ParseFailure::new(kind, self.pos)
    }

    fn advance_raw(&mut self) -> ParseResult<Token> {
        match self.tokens.get(self.pos).cloned() {
            Some(tok) => {
                self.pos += 1;
                Ok(tok)
            }
            None => Err(self.fail(ErrorKind::UnexpectedEnd)),
        }
    }

    pub(crate) fn save(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            node_stack_len: self.node_stack.len(),
            child_count: self.node_stack.last().map(|n| n.children.len()).unwrap_or(0),
        }
    }

    pub(crate) fn restore(&mut self, cp: Checkpoint) {
        self.pos = cp.pos;
        self.node_stack.truncate(cp.node_stack_len);
        if let Some(top) = self.node_stack.last_mut() {
            top.children.truncate(cp.child_count);
        }
    }

    pub(crate) fn commit(&mut self, _cp: Checkpoint) {
        // success path: nothing to undo, the checkpoint is simply dropped.
    }

    fn push_child(&mut self, child: CstNode) {
        self.node_stack
            .last_mut()
            .expect("node stack must not be empty while a parse is in progress")
            .children
            .push(child);
    }

    /// Read the currently open node. Grammar code can inspect it but has
    /// no way to mutate it directly; all mutation goes through `rule`,
    /// `consume_terminal`, and the combinators.
    pub fn current_node(&self) -> &CstNode {
        self.node_stack
            .last()
            .expect("node stack must not be empty while a parse is in progress")
    }

    // -- terminal matching ------------------------------------------------

    /// Match a single terminal token by kind (`SPEC_FULL.md` §4.3). Fails
    /// before any state change if the current token doesn't match.
    pub fn consume_terminal(&mut self, kind: TokenKind) -> ParseResult<()> {
        match self.current() {
            Some(tok) if tok.kind == kind => {
                let tok = self.advance_raw().expect("current() just confirmed a token");
                self.push_child(CstNode::new_terminal(tok.kind, tok.value, tok.loc));
                Ok(())
            }
            Some(tok) => {
                let got = Some(tok.clone());
                Err(self.fail(ErrorKind::TokenMismatch { expected: kind, got }))
            }
            None => Err(self.fail(ErrorKind::TokenMismatch { expected: kind, got: None })),
        }
    }

    // -- rule invocation ----------------------------------------------------

    /// Run `body` as rule `kind` (`SPEC_FULL.md` §4.2): push a fresh node,
    /// run the body, and on success pop it, compute its span, and attach
    /// it to the parent; on failure pop and discard it entirely, letting
    /// the failure propagate.
    pub fn rule(
        &mut self,
        kind: RuleKind,
        body: impl FnOnce(&mut Engine) -> ParseResult<()>,
    ) -> ParseResult<()> {
        if !self.recursion.enter() {
            self.recursion.exit();
            return Err(self.fail(ErrorKind::RecursionLimitExceeded));
        }
        self.node_stack.push(CstNode::new_rule(kind));
        let result = body(self);
        self.recursion.exit();

        match result {
            Ok(()) => {
                let mut node = self
                    .node_stack
                    .pop()
                    .expect("rule() just pushed its own frame");
                node.recompute_loc();
                self.push_child(node);
                Ok(())
            }
            Err(failure) => {
                self.node_stack
                    .pop()
                    .expect("rule() just pushed its own frame");
                Err(failure)
            }
        }
    }

    // -- combinators ----------------------------------------------------

    /// Ordered choice with full backtracking (`SPEC_FULL.md` §4.4). First
    /// alternative to succeed wins; grammar authors control disambiguation
    /// through ordering, not through a longest-match search.
    pub fn or(&mut self, alternatives: &[Alternative]) -> ParseResult<()> {
        let mut tried = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let cp = self.save();
            match (alternative.run)(self) {
                Ok(()) => {
                    self.commit(cp);
                    return Ok(());
                }
                Err(failure) if failure.is_recoverable() => {
                    self.restore(cp);
                    tried.push(alternative.name);
                }
                Err(failure) => return Err(failure),
            }
        }
        Err(self.fail(ErrorKind::NoAlternative { tried }))
    }

    /// Zero-or-more. Never fails due to its body failing recoverably;
    /// fails fatally if the body succeeds without advancing the cursor.
    pub fn many(&mut self, mut body: impl FnMut(&mut Engine) -> ParseResult<()>) -> ParseResult<()> {
        loop {
            let before = self.pos;
            let cp = self.save();
            match body(self) {
                Ok(()) => {
                    if self.pos == before {
                        self.commit(cp);
                        return Err(self.fail(ErrorKind::NonProgressingRepetition { rule: "many" }));
                    }
                    self.commit(cp);
                }
                Err(failure) if failure.is_recoverable() => {
                    self.restore(cp);
                    return Ok(());
                }
                Err(failure) => return Err(failure),
            }
        }
    }

    /// Zero-or-one. Like a single `many` iteration that silently restores
    /// on a recoverable failure.
    pub fn option(&mut self, body: impl FnOnce(&mut Engine) -> ParseResult<()>) -> ParseResult<()> {
        let cp = self.save();
        match body(self) {
            Ok(()) => {
                self.commit(cp);
                Ok(())
            }
            Err(failure) if failure.is_recoverable() => {
                self.restore(cp);
                Ok(())
            }
            Err(failure) => Err(failure),
        }
    }

    /// Top-level fault-tolerant iteration (`SPEC_FULL.md` §4.4). On a
    /// recoverable failure, emits a synthetic `ErrorNode`, skips one
    /// token, and keeps going instead of aborting the whole parse.
    pub fn fault_tolerance_many(
        &mut self,
        mut body: impl FnMut(&mut Engine) -> ParseResult<()>,
    ) -> ParseResult<()> {
        while !self.at_eof() {
            let before = self.pos;
            let cp = self.save();
            match body(self) {
                Ok(()) => {
                    if self.pos == before {
                        self.commit(cp);
                        return Err(self.fail(ErrorKind::NonProgressingRepetition {
                            rule: "fault_tolerance_many",
                        }));
                    }
                    self.commit(cp);
                }
                Err(failure) if failure.is_recoverable() => {
                    self.restore(cp);
                    let skipped = self.current().cloned();
                    let at = skipped.as_ref().map(|t| t.loc).unwrap_or_else(|| self.loc_at(self.pos));
                    self.diagnostics.push(Diagnostic {
                        message: format!(
                            "unexpected token{}",
                            skipped
                                .as_ref()
                                .map(|t| format!(" `{}`", t.value))
                                .unwrap_or_default()
                        ),
                        at,
                    });
                    self.push_child(CstNode::new_error(Some(at), skipped.map(|t| t.value)));
                    if !self.at_eof() {
                        self.advance_raw().expect("at_eof() just confirmed a token exists");
                    }
                }
                Err(failure) => return Err(failure),
            }
        }
        Ok(())
    }
}

impl CstNode {
    fn new_rule_root() -> Self {
        CstNode {
            name: NodeKind::Root,
            value: None,
            loc: None,
            children: Vec::new(),
            is_terminal: false,
        }
    }
}
