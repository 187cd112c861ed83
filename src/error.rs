//! Typed failures produced by the engine (`SPEC_FULL.md` §7).
//!
//! Two layers exist on purpose: [`ErrorKind`] is the closed set of things
//! that can go wrong, and [`ParseFailure`] tags each occurrence as either
//! recoverable (caught and rolled back by `or`/`option`/`many`) or fatal
//! (unwinds straight to [`crate::engine::Engine::parse`]). Recoverable vs.
//! fatal is a property of *where* an error kind can occur, decided once
//! at the construction call site, not re-derived by the combinators.

use crate::token::{SourceLocation, Token, TokenKind};
use thiserror::Error as ThisError;

/// The closed set of ways a rule body, a terminal match, or a combinator
/// can fail.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ErrorKind {
    #[error("expected {expected}, got {}", got.as_ref().map(|t| t.kind.to_string()).unwrap_or_else(|| "end of input".into()))]
    TokenMismatch {
        expected: TokenKind,
        got: Option<Token>,
    },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("no alternative matched (tried {})", tried.join(", "))]
    NoAlternative { tried: Vec<&'static str> },

    #[error("rule `{rule}` matched without consuming input")]
    NonProgressingRepetition { rule: &'static str },

    #[error("internal error: checkpoint stack imbalance")]
    CheckpointImbalance,

    #[error("recursion limit reached while parsing")]
    RecursionLimitExceeded,
}

impl ErrorKind {
    /// Recoverable kinds are the ones `or`/`option`/`many`/
    /// `fault_tolerance_many` catch and roll back from. Everything else is
    /// fatal and unwinds to `Engine::parse`.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::TokenMismatch { .. }
                | ErrorKind::UnexpectedEnd
                | ErrorKind::NoAlternative { .. }
        )
    }
}

/// A tagged outcome carried by every fallible engine operation, in place
/// of exceptions-as-control-flow (the source language's approach, per
/// `SPEC_FULL.md` §9's design notes).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    pub kind: ErrorKind,
    /// Absolute token index the engine had reached when this failure was
    /// raised. Used for the furthest-reach diagnostic.
    pub at: usize,
}

impl ParseFailure {
    pub fn new(kind: ErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }

    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

pub type ParseResult<T> = Result<T, ParseFailure>;

/// The user-visible failure returned by [`crate::engine::Engine::parse`]
/// when an unrecoverable failure reaches the top without ever being
/// absorbed by `fault_tolerance_many`.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub at: SourceLocation,
    pub message: String,
}

/// A non-fatal syntax problem surfaced alongside a successful top-level
/// parse, one per [`crate::cst::NodeKind::Error`] sentinel in the returned
/// tree. Lets tooling show squiggles without walking the CST.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub at: SourceLocation,
}
