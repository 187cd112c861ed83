//! A thin, one-method-per-terminal façade over [`Engine::consume_terminal`]
//! (`SPEC_FULL.md` §4.5). Grammar modules could call `consume_terminal`
//! directly; these named wrappers exist so rule bodies read like the
//! grammar they implement (`p.let_tok()?` vs. `p.consume_terminal(TokenKind::Let)?`),
//! and so a second dialect could extend the terminal set with its own
//! trait without touching this one.

use crate::engine::Engine;
use crate::error::ParseResult;
use crate::token::TokenKind;

pub(crate) trait TokenConsumer {
    fn let_tok(&mut self) -> ParseResult<()>;
    fn const_tok(&mut self) -> ParseResult<()>;
    fn var_tok(&mut self) -> ParseResult<()>;
    fn identifier(&mut self) -> ParseResult<()>;
    fn numeric_literal(&mut self) -> ParseResult<()>;
    fn string_literal(&mut self) -> ParseResult<()>;
    fn boolean_literal(&mut self) -> ParseResult<()>;
    fn l_paren(&mut self) -> ParseResult<()>;
    fn r_paren(&mut self) -> ParseResult<()>;
    fn l_brace(&mut self) -> ParseResult<()>;
    fn r_brace(&mut self) -> ParseResult<()>;
    fn l_bracket(&mut self) -> ParseResult<()>;
    fn r_bracket(&mut self) -> ParseResult<()>;
    fn dot(&mut self) -> ParseResult<()>;
    fn comma(&mut self) -> ParseResult<()>;
    fn semicolon(&mut self) -> ParseResult<()>;
    fn colon(&mut self) -> ParseResult<()>;
    fn question(&mut self) -> ParseResult<()>;
    fn eq(&mut self) -> ParseResult<()>;
}

macro_rules! terminal {
    ($name:ident, $kind:expr) => {
        fn $name(&mut self) -> ParseResult<()> {
            self.consume_terminal($kind)
        }
    };
}

impl TokenConsumer for Engine {
    terminal!(let_tok, TokenKind::Let);
    terminal!(const_tok, TokenKind::Const);
    terminal!(var_tok, TokenKind::Var);
    terminal!(identifier, TokenKind::Identifier);
    terminal!(numeric_literal, TokenKind::NumericLiteral);
    terminal!(string_literal, TokenKind::StringLiteral);
    terminal!(boolean_literal, TokenKind::BooleanLiteral);
    terminal!(l_paren, TokenKind::LParen);
    terminal!(r_paren, TokenKind::RParen);
    terminal!(l_brace, TokenKind::LBrace);
    terminal!(r_brace, TokenKind::RBrace);
    terminal!(l_bracket, TokenKind::LBracket);
    terminal!(r_bracket, TokenKind::RBracket);
    terminal!(dot, TokenKind::Dot);
    terminal!(comma, TokenKind::Comma);
    terminal!(semicolon, TokenKind::Semicolon);
    terminal!(colon, TokenKind::Colon);
    terminal!(question, TokenKind::Question);
    terminal!(eq, TokenKind::Eq);
}
