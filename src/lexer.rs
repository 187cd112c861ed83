//! A small hand-written lexer for the ECMAScript-subset grammar, so the
//! engine can be exercised from source text and not just hand-built token
//! vectors. Lexical-grammar fidelity (regex literals, template strings,
//! automatic semicolon insertion) is explicitly out of scope
//! (`SPEC_FULL.md` §1); this covers exactly what the grammar in
//! `src/grammar` consumes.

use crate::token::{Position, SourceLocation, Token, TokenKind};

struct Cursor<'a> {
    chars: std::str::CharIndices<'a>,
    peeked: Option<(usize, char)>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices(),
            peeked: None,
            line: 1,
            column: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }
        self.peeked.map(|(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.peeked.take().or_else(|| self.chars.next())?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&mut self) -> Position {
        // force `peeked` to reflect the upcoming character so line/column
        // line up with `byte_offset`.
        self.peek();
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// Tokenize `source` into a flat token array ending with a single
/// [`TokenKind::Eof`] sentinel, so combinators never need to special-case
/// `None` at end of input.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();
    let mut index = 0usize;

    loop {
        skip_trivia(&mut cursor);
        let start_pos = cursor.position();
        let Some(c) = cursor.peek() else {
            tokens.push(Token::new(
                TokenKind::Eof,
                "",
                SourceLocation {
                    start: start_pos,
                    end: start_pos,
                    index,
                },
            ));
            break;
        };

        let (kind, text) = match c {
            c if is_ident_start(c) => lex_identifier(&mut cursor),
            c if c.is_ascii_digit() => lex_number(&mut cursor),
            '"' | '\'' => lex_string(&mut cursor),
            _ => lex_punctuation(&mut cursor),
        };

        let end_pos = cursor.position();
        let loc = SourceLocation {
            start: start_pos,
            end: end_pos,
            index,
        };
        tokens.push(Token::new(kind, text, loc));
        index += 1;
    }

    tokens
}

fn skip_trivia(cursor: &mut Cursor) {
    loop {
        match cursor.peek() {
            Some(c) if c.is_whitespace() => {
                cursor.bump();
            }
            Some('/') => {
                // line comments only; block comments are out of scope.
                let mut ahead = cursor.chars.clone();
                if ahead.next().map(|(_, c)| c) == Some('/') {
                    cursor.bump();
                    cursor.bump();
                    while let Some(c) = cursor.peek() {
                        if c == '\n' {
                            break;
                        }
                        cursor.bump();
                    }
                } else {
                    break;
                }
            }
            _ => break,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn lex_identifier(cursor: &mut Cursor) -> (TokenKind, String) {
    let mut buf = String::new();
    while let Some(c) = cursor.peek() {
        if is_ident_continue(c) {
            buf.push(c);
            cursor.bump();
        } else {
            break;
        }
    }
    let kind = match buf.as_str() {
        "let" => TokenKind::Let,
        "const" => TokenKind::Const,
        "var" => TokenKind::Var,
        "true" | "false" => TokenKind::BooleanLiteral,
        _ => TokenKind::Identifier,
    };
    (kind, buf)
}

fn lex_number(cursor: &mut Cursor) -> (TokenKind, String) {
    let mut buf = String::new();
    while let Some(c) = cursor.peek() {
        if c.is_ascii_digit() {
            buf.push(c);
            cursor.bump();
        } else {
            break;
        }
    }
    if cursor.peek() == Some('.') {
        let mut ahead = cursor.chars.clone();
        if ahead.next().map(|(_, c)| c.is_ascii_digit()).unwrap_or(false) {
            buf.push('.');
            cursor.bump();
            while let Some(c) = cursor.peek() {
                if c.is_ascii_digit() {
                    buf.push(c);
                    cursor.bump();
                } else {
                    break;
                }
            }
        }
    }
    (TokenKind::NumericLiteral, buf)
}

fn lex_string(cursor: &mut Cursor) -> (TokenKind, String) {
    let quote = cursor.bump().expect("caller confirmed a quote character");
    let mut buf = String::new();
    buf.push(quote);
    while let Some(c) = cursor.peek() {
        cursor.bump();
        buf.push(c);
        if c == quote {
            break;
        }
    }
    (TokenKind::StringLiteral, buf)
}

fn lex_punctuation(cursor: &mut Cursor) -> (TokenKind, String) {
    let c = cursor.bump().expect("caller confirmed a character is present");
    let mut ahead = cursor.chars.clone();
    let next = ahead.next().map(|(_, c)| c);

    macro_rules! two_char {
        ($second:expr, $kind:expr, $text:expr) => {
            if next == Some($second) {
                cursor.bump();
                return ($kind, $text.to_string());
            }
        };
    }

    match c {
        '(' => (TokenKind::LParen, "(".into()),
        ')' => (TokenKind::RParen, ")".into()),
        '{' => (TokenKind::LBrace, "{".into()),
        '}' => (TokenKind::RBrace, "}".into()),
        '[' => (TokenKind::LBracket, "[".into()),
        ']' => (TokenKind::RBracket, "]".into()),
        '.' => (TokenKind::Dot, ".".into()),
        ',' => (TokenKind::Comma, ",".into()),
        ';' => (TokenKind::Semicolon, ";".into()),
        ':' => (TokenKind::Colon, ":".into()),
        '?' => (TokenKind::Question, "?".into()),
        '~' => (TokenKind::Tilde, "~".into()),
        '+' => {
            two_char!('+', TokenKind::PlusPlus, "++");
            (TokenKind::Plus, "+".into())
        }
        '-' => {
            two_char!('-', TokenKind::MinusMinus, "--");
            (TokenKind::Minus, "-".into())
        }
        '*' => (TokenKind::Star, "*".into()),
        '/' => (TokenKind::Slash, "/".into()),
        '%' => (TokenKind::Percent, "%".into()),
        '&' => {
            two_char!('&', TokenKind::AmpAmp, "&&");
            (TokenKind::AmpAmp, "&".into())
        }
        '|' => {
            two_char!('|', TokenKind::PipePipe, "||");
            (TokenKind::PipePipe, "|".into())
        }
        '=' => {
            two_char!('=', TokenKind::EqEq, "==");
            (TokenKind::Eq, "=".into())
        }
        '!' => {
            two_char!('=', TokenKind::BangEq, "!=");
            (TokenKind::Bang, "!".into())
        }
        '<' => {
            two_char!('=', TokenKind::LtEq, "<=");
            (TokenKind::Lt, "<".into())
        }
        '>' => {
            two_char!('=', TokenKind::GtEq, ">=");
            (TokenKind::Gt, ">".into())
        }
        other => (TokenKind::Identifier, other.to_string()),
    }
}
