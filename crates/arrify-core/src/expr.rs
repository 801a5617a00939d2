//! PHP expression grammar — lexing and parsing of array-literal source.
//!
//! This is a small, self-contained recursive-descent parser for the subset of
//! PHP expression syntax the codec round-trips through:
//!
//! - `array( ... )` literals and the short `[ ... ]` syntax
//! - `key => value` entries and bare positional entries, trailing commas
//! - single- and double-quoted strings with backslash escapes
//! - integer and decimal number tokens (sign included)
//! - `true`, `false`, `null` keywords (case-insensitive, as in PHP)
//! - function calls `name(arg, ...)` and bare constants
//! - line (`//`, `#`) and block (`/* */`) comments between tokens
//!
//! The parser is stateless between calls and tracks no source locations beyond
//! the byte offset reported in errors. It produces a generic [`Expr`] tree;
//! projecting that tree into values is the reducer's job (see `parse`).

use crate::error::{ArrifyError, Result};

/// A parsed PHP expression node.
///
/// Number tokens keep their raw text: the reducer applies integer-prefix
/// semantics (`"3.14"` → 3) and call arguments pass through unchanged, so
/// eagerly converting here would lose information.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Raw numeric token, e.g. `42`, `-7`, `3.14`.
    Number(String),
    /// Unescaped string contents (quote style is not preserved).
    Str(String),
    Bool(bool),
    Null,
    /// `array( ... )` or `[ ... ]`.
    Array(Vec<Entry>),
    /// `name(arg1, arg2, ...)`.
    Call { name: String, args: Vec<Expr> },
    /// A bare constant or other identifier that is not a call.
    Ident(String),
}

/// One item of an array literal: `key => value` or a bare `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Option<Expr>,
    pub value: Expr,
}

/// Parse a source fragment holding one expression statement.
///
/// A trailing `;` is consumed; anything left after it is a syntax error, as
/// is input that is empty once trivia is stripped.
pub fn parse_program(source: &str) -> Result<Expr> {
    let mut parser = Parser::new(source);
    parser.skip_trivia();
    if parser.at_end() {
        return Err(parser.error("unexpected end of input"));
    }
    let expr = parser.parse_expr()?;
    parser.skip_trivia();
    if parser.eat(b';') {
        parser.skip_trivia();
    }
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input after expression"));
    }
    Ok(expr)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    /// Consume `expected` if it is the next byte.
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected as char)))
        }
    }

    fn error(&self, message: impl Into<String>) -> ArrifyError {
        ArrifyError::PhpParse {
            offset: self.pos,
            message: message.into(),
        }
    }

    /// Skip whitespace and comments. Comment text is discarded; the reducer
    /// never consumes it.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => self.pos += 1,
                Some(b'#') => self.skip_line_comment(),
                Some(b'/') if self.peek_at(1) == Some(b'/') => self.skip_line_comment(),
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    self.pos += 2;
                    while self.pos < self.src.len() {
                        if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        self.skip_trivia();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some(b'\'') | Some(b'"') => self.parse_string(),
            Some(b'[') => {
                self.pos += 1;
                let items = self.parse_items(b']')?;
                Ok(Expr::Array(items))
            }
            Some(b'-') if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) => {
                self.parse_number()
            }
            Some(b) if b.is_ascii_digit() => self.parse_number(),
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.parse_ident(),
            Some(b) => Err(self.error(format!("unexpected character '{}'", b as char))),
        }
    }

    /// Parse a quoted string, resolving backslash escapes. Both quote styles
    /// accept the same escape set the renderer produces (`\'`, `\"`, `\\`,
    /// `\n`, `\r`, `\t`); an unrecognized escape keeps its backslash.
    fn parse_string(&mut self) -> Result<Expr> {
        let quote = self.peek().unwrap_or(b'"');
        self.pos += 1;
        let start = self.pos;

        let bytes = self.bytes();
        let mut i = self.pos;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                i += 2;
            } else if bytes[i] == quote {
                let raw = &self.src[start..i];
                self.pos = i + 1;
                return Ok(Expr::Str(unescape(raw)));
            } else {
                i += 1;
            }
        }
        self.pos = start;
        Err(self.error("unterminated string literal"))
    }

    /// Parse a numeric token: optional sign, digits, optional fraction and
    /// exponent. The raw text is preserved.
    fn parse_number(&mut self) -> Result<Expr> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mut ahead = 1;
            if matches!(self.peek_at(1), Some(b'+') | Some(b'-')) {
                ahead = 2;
            }
            if self.peek_at(ahead).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += ahead;
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }
        Ok(Expr::Number(self.src[start..self.pos].to_string()))
    }

    /// Parse an identifier and classify it: `array(...)` literal, keyword,
    /// function call, or bare constant.
    fn parse_ident(&mut self) -> Result<Expr> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        let name = &self.src[start..self.pos];

        if name.eq_ignore_ascii_case("array") {
            self.skip_trivia();
            self.expect(b'(')?;
            let items = self.parse_items(b')')?;
            return Ok(Expr::Array(items));
        }
        if name.eq_ignore_ascii_case("true") {
            return Ok(Expr::Bool(true));
        }
        if name.eq_ignore_ascii_case("false") {
            return Ok(Expr::Bool(false));
        }
        if name.eq_ignore_ascii_case("null") {
            return Ok(Expr::Null);
        }

        let name = name.to_string();
        self.skip_trivia();
        if self.eat(b'(') {
            let args = self.parse_args()?;
            return Ok(Expr::Call { name, args });
        }
        Ok(Expr::Ident(name))
    }

    /// Parse array items up to `close`. Each item is either `value` or
    /// `key => value`; trailing commas are tolerated, as PHP does.
    fn parse_items(&mut self, close: u8) -> Result<Vec<Entry>> {
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat(close) {
                return Ok(items);
            }
            let first = self.parse_expr()?;
            self.skip_trivia();

            let entry = if self.peek() == Some(b'=') && self.peek_at(1) == Some(b'>') {
                self.pos += 2;
                let value = self.parse_expr()?;
                Entry {
                    key: Some(first),
                    value,
                }
            } else {
                Entry {
                    key: None,
                    value: first,
                }
            };
            items.push(entry);

            self.skip_trivia();
            if self.eat(b',') {
                continue;
            }
            self.expect(close)?;
            return Ok(items);
        }
    }

    /// Parse call arguments up to the closing parenthesis.
    fn parse_args(&mut self) -> Result<Vec<Expr>> {
        let mut args = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat(b')') {
                return Ok(args);
            }
            args.push(self.parse_expr()?);
            self.skip_trivia();
            if self.eat(b',') {
                continue;
            }
            self.expect(b')')?;
            return Ok(args);
        }
    }
}

/// Resolve backslash escapes in raw string contents.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('\'') => out.push('\''),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
