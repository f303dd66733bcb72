//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its main loop, and the
//! per-character dispatch.

use lox_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span, E_LEXER_UNEXPECTED_CHAR};

use crate::chars::{is_blank, is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Single-pass scanner for Lox source.
///
/// A scanner is bound to one source string and one error handler, runs
/// once via [`Scanner::scan_all`], and is consumed by it. Lexical errors
/// are reported to the handler and scanning continues, so a single pass
/// surfaces every error in the input.
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error sink for lexical errors.
    handler: &'a mut Handler,

    /// Tokens produced so far, in source order.
    tokens: Vec<Token>,

    /// Byte offset of the current lexeme's first character.
    pub(super) start: usize,

    /// Line of the current lexeme's first character.
    start_line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` reporting to `handler`.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            tokens: Vec::new(),
            start: 0,
            start_line: 1,
        }
    }

    /// Scans the whole source.
    ///
    /// Always terminates and always returns a sequence ending in exactly one
    /// `EOF` token carrying the final line number. Malformed input never
    /// aborts the scan; check the handler for errors afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::{Scanner, TokenKind};
    /// use lox_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let tokens = Scanner::new("a @ b", &mut handler).scan_all();
    ///
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[2].kind, TokenKind::Eof);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn scan_all(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.start = self.cursor.position();
            self.start_line = self.cursor.line();
            self.scan_token();
        }

        let line = self.cursor.line();
        self.tokens.push(Token::eof(line));
        tracing::trace!(tokens = self.tokens.len(), lines = line, "scan complete");
        self.tokens
    }

    /// Scans one token, or skips one unit of whitespace or comment.
    ///
    /// Consumes at least one character.
    fn scan_token(&mut self) {
        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            // The cursor already bumped the line counter.
            '\n' => {}
            c if is_blank(c) => {}
            '"' => self.lex_string(),
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => self.report_error(E_LEXER_UNEXPECTED_CHAR, "Unexpected character."),
        }
    }

    /// Emits a token for the current lexeme with no literal.
    pub(super) fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    /// Emits a token for the current lexeme carrying a decoded literal.
    pub(super) fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line));
    }

    /// Reports a lexical error at the line the cursor has reached.
    ///
    /// The span covers the current lexeme from its first byte, but its line
    /// is where scanning stopped, so an unterminated string reports the last
    /// line of the input.
    pub(super) fn report_error(&mut self, code: DiagnosticCode, message: &str) {
        let span = Span::new(self.start, self.cursor.position(), self.cursor.line());
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(&*self.handler);
    }
}
