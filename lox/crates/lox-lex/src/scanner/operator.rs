//! Operator lexing.
//!
//! Handles the operators that may be followed by `=` and the slash, which
//! may instead start a line comment. The first character has already been
//! consumed when these are called.

use crate::token::TokenKind;
use crate::Scanner;

impl Scanner<'_> {
    /// Lexes `!` or `!=`.
    pub(super) fn lex_bang(&mut self) {
        self.lex_with_equal(TokenKind::Bang, TokenKind::BangEqual);
    }

    /// Lexes `=` or `==`.
    pub(super) fn lex_equals(&mut self) {
        self.lex_with_equal(TokenKind::Equal, TokenKind::EqualEqual);
    }

    /// Lexes `<` or `<=`.
    pub(super) fn lex_less(&mut self) {
        self.lex_with_equal(TokenKind::Less, TokenKind::LessEqual);
    }

    /// Lexes `>` or `>=`.
    pub(super) fn lex_greater(&mut self) {
        self.lex_with_equal(TokenKind::Greater, TokenKind::GreaterEqual);
    }

    /// Lexes `/`, or skips a `//` line comment without emitting anything.
    pub(super) fn lex_slash(&mut self) {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn lex_with_equal(&mut self, single: TokenKind, double: TokenKind) {
        let kind = if self.cursor.match_char('=') {
            double
        } else {
            single
        };
        self.add_token(kind);
    }
}
