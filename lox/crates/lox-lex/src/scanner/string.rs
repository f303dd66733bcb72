//! String literal lexing.
//!
//! Strings run from `"` to the next `"`, may span lines, and carry no
//! escape sequences: a backslash is an ordinary character.

use lox_util::E_LEXER_UNTERMINATED_STRING;

use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl Scanner<'_> {
    /// Lexes a string literal whose opening quote was already consumed.
    ///
    /// At end of input without a closing quote, reports an error at the
    /// line scanning stopped on and emits nothing.
    pub(super) fn lex_string(&mut self) {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(E_LEXER_UNTERMINATED_STRING, "Unterminated string.");
            return;
        }

        // The closing quote.
        self.cursor.advance();

        let value = self
            .cursor
            .slice(self.start + 1, self.cursor.position() - 1)
            .to_string();
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }
}
