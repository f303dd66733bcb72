//! Number literal lexing.
//!
//! Numbers are a run of decimal digits with an optional fractional part.
//! There is no exponent, no radix prefix, and no sign; `-` is its own token.

use crate::chars::is_digit;
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl Scanner<'_> {
    /// Lexes a number whose first digit was already consumed.
    ///
    /// A `.` is part of the number only when a digit follows it, so `123.`
    /// scans as `123` followed by `.`.
    pub(super) fn lex_number(&mut self) {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let text = self.cursor.slice_from(self.start);
        // `[0-9]+(\.[0-9]+)?` always parses; oversized values become infinity.
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }
}
