//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Scanner;

impl Scanner<'_> {
    /// Lexes an identifier or keyword whose first character was already
    /// consumed.
    ///
    /// The whole identifier is read first; only then is it looked up in the
    /// keyword table, so a keyword prefix never splits an identifier.
    pub(super) fn lex_identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
