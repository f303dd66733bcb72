//! Comment skipping.

use crate::Scanner;

impl Scanner<'_> {
    /// Skips the body of a line comment whose `//` was already consumed.
    ///
    /// Stops before the newline so the main loop still counts the line.
    pub(super) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
