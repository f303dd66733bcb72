//! Character classes used by the scanner.
//!
//! Identifiers are ASCII-only: a letter or underscore followed by letters,
//! digits, or underscores.

/// Checks if a character can start an identifier.
///
/// # Examples
///
/// ```
/// use lox_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('é'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace that separates tokens without producing one.
///
/// Newlines are handled separately since they advance the line counter.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('z'));
        assert!(is_ident_continue('Z'));
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('_'));
        assert!(!is_ident_continue('-'));
        assert!(!is_ident_continue('ß'));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('٣'));
        assert!(!is_digit('a'));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(' '));
        assert!(is_blank('\t'));
        assert!(is_blank('\r'));
        assert!(!is_blank('\n'));
        assert!(!is_blank('\u{a0}'));
    }
}
