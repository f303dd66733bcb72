//! Scanner module.
//!
//! The scanner is split into focused pieces:
//! - `core` - the `Scanner` struct, main loop, and per-character dispatch
//! - `operator` - one/two-character operators and `/`
//! - `comment` - line comment skipping
//! - `string` - string literals
//! - `number` - number literals
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;

use crate::token::Token;
use lox_util::Handler;

/// Scans `source` to completion, reporting lexical errors to `handler`.
///
/// Shorthand for `Scanner::new(source, handler).scan_all()`.
///
/// # Example
///
/// ```
/// use lox_lex::{scan_all, TokenKind};
/// use lox_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = scan_all("print 1;", &mut handler);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Print, TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]
/// );
/// ```
pub fn scan_all(source: &str, handler: &mut Handler) -> Vec<Token> {
    Scanner::new(source, handler).scan_all()
}
