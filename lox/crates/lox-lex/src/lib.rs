//! lox-lex - Lexical analyzer for the Lox scripting language.
//!
//! This crate turns Lox source text into an ordered sequence of tokens for
//! the parser. Scanning is a single forward pass over an in-memory string:
//! lexical errors are reported to a [`lox_util::Handler`] and scanning keeps
//! going, so one pass surfaces every error in the input. The returned
//! sequence always ends with exactly one [`TokenKind::Eof`] token.
//!
//! # Example Usage
//!
//! ```
//! use lox_lex::{Literal, Scanner, TokenKind};
//! use lox_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = Scanner::new("var pi = 3.5; // approx", &mut handler).scan_all();
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].literal, Some(Literal::Number(3.5)));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, the keyword table, literals, tokens
//! - [`scanner`] - the scanning state machine
//! - [`cursor`] - character cursor with line tracking
//! - [`chars`] - character classes
//!
//! # Token Categories
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` `/`
//! - **Operators**: `!` `!=` `=` `==` `<` `<=` `>` `>=`
//! - **Literals**: identifiers, `"strings"` (may span lines, no escapes),
//!   numbers (`12`, `3.5`; decoded as `f64`)
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`
//! - **Special**: `EOF`
//!
//! Whitespace and `//` line comments produce no tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{scan_all, Scanner};
pub use token::{keyword_from_ident, Literal, Token, TokenKind, KEYWORDS};
