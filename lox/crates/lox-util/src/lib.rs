//! lox-util - Shared foundation types for the Lox front end.
//!
//! This crate holds the pieces every phase needs but none of them owns:
//!
//! - [`span`] - source locations (byte range plus 1-based line)
//! - [`diagnostic`] - diagnostics, diagnostic codes, and the [`Handler`]
//!   error sink that records them and owns the "had error" state
//!
//! # Example
//!
//! ```
//! use lox_util::{DiagnosticBuilder, Handler, Span, E_LEXER_UNEXPECTED_CHAR};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 1] Error: Unexpected character."
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    BufferEmitter, Diagnostic, DiagnosticBuilder, DiagnosticCode, Emitter, Handler,
    StderrEmitter, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING,
};
pub use span::Span;
