//! Diagnostic module - Error reporting infrastructure.
//!
//! The [`Handler`] is the front end's error sink. Phases report problems to
//! it and keep going; the driver inspects [`Handler::has_errors`] once a unit
//! of work (a file, a prompt line) is done and decides what to do about it.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.report(3, "Unexpected character.");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: Unexpected character."
//! );
//!
//! handler.clear();
//! assert!(!handler.has_errors());
//! ```

mod builder;
mod codes;
mod emitter;

pub use builder::DiagnosticBuilder;
pub use codes::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};
pub use emitter::{BufferEmitter, Emitter, StderrEmitter};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A lexical error with its location
///
/// Every diagnostic the front end produces is an error: it fails the unit
/// of work it was reported in.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Optional "where" qualifier, rendered between `Error` and the colon
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            location: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Line the diagnostic is reported on (1-based, 0 when unknown)
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

/// Renders as `[line {line}] Error{where}: {message}`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.span.line,
            self.location.as_deref().unwrap_or(""),
            self.message
        )
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler records every diagnostic it receives, forwards it to its
/// [`Emitter`] (if one is installed) right away, and answers "did anything
/// go wrong?" for the driver. Interior mutability lets phases report
/// through a shared reference; a handler is therefore not `Sync`, and
/// concurrent scans each need their own.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Where diagnostics are displayed as they arrive
    emitter: RefCell<Option<Box<dyn Emitter>>>,
}

impl Handler {
    /// Create a handler that only collects diagnostics
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            emitter: RefCell::new(None),
        }
    }

    /// Create a handler that also displays diagnostics through `emitter`
    pub fn with_emitter(emitter: impl Emitter + 'static) -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            emitter: RefCell::new(Some(Box::new(emitter))),
        }
    }

    /// Report an error at a line
    ///
    /// Records the error, which flips [`Handler::has_errors`], and displays
    /// it through the emitter.
    pub fn report(&self, line: u32, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, Span::point(0, line)));
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    fn emit(&self, diagnostic: Diagnostic) {
        tracing::debug!(
            line = diagnostic.span.line,
            code = ?diagnostic.code,
            "error: {}",
            diagnostic.message
        );
        if let Some(emitter) = self.emitter.borrow_mut().as_mut() {
            emitter.emit(&diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported since the last [`Handler::clear`]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics, resetting the error state
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_without_location() {
        let diag = Diagnostic::error("Unterminated string.", Span::new(0, 4, 7));
        assert_eq!(diag.to_string(), "[line 7] Error: Unterminated string.");
    }

    #[test]
    fn test_diagnostic_display_with_location() {
        let mut diag = Diagnostic::error("Expect expression.", Span::new(0, 1, 1));
        diag.location = Some(" at end".to_string());
        assert_eq!(diag.to_string(), "[line 1] Error at end: Expect expression.");
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("Unexpected character.", Span::point(3, 1))
            .with_code(E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.code, Some(E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.line(), 1);
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_report() {
        let handler = Handler::new();
        handler.report(2, "Unexpected character.");
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].line(), 2);
    }

    #[test]
    fn test_handler_clear_resets_flag() {
        let handler = Handler::new();
        handler.report(1, "first");
        handler.clear();
        assert!(!handler.has_errors());
        handler.report(1, "second");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_handler_forwards_to_emitter_in_order() {
        let buffer = BufferEmitter::new();
        let handler = Handler::with_emitter(buffer.clone());
        handler.report(1, "one");
        handler.report(4, "two");

        assert_eq!(
            buffer.lines(),
            vec!["[line 1] Error: one", "[line 4] Error: two"]
        );
        assert_eq!(handler.error_count(), 2);
    }
}
