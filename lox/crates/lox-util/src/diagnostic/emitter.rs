//! Emitters make diagnostics visible as they are reported.
//!
//! A [`Handler`](super::Handler) forwards every diagnostic to its emitter
//! synchronously, in report order. The rendered form is the diagnostic's
//! `Display` output, e.g. `[line 3] Error: Unexpected character.`

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use super::Diagnostic;

/// Sink for rendered diagnostics
pub trait Emitter {
    /// Display a single diagnostic
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Writes each diagnostic as one line on standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(out, "{}", diagnostic);
    }
}

/// Collects rendered diagnostics into a shared buffer
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`Handler`](super::Handler) while another is kept to read the output.
///
/// # Examples
///
/// ```
/// use lox_util::{BufferEmitter, DiagnosticBuilder, Handler, Span};
///
/// let buffer = BufferEmitter::new();
/// let handler = Handler::with_emitter(buffer.clone());
/// DiagnosticBuilder::error("Unexpected character.")
///     .span(Span::new(0, 1, 4))
///     .emit(&handler);
///
/// assert_eq!(buffer.lines(), vec!["[line 4] Error: Unexpected character."]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferEmitter {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferEmitter {
    /// Create an empty buffer emitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every line emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Emitter for BufferEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.lines.borrow_mut().push(diagnostic.to_string());
    }
}
