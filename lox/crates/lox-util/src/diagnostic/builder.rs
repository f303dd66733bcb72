//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Span};

/// Fluent constructor for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use lox_util::{DiagnosticBuilder, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated string.")
///     .span(Span::new(0, 4, 3))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    location: Option<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            location: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Fill the "where" slot of the rendered message
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::{DiagnosticBuilder, Span};
    ///
    /// let diag = DiagnosticBuilder::error("Expect ';'.")
    ///     .span(Span::new(0, 3, 2))
    ///     .location(" at 'var'")
    ///     .build();
    /// assert_eq!(diag.to_string(), "[line 2] Error at 'var': Expect ';'.");
    /// ```
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            location: self.location,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
