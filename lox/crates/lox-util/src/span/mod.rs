//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range into the scanned source together
//! with the 1-based line a diagnostic is reported on. That line is the line
//! the scanner had reached when the problem was detected, which is not
//! always the line `start` falls on: an unterminated string spans from its
//! opening quote to the end of input and reports the final line.
//!
//! # Examples
//!
//! ```
//! use lox_util::span::Span;
//!
//! let span = Span::new(4, 9, 2);
//! assert_eq!(span.end - span.start, 5);
//! assert_eq!(span.line, 2);
//! ```

/// Source location span
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line the diagnostic is reported on (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no source location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Reported line number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// let point = Span::point(7, 3);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
        }
    }
}
