//! Byte positions in a sketch script.

use std::ops::Range;

/// The bytes of a sketch script that a statement, attribute, or diagnostic
/// covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// An inverted range collapses to an empty span at `range.start`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed statement or attribute part, tagged with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    value: T,
    span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn inner(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_covers_statement() {
        let source = "line (0, 0) -> (40, 0);";
        let span = Span::new(0..source.len());

        assert_eq!(span.start(), 0);
        assert_eq!(span.len(), 23);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_inverted_range_collapses() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = Span::new(8..2);
        assert!(span.is_empty());
        assert_eq!(span.start(), 8);
    }

    #[test]
    fn test_spanned_keeps_value_and_span() {
        let spanned = Spanned::new("fill_color", Span::new(13..23));
        assert_eq!(*spanned.inner(), "fill_color");
        assert_eq!(spanned.span().len(), 10);
        assert_eq!(spanned.into_inner(), "fill_color");
    }
}
