//! Parse failures.

use crate::Span;

/// The kind of parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `{` in the text with no `}` before the end of input.
    UnmatchedBrace,
    /// A `{`, `[` or `(` inside an expression with no closer before the end
    /// of the enclosing segment.
    UnmatchedNestedPair {
        /// The opening character.
        open: char,
    },
    /// Some items of an expression have keys and some don't.
    MixedItemKinds {
        /// Source text of the offending expression.
        expression: String,
    },
}

/// A parse failure with its location in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Source location.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// An unmatched opener at byte offset `at`.
    pub(crate) fn unmatched(open: char, at: u32) -> Self {
        let span = Span::new(at, at + open.len_utf8() as u32);
        Self::new(ParseErrorKind::UnmatchedNestedPair { open }, span)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseErrorKind::UnmatchedBrace => write!(
                f,
                "invalid expression: unable to find `}}` for opening brace at position {}",
                self.span.start
            ),
            ParseErrorKind::UnmatchedNestedPair { open } => write!(
                f,
                "unable to find closing brace for character `{open}` at position {}",
                self.span.start
            ),
            ParseErrorKind::MixedItemKinds { expression } => write!(
                f,
                "illegal mix of plain list and hashes in `{expression}` at offset {}",
                self.span.start
            ),
        }
    }
}

impl std::error::Error for ParseError {}
