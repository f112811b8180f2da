//! Splitting an expression body on its top-level commas.

use bracex_scan::Cursor;
use tracing::trace;

use crate::{ParseError, Span};

/// Bracket pairs whose contents are opaque to splitting and item parsing.
pub const PAIRS: [(char, char); 3] = [('{', '}'), ('[', ']'), ('(', ')')];

/// The closer for a bracket-pair opener, or `None` if `c` opens nothing.
pub fn closing_pair(c: char) -> Option<char> {
    PAIRS
        .iter()
        .find(|(open, _)| *open == c)
        .map(|(_, close)| *close)
}

/// A trimmed, non-empty piece of an expression between top-level commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'src> {
    /// The segment text, with surrounding whitespace removed.
    pub text: &'src str,
    /// Where `text` sits in the original input.
    pub span: Span,
}

/// Split `expr` on commas that are neither inside a bracket pair nor inside
/// a quoted run. Empty segments are dropped.
pub fn split(expr: &str) -> Result<Vec<Segment<'_>>, ParseError> {
    split_within(expr, Span::of(expr))
}

/// Split the `window` of `source`; spans stay relative to `source`.
pub(crate) fn split_within(source: &str, window: Span) -> Result<Vec<Segment<'_>>, ParseError> {
    let mut cursor = Cursor::within(source, window);
    let mut segments = Vec::new();

    while let Some(c) = cursor.peek() {
        if let Some(close) = closing_pair(c) {
            let at = cursor.position();
            if !cursor.skip_to_pair(c, close, true) {
                return Err(ParseError::unmatched(c, at));
            }
        } else if c == ',' {
            push_segment(&mut segments, &cursor);
            cursor.advance();
            cursor.reset_start();
        } else if !cursor.skip_quoted() {
            cursor.advance();
        }
    }
    push_segment(&mut segments, &cursor);

    Ok(segments)
}

fn push_segment<'src>(segments: &mut Vec<Segment<'src>>, cursor: &Cursor<'src>) {
    let raw = cursor.current();
    let text = raw.trim();
    if text.is_empty() {
        return;
    }

    let start = cursor.start() + (raw.len() - raw.trim_start().len()) as u32;
    let span = Span::new(start, start + text.len() as u32);
    trace!("Segment at {:?}: {:?}", span, text);
    segments.push(Segment { text, span });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    fn texts(expr: &str) -> Vec<&str> {
        split(expr).unwrap().into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(texts("a"), vec!["a"]);
        assert_eq!(texts("a, b"), vec!["a", "b"]);
        assert_eq!(texts("  a ,b  ,  c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(texts(",a,,b,"), vec!["a", "b"]);
        assert!(texts("").is_empty());
        assert!(texts(" , ").is_empty());
    }

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(texts("a, \"b, c\", d"), vec!["a", "\"b, c\"", "d"]);
        assert_eq!(texts("'x, y'"), vec!["'x, y'"]);
        assert_eq!(texts("a,'b, c'"), vec!["a", "'b, c'"]);
    }

    #[test]
    fn test_split_respects_brackets() {
        assert_eq!(texts("{b}, c"), vec!["{b}", "c"]);
        assert_eq!(
            texts("f(a, b), [1, 2], {x, {y}}"),
            vec!["f(a, b)", "[1, 2]", "{x, {y}}"]
        );
    }

    #[test]
    fn test_split_spans_point_into_source() {
        let source = "{ a , bb }";
        let segments = split_within(source, Span::new(1, 9)).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].span, Span::new(2, 3));
        assert_eq!(segments[1].span, Span::new(6, 8));
        assert_eq!(segments[1].span.slice(source), "bb");
    }

    #[test]
    fn test_split_unmatched_pair() {
        let err = split("a, f(b, c").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedNestedPair { open: '(' });
        assert_eq!(err.span, Span::new(4, 5));
    }

    #[test]
    fn test_closing_pair() {
        assert_eq!(closing_pair('{'), Some('}'));
        assert_eq!(closing_pair('['), Some(']'));
        assert_eq!(closing_pair('('), Some(')'));
        assert_eq!(closing_pair('<'), None);
    }
}
