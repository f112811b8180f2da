//! Scan cursor over a window of the source text.

use regex::Regex;
use tracing::trace;

use crate::Span;

/// Whether `c` opens (and closes) an opaque quoted run.
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// A position-tracking view over an immutable input string.
///
/// The cursor keeps two offsets: `pos`, the scan position, and `start`, the
/// beginning of the slice that has been scanned but not yet consumed by the
/// caller. `pos` only moves forward; `start` moves when the caller calls
/// [`Cursor::reset_start`] after taking a logical unit out of
/// [`Cursor::current`].
///
/// A cursor may be restricted to a window of its source with
/// [`Cursor::within`]. Offsets are always reported relative to the full
/// source, so spans taken from nested scans can be used directly against the
/// original input.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    /// The full source text.
    source: &'src str,
    /// Current scan position.
    pos: u32,
    /// Start of the unconsumed slice.
    start: u32,
    /// Exclusive end of the scanned window.
    end: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor over all of `source`.
    pub fn new(source: &'src str) -> Self {
        Self::within(source, Span::of(source))
    }

    /// Create a cursor that scans only `window` of `source`.
    pub fn within(source: &'src str, window: Span) -> Self {
        debug_assert!(window.end as usize <= source.len());
        Self {
            source,
            pos: window.start,
            start: window.start,
            end: window.end,
        }
    }

    /// The full source text this cursor was created over.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Get the start of the unconsumed slice.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Mark everything up to the current position as consumed.
    #[inline]
    pub fn reset_start(&mut self) {
        self.start = self.pos;
    }

    /// Check if we're at the end of the window.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// The unscanned rest of the window.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        &self.source[self.pos as usize..self.end as usize]
    }

    /// Peek at the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek at the nth character (0-indexed) without consuming.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Advance by one character and return it.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    /// Move to the end of the window.
    #[inline]
    pub fn skip_to_end(&mut self) {
        self.pos = self.end;
    }

    /// The slice between `start` and the current position.
    #[inline]
    pub fn current(&self) -> &'src str {
        &self.source[self.start as usize..self.pos as usize]
    }

    /// Like [`Cursor::current`], but when the slice is wrapped in a matching
    /// pair of quotes, the closing quote is left out.
    pub fn current_trim_end_quote(&self) -> &'src str {
        let current = self.current();
        let mut chars = current.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) if is_quote(first) && first == last => {
                &current[..current.len() - last.len_utf8()]
            }
            _ => current,
        }
    }

    /// Span of the slice returned by [`Cursor::current`].
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Test whether the remaining input starts with a match of `pattern`.
    ///
    /// A match found further into the input does not count. When `consume`
    /// is set and the pattern matches, the cursor moves past the match.
    pub fn match_prefix(&mut self, pattern: &Regex, consume: bool) -> bool {
        let Some(found) = pattern.find(self.remaining()) else {
            return false;
        };
        if found.start() != 0 {
            return false;
        }
        if consume {
            self.pos += found.end() as u32;
        }
        true
    }

    /// Skip over a balanced `open`/`close` pair starting at the cursor.
    ///
    /// The next character must be `open`. Nested occurrences of the same pair
    /// are tracked by depth; nothing else inside the pair is interpreted.
    /// On success the cursor lands after the matching `close` when
    /// `include_close` is set, and on it otherwise. Returns `false` and leaves
    /// the cursor where it was if the window ends before the pair closes.
    pub fn skip_to_pair(&mut self, open: char, close: char, include_close: bool) -> bool {
        if self.peek() != Some(open) {
            return false;
        }

        let mut depth = 0usize;
        for (offset, c) in self.remaining().char_indices() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    let from = self.pos;
                    let close_at = self.pos + offset as u32;
                    self.pos = if include_close {
                        close_at + close.len_utf8() as u32
                    } else {
                        close_at
                    };
                    trace!("Skipped pair {open}{close} at {from}..{}", self.pos);
                    return true;
                }
            }
        }

        trace!("No closing {close:?} for {open:?} at {}", self.pos);
        false
    }

    /// Skip a quoted run if the cursor is on a quote character.
    ///
    /// The run extends through the next occurrence of the same quote; its
    /// content is opaque. An unterminated run extends to the end of the
    /// window. Returns whether anything was skipped.
    pub fn skip_quoted(&mut self) -> bool {
        let Some(quote) = self.peek().filter(|c| is_quote(*c)) else {
            return false;
        };

        let from = self.pos;
        let body = &self.remaining()[quote.len_utf8()..];
        match body.find(quote) {
            Some(offset) => {
                self.pos += (quote.len_utf8() * 2 + offset) as u32;
            }
            None => {
                trace!("Unterminated {quote} run at {from}");
                self.pos = self.end;
            }
        }
        trace!("Skipped quoted run at {from}..{}", self.pos);
        true
    }
}
