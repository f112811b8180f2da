//! Parsing a single segment into an [`Item`].

use bracex_scan::Cursor;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::split::{Segment, closing_pair};
use crate::token::EXISTENCE_CONDITION;
use crate::{Item, ParseError};

/// Whitespace, the word `if`, whitespace.
static CONDITION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+if\s+").unwrap());

/// Extract the key, value and condition of one segment.
///
/// - `key: ` ends at the first colon that is followed by whitespace. Later
///   colons, and colons not followed by whitespace (`a:b`, `http://x`), are
///   part of the value.
/// - ` if <condition>`: everything after the marker is the condition.
/// - A trailing `?` on the value is shorthand for an existence test, unless
///   an explicit condition was given.
///
/// Bracketed and quoted runs are skipped whole, so none of the markers are
/// recognised inside them.
pub(crate) fn parse_item<'src>(
    source: &'src str,
    segment: Segment<'src>,
) -> Result<Item<'src>, ParseError> {
    let mut cursor = Cursor::within(source, segment.span);
    let mut key = None;
    let mut condition = None;
    let mut value = segment.text;

    while let Some(c) = cursor.peek() {
        if let Some(close) = closing_pair(c) {
            let at = cursor.position();
            if !cursor.skip_to_pair(c, close, true) {
                return Err(ParseError::unmatched(c, at));
            }
        } else if c == ':'
            && key.is_none()
            && cursor.peek_nth(1).is_some_and(char::is_whitespace)
        {
            key = Some(cursor.current().trim());
            cursor.advance();
            cursor.reset_start();
            value = cursor.remaining();
        } else if cursor.match_prefix(&CONDITION_MARKER, false) {
            value = cursor.current();
            cursor.match_prefix(&CONDITION_MARKER, true);
            cursor.reset_start();
            cursor.skip_to_end();
            let text = cursor.current().trim();
            condition = (!text.is_empty()).then_some(text);
            break;
        } else if !cursor.skip_quoted() {
            cursor.advance();
        }
    }

    let mut value = value.trim();
    if let Some(stripped) = value.strip_suffix('?') {
        value = stripped;
        condition.get_or_insert(EXISTENCE_CONDITION);
    }

    let item = Item::new(value, key, condition, segment.span);
    trace!("Item at {:?}: {:?}", item.span, item);
    Ok(item)
}
