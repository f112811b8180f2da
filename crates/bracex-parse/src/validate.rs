//! Keyed/unkeyed homogeneity check.

use crate::{Item, ParseError, ParseErrorKind, Span};

/// Fail unless either every item has a key or none does.
///
/// `source` is the expression text echoed in the error; `span` is where it
/// sits in the original input.
pub(crate) fn validate(items: &[Item<'_>], source: &str, span: Span) -> Result<(), ParseError> {
    let keyed = items.iter().filter(|item| item.is_keyed()).count();
    if keyed != 0 && keyed != items.len() {
        return Err(ParseError::new(
            ParseErrorKind::MixedItemKinds {
                expression: source.to_string(),
            },
            span,
        ));
    }
    Ok(())
}
