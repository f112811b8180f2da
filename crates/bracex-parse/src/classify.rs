//! Predicates over parsed output.

use crate::{Item, ParseError, Token, expressions, tokenize};

/// Whether `items` form a keyed set: non-empty, and every item has a key.
///
/// Parsed expressions never mix keyed and unkeyed items, so for those this
/// is the same as "the first item has a key".
pub fn is_keyed_set(items: &[Item<'_>]) -> bool {
    !items.is_empty() && items.iter().all(Item::is_keyed)
}

/// Whether any expression in `tokens` has an item with a key or a
/// condition, i.e. needs more than plain value substitution.
pub fn requires_extended_handling(tokens: &[Token<'_>]) -> bool {
    expressions(tokens).any(|expr| expr.is_extended())
}

/// [`requires_extended_handling`] for raw text, tokenizing it first.
pub fn requires_extended_handling_str(text: &str) -> Result<bool, ParseError> {
    Ok(requires_extended_handling(&tokenize(text)?))
}
