//! Output types: items, expressions and the token stream.

use std::fmt;

use crate::Span;

/// Condition value standing for "the value is non-empty", written as a
/// trailing `?` on the item.
pub const EXISTENCE_CONDITION: &str = "?";

/// One comma-separated entry of an expression, e.g. `title: name if verbose`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item<'src> {
    /// The value, trimmed, without a trailing `?`.
    pub value: &'src str,
    /// Text before the first `: ` separator, if any.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub key: Option<&'src str>,
    /// Text after ` if `, or [`EXISTENCE_CONDITION`] for the `?` shorthand.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub condition: Option<&'src str>,
    /// Condition in a form a predicate evaluator can take as-is. Present
    /// exactly when `condition` is.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "normalizedCondition", skip_serializing_if = "Option::is_none")
    )]
    pub normalized_condition: Option<String>,
    /// Span of the whole item in the original input.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub span: Span,
}

impl<'src> Item<'src> {
    /// Build an item, deriving `normalized_condition` from `condition`.
    pub fn new(
        value: &'src str,
        key: Option<&'src str>,
        condition: Option<&'src str>,
        span: Span,
    ) -> Self {
        Self {
            value,
            key,
            condition,
            normalized_condition: condition.map(|c| normalize_condition(value, c)),
            span,
        }
    }

    /// Whether this item carries a key.
    #[inline]
    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }

    /// Whether this item needs more than plain substitution: a key or a
    /// condition.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.key.is_some() || self.condition.is_some()
    }
}

/// Existence tests become `normalize-space(<value>)`, which is truthy exactly
/// when the value has non-whitespace content. Other conditions pass through.
pub fn normalize_condition(value: &str, condition: &str) -> String {
    if condition == EXISTENCE_CONDITION {
        format!("normalize-space({value})")
    } else {
        condition.to_string()
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = self.key {
            write!(f, "{key}: ")?;
        }
        f.write_str(self.value)?;
        match self.condition {
            Some(EXISTENCE_CONDITION) => f.write_str("?"),
            Some(condition) => write!(f, " if {condition}"),
            None => Ok(()),
        }
    }
}

/// The parsed contents of one `{...}` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'src> {
    /// Items in source order. Either all of them have keys or none do.
    pub items: Vec<Item<'src>>,
    /// Span of the expression in the original input, braces included when
    /// the expression was written with them.
    pub span: Span,
    /// The source text covered by `span`.
    pub source: &'src str,
}

impl Expression<'_> {
    /// Whether this expression is a keyed set (`{a: x, b: y}`) rather than a
    /// plain list. An empty expression is a plain list.
    pub fn is_keyed_set(&self) -> bool {
        crate::is_keyed_set(&self.items)
    }

    /// Whether any item has a key or a condition.
    pub fn is_extended(&self) -> bool {
        self.items.iter().any(Item::is_extended)
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items, as in `{}` or `{ , }`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Canonical rendering: `{` items joined by `, ` `}`.
impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

/// A unit of tokenizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of literal text. Never empty.
    Text {
        /// The text, exactly as it appears in the input.
        text: &'src str,
        /// Where it appears.
        span: Span,
    },
    /// A `{...}` expression.
    Expression(Expression<'src>),
}

impl<'src> Token<'src> {
    /// Span of this token in the original input.
    pub fn span(&self) -> Span {
        match self {
            Token::Text { span, .. } => *span,
            Token::Expression(expr) => expr.span,
        }
    }

    /// The input text this token was produced from. Concatenating these for
    /// a whole token stream yields the original input.
    pub fn source_text(&self) -> &'src str {
        match self {
            Token::Text { text, .. } => *text,
            Token::Expression(expr) => expr.source,
        }
    }

    /// The literal text, if this is a text token.
    pub fn as_text(&self) -> Option<&'src str> {
        match self {
            Token::Text { text, .. } => Some(*text),
            Token::Expression(_) => None,
        }
    }

    /// The expression, if this is an expression token.
    pub fn as_expression(&self) -> Option<&Expression<'src>> {
        match self {
            Token::Text { .. } => None,
            Token::Expression(expr) => Some(expr),
        }
    }
}

/// Iterate over the expression tokens of a token stream.
pub fn expressions<'a, 'src>(
    tokens: &'a [Token<'src>],
) -> impl Iterator<Item = &'a Expression<'src>> + 'a {
    tokens.iter().filter_map(Token::as_expression)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Expression<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.items, serializer)
    }
}

/// Text tokens serialize as JSON strings, expressions as arrays of items.
#[cfg(feature = "serde")]
impl serde::Serialize for Token<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Text { text, .. } => serializer.serialize_str(text),
            Token::Expression(expr) => serde::Serialize::serialize(expr, serializer),
        }
    }
}
