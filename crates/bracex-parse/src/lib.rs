#![doc = include_str!("../README.md")]

pub use bracex_scan::{Cursor, Span};

mod error;
pub use error::{ParseError, ParseErrorKind};

mod diagnostic;

mod token;
pub use token::{EXISTENCE_CONDITION, Expression, Item, Token, expressions, normalize_condition};

mod split;
pub use split::{PAIRS, Segment, closing_pair, split};

mod item;
mod validate;

mod tokenizer;
pub use tokenizer::{parse_expression, tokenize};

mod classify;
pub use classify::{is_keyed_set, requires_extended_handling, requires_extended_handling_str};
