#![doc = include_str!("../README.md")]

mod span;
pub use span::Span;

mod cursor;
pub use cursor::{Cursor, is_quote};
