//! Splitting text into literal runs and `{...}` expressions.

use bracex_scan::Cursor;
use tracing::{debug, trace};

use crate::item::parse_item;
use crate::split::split_within;
use crate::validate::validate;
use crate::{Expression, ParseError, ParseErrorKind, Span, Token};

/// Split `text` into literal text and parsed `{...}` expressions.
///
/// Quoted runs in the literal text are skipped whole, so a `{` inside quotes
/// does not open an expression. Empty text runs are never emitted.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    debug!("Tokenizing {} bytes", text.len());
    let mut cursor = Cursor::new(text);
    let mut tokens = Vec::new();

    while let Some(c) = cursor.peek() {
        if c == '{' {
            push_text(&mut tokens, &cursor);
            cursor.reset_start();

            let open = cursor.position();
            if !cursor.skip_to_pair('{', '}', true) {
                return Err(ParseError::new(
                    ParseErrorKind::UnmatchedBrace,
                    Span::new(open, open + 1),
                ));
            }

            let span = cursor.span();
            let expr = parse_within(text, span, span.shrink(1))?;
            trace!("Expression at {:?}: {}", span, expr);
            tokens.push(Token::Expression(expr));
            cursor.reset_start();
        } else if !cursor.skip_quoted() {
            cursor.advance();
        }
    }
    push_text(&mut tokens, &cursor);

    debug!("Tokenized into {} tokens", tokens.len());
    Ok(tokens)
}

/// Parse a single expression: either a bare comma list (`a, b if c`) or the
/// same wrapped in braces (`{a, b if c}`).
///
/// Outer braces are only stripped when they match each other, so
/// `{a}, {b}` is a two-item list.
pub fn parse_expression(expr: &str) -> Result<Expression<'_>, ParseError> {
    let whole = Span::of(expr);
    let body = braced_body(expr).unwrap_or(whole);
    let parsed = parse_within(expr, whole, body)?;
    debug!("Parsed expression into {} items", parsed.len());
    Ok(parsed)
}

/// The span inside the outer braces, if `expr` is one `{...}` group.
fn braced_body(expr: &str) -> Option<Span> {
    let mut cursor = Cursor::new(expr);
    if cursor.skip_to_pair('{', '}', true) && cursor.is_eof() {
        Some(Span::of(expr).shrink(1))
    } else {
        None
    }
}

/// Split, parse and validate the `body` of the expression covering `span`.
fn parse_within<'src>(
    source: &'src str,
    span: Span,
    body: Span,
) -> Result<Expression<'src>, ParseError> {
    let items = split_within(source, body)?
        .into_iter()
        .map(|segment| parse_item(source, segment))
        .collect::<Result<Vec<_>, _>>()?;

    let text = span.slice(source);
    validate(&items, text, span)?;

    Ok(Expression {
        items,
        span,
        source: text,
    })
}

fn push_text<'src>(tokens: &mut Vec<Token<'src>>, cursor: &Cursor<'src>) {
    let text = cursor.current();
    if text.is_empty() {
        return;
    }
    trace!("Text at {:?}: {:?}", cursor.span(), text);
    tokens.push(Token::Text {
        text,
        span: cursor.span(),
    });
}
