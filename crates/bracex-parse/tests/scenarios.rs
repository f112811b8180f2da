//! End-to-end behaviour of the public API on representative inputs.

use bracex_parse::{
    Expression, ParseErrorKind, Token, is_keyed_set, parse_expression,
    requires_extended_handling, tokenize,
};

/// `(value, key, condition)` triples, for compact comparisons.
fn shape<'a>(expr: &'a Expression<'_>) -> Vec<(&'a str, Option<&'a str>, Option<&'a str>)> {
    expr.items
        .iter()
        .map(|item| (item.value, item.key, item.condition))
        .collect()
}

fn texts<'a>(tokens: &'a [Token<'_>]) -> Vec<Option<&'a str>> {
    tokens.iter().map(Token::as_text).collect()
}

#[test]
fn tokenize_plain_text() {
    assert_eq!(texts(&tokenize("a").unwrap()), vec![Some("a")]);
    assert_eq!(texts(&tokenize("a b").unwrap()), vec![Some("a b")]);
}

#[test]
fn tokenize_text_and_expression() {
    let tokens = tokenize("a{b}c").unwrap();
    assert_eq!(texts(&tokens), vec![Some("a"), None, Some("c")]);
    assert_eq!(
        shape(tokens[1].as_expression().unwrap()),
        vec![("b", None, None)]
    );
}

#[test]
fn tokenize_list_expression() {
    let tokens = tokenize("a {b, c} d").unwrap();
    assert_eq!(texts(&tokens), vec![Some("a "), None, Some(" d")]);
    assert_eq!(
        shape(tokens[1].as_expression().unwrap()),
        vec![("b", None, None), ("c", None, None)]
    );
}

#[test]
fn tokenize_nested_braces() {
    let tokens = tokenize("a {{b}, c} d").unwrap();
    assert_eq!(texts(&tokens), vec![Some("a "), None, Some(" d")]);
    assert_eq!(
        shape(tokens[1].as_expression().unwrap()),
        vec![("{b}", None, None), ("c", None, None)]
    );
}

#[test]
fn parse_simple_expressions() {
    assert_eq!(shape(&parse_expression("a").unwrap()), vec![("a", None, None)]);
    assert_eq!(
        shape(&parse_expression("a?").unwrap()),
        vec![("a", None, Some("?"))]
    );
    assert_eq!(
        shape(&parse_expression("a if b").unwrap()),
        vec![("a", None, Some("b"))]
    );
    assert_eq!(
        shape(&parse_expression("a? if b").unwrap()),
        vec![("a", None, Some("b"))]
    );
}

#[test]
fn parse_lists() {
    assert_eq!(
        shape(&parse_expression("a, b").unwrap()),
        vec![("a", None, None), ("b", None, None)]
    );
    assert_eq!(
        shape(&parse_expression("a, \"b, c\"").unwrap()),
        vec![("a", None, None), ("\"b, c\"", None, None)]
    );
    assert_eq!(
        shape(&parse_expression("a, \"b, c\", d").unwrap()),
        vec![("a", None, None), ("\"b, c\"", None, None), ("d", None, None)]
    );
    assert_eq!(
        shape(&parse_expression("a?, b if c").unwrap()),
        vec![("a", None, Some("?")), ("b", None, Some("c"))]
    );
    assert_eq!(
        shape(&parse_expression("a, \"b, c\" if d, e").unwrap()),
        vec![
            ("a", None, None),
            ("\"b, c\"", None, Some("d")),
            ("e", None, None)
        ]
    );
}

#[test]
fn parse_keyed_sets() {
    let expr = parse_expression("a: b").unwrap();
    assert_eq!(shape(&expr), vec![("b", Some("a"), None)]);

    let expr = parse_expression("a: b, c: d").unwrap();
    assert_eq!(shape(&expr), vec![("b", Some("a"), None), ("d", Some("c"), None)]);
    assert!(is_keyed_set(&expr.items));
}

#[test]
fn parse_condition_with_call() {
    let expr = parse_expression("a if contains(b, 'foo')").unwrap();
    assert_eq!(shape(&expr), vec![("a", None, Some("contains(b, 'foo')"))]);
}

#[test]
fn reject_mixed_items() {
    let err = parse_expression("a: b, c").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MixedItemKinds { .. }));
    assert!(err.to_string().contains("a: b, c"));
}

#[test]
fn reject_unmatched_brace() {
    let err = tokenize("Dear {name,").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnmatchedBrace);
    assert_eq!(err.span.start, 5);
}

#[test]
fn normalized_conditions() {
    let expr = parse_expression("a?, b if c").unwrap();
    assert_eq!(
        expr.items[0].normalized_condition.as_deref(),
        Some("normalize-space(a)")
    );
    assert_eq!(expr.items[1].normalized_condition.as_deref(), Some("c"));
}

#[test]
fn extended_handling() {
    assert!(!requires_extended_handling(&tokenize("a {b, c} d").unwrap()));
    assert!(requires_extended_handling(&tokenize("a {b, c?} d").unwrap()));
    assert!(requires_extended_handling(&tokenize("{x: y}").unwrap()));
}

#[cfg(feature = "serde")]
#[test]
fn items_serialize_without_absent_fields() {
    let expr = parse_expression("a: b if c, d: e").unwrap();
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"value": "b", "key": "a", "condition": "c", "normalizedCondition": "c"},
            {"value": "e", "key": "d"}
        ])
    );

    let tokens = tokenize("a{b}c").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json, serde_json::json!(["a", [{"value": "b"}], "c"]));
}
