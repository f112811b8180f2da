//! Snapshot dumps of the token stream for a few realistic templates.

use std::fmt::Write;

use bracex_parse::{Token, tokenize};

fn dump(source: &str) -> String {
    let mut out = String::new();
    for token in tokenize(source).unwrap() {
        let span = token.span();
        match token {
            Token::Text { text, .. } => {
                writeln!(out, "text {}..{} {:?}", span.start, span.end, text).unwrap();
            }
            Token::Expression(expr) => {
                writeln!(out, "expr {}..{} {}", span.start, span.end, expr).unwrap();
                for item in &expr.items {
                    write!(out, "  value={:?}", item.value).unwrap();
                    if let Some(key) = item.key {
                        write!(out, " key={key:?}").unwrap();
                    }
                    if let Some(condition) = &item.normalized_condition {
                        write!(out, " condition={condition:?}").unwrap();
                    }
                    writeln!(out).unwrap();
                }
            }
        }
    }
    out
}

#[test]
fn greeting_with_fallbacks() {
    insta::assert_snapshot!(
        "greeting_with_fallbacks",
        dump("Dear {title?, name}, your order {id} ships {date if shipped}.")
    );
}

#[test]
fn keyed_link() {
    insta::assert_snapshot!(
        "keyed_link",
        dump("<a {href: url, title: label?, class: 'a, b' if active}>{text}</a>")
    );
}
