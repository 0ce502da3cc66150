use litmark::{html, Settings, TemplateCache, TemplateError, Value};
use std::sync::Arc;

#[test]
fn same_literals_share_template() {
    let literals = ["<p data-cache-test=\"", "\">", "</p>"];

    let first = html(&literals, vec!["a".into(), "b".into()]).unwrap();
    let second = html(&literals, vec!["c".into(), "d".into()]).unwrap();

    assert!(Arc::ptr_eq(first.template(), second.template()));
    assert_eq!(first.to_string(), r#"<p data-cache-test="a">b</p>"#);
    assert_eq!(second.to_string(), r#"<p data-cache-test="c">d</p>"#);
}

#[test]
fn owned_and_borrowed_literals_share_template() {
    let borrowed = ["<em class=cache-owned>", "</em>"];
    let owned = borrowed.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let first = html(&borrowed, vec!["x".into()]).unwrap();
    let second = html(&owned, vec!["y".into()]).unwrap();

    assert!(Arc::ptr_eq(first.template(), second.template()));
}

#[test]
fn different_literals_have_different_templates() {
    let first = html(&["<i>", "</i>"], vec!["x".into()]).unwrap();
    let second = html(&["<b>", "</b>"], vec!["x".into()]).unwrap();

    assert!(!Arc::ptr_eq(first.template(), second.template()));
}

#[test]
fn lenient_cache_fills_missing_values() {
    let cache = TemplateCache::new(Settings {
        strict: false,
        ..Settings::default()
    });

    let compiler = cache
        .html(&["<a href=\"", "\">", "</a>"], vec![Value::from("/")])
        .unwrap();

    assert_eq!(compiler.to_string(), r#"<a href="/"></a>"#);
}

#[test]
fn strict_cache_rejects_missing_values() {
    let cache = TemplateCache::default();

    let err = cache
        .html(&["<a href=\"", "\">", "</a>"], vec![Value::from("/")])
        .unwrap_err();

    assert_eq!(
        err,
        TemplateError::ValueCountMismatch {
            expected: 2,
            actual: 1
        }
    );

    // The template is still cached for later use.
    assert!(cache.contains(&["<a href=\"", "\">", "</a>"]));
}
