use litmark::{html, Compile, TemplateError, Value};

#[test]
fn nested_template_is_not_escaped() {
    let inner = html(&["<b>", "</b>"], vec!["<&>".into()]).unwrap();
    let outer = html(&["<p>", "</p>"], vec![inner.into()]).unwrap();

    assert_eq!(outer.to_string(), "<p><b>&lt;&amp;&gt;</b></p>");
}

#[test]
fn list_of_templates() {
    let items = ["one", "two & three"]
        .iter()
        .map(|item| html(&["<li>", "</li>"], vec![Value::from(*item)]))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let list = html(&["<ul>", "</ul>"], vec![items.into()]).unwrap();

    assert_eq!(
        list.to_string(),
        "<ul><li>one</li><li>two &amp; three</li></ul>"
    );
}

#[test]
fn nested_template_in_attribute_value_is_inserted_as_is() {
    let inner = html(&["<b>", "</b>"], vec!["x".into()]).unwrap();
    let outer = html(&["<p title=\"", "\"></p>"], vec![inner.into()]).unwrap();

    assert_eq!(outer.to_string(), r#"<p title="<b>x</b>"></p>"#);
}

#[test]
fn rebinding_values_keeps_output_valid() {
    let inner = html(&["<b>", "</b>"], vec!["x".into()]).unwrap();
    let mut outer = html(&["<p>", "</p>"], vec![inner.into()]).unwrap();

    assert!(outer.set_values(vec![]).is_err());
    assert_eq!(outer.to_string(), "<p><b>x</b></p>");

    outer.set_values(vec!["y".into()]).unwrap();

    assert_eq!(outer.to_string(), "<p>y</p>");
}

#[test]
fn unsupported_nested_value_is_rejected_eagerly() {
    let object = Value::from(serde_json::json!({ "a": 1 }));

    assert_eq!(
        html(&["<p>", "</p>"], vec![Value::from(vec![object])]).err(),
        Some(TemplateError::UnsupportedValue("object"))
    );
}

#[test]
fn deeply_nested_macro_templates() {
    let mut markup = html!("{}", "leaf").unwrap();

    for _ in 0..10 {
        markup = html!("<div>{}</div>", markup).unwrap();
    }

    let output = markup.compile().unwrap();

    assert_eq!(output, format!("{}leaf{}", "<div>".repeat(10), "</div>".repeat(10)));
}

#[test]
fn macro_with_attributes() {
    let checked = true;
    let input = html!(
        "<input type=checkbox name=\"{}\" {}>",
        "agree",
        if checked { "checked" } else { "" }
    )
    .unwrap();

    assert_eq!(input.to_string(), r#"<input type=checkbox name="agree" checked>"#);
}
