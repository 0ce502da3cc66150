use litmark::{html, Part, Template, Value};

fn tags(template: &Template) -> Vec<&litmark::TagPart> {
    template.parts().iter().filter_map(Part::as_tag).collect()
}

#[test]
fn parts_are_paired_with_their_values() {
    let compiler = html(
        &["<a href=\"", "\" title='", "'>", "</a>"],
        vec!["/".into(), "t".into(), "x".into()],
    )
    .unwrap();

    let parts = compiler.parts_with_values().unwrap();
    let value_counts = parts.iter().map(|(_, values)| values.len()).collect::<Vec<_>>();

    assert_eq!(value_counts.iter().sum::<usize>(), 3);
    assert!(parts[0].0.is_tag());
    assert_eq!(parts[0].1.len(), 2);
    assert!(parts.iter().any(|(part, values)| part.is_content() && values.len() == 1));
}

#[test]
fn attribute_values_of_tag() {
    let compiler = html(
        &["<IMG SRC=\"", "\" alt=x Alt=y data-", "=1 hidden=", ">"],
        vec!["/i.png".into(), "id".into(), Value::Null],
    )
    .unwrap();

    let parts = compiler.parts_with_values().unwrap();
    let (part, values) = parts[0];
    let tag = part.as_tag().unwrap();
    let attrs = tag.attribute_values(values).unwrap();

    assert_eq!(tag.tag_name().as_deref(), Some("img"));
    assert_eq!(attrs.get("src").map(String::as_str), Some("/i.png"));
    assert_eq!(attrs.get("alt").map(String::as_str), Some("x"));
    assert_eq!(attrs.get("data-id").map(String::as_str), Some("1"));
    assert!(!attrs.contains_key("hidden"));
    assert_eq!(attrs.len(), 3);
}

#[test]
fn end_and_self_closed_tags() {
    let template = Template::new(&["<br/><p>", "</p><my-el />"]);
    let tags = tags(&template);

    assert_eq!(tags.len(), 4);
    assert!(tags[0].is_self_closed_tag());
    assert!(!tags[0].is_end_tag());
    assert!(!tags[1].is_self_closed_tag());
    assert!(tags[2].is_end_tag());
    assert_eq!(tags[2].tag_name().as_deref(), Some("p"));
    assert!(tags[3].is_self_closed_tag());
    assert_eq!(tags[3].trailing(), " ");
}

#[test]
fn tag_name_from_value() {
    let template = Template::new(&["<", " class=x>"]);
    let tags = tags(&template);

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].tag_name(), None);
    assert_eq!(
        tags[0].resolve_tag_name(&[Value::from("section")]).unwrap(),
        "section"
    );
}

#[test]
fn static_tag_keeps_raw_text() {
    let template = Template::new(&["<a  HREF = '/x' >"]);
    let tags = tags(&template);

    assert_eq!(tags[0].raw(), "<a  HREF = '/x' >");
    assert_eq!(tags[0].breaks(), 0);
    assert_eq!(tags[0].attributes()[0].static_name().as_deref(), Some("href"));
}
