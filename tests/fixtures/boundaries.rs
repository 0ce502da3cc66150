use crate::harness::{
    attribute_name_starts, compile_with_blanks, random_positions, split_at_positions,
    STATIC_CORPUS,
};
use itertools::Itertools;
use litmark::{html, Part, Template, Value};

#[test]
fn unsplit_corpus_round_trips() {
    for source in STATIC_CORPUS {
        let literals = vec![source.to_string()];

        expect_eql!(
            compile_with_blanks(&literals),
            *source,
            literals,
            "Static template changed on compilation"
        );
    }
}

#[test]
fn split_at_every_boundary() {
    for source in STATIC_CORPUS {
        for (position, _) in source.char_indices().skip(1) {
            let literals = split_at_positions(source, &[position]);

            expect_eql!(
                compile_with_blanks(&literals),
                *source,
                literals,
                "Single split with blank value changed the output"
            );
        }
    }
}

#[test]
fn split_at_random_boundaries() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        for source in STATIC_CORPUS {
            let positions = random_positions(source, 8, &mut rng);
            let literals = split_at_positions(source, &positions);

            expect_eql!(
                compile_with_blanks(&literals),
                *source,
                literals,
                "Random splits with blank values changed the output"
            );
        }
    }
}

fn tag_attributes(template: &Template, values: &[Value<'_>]) -> Vec<(usize, Vec<(String, String)>)> {
    template
        .parts_with_values(values)
        .unwrap()
        .into_iter()
        .filter_map(|(part, values)| match part {
            Part::Tag(tag) => {
                let attrs = tag.attribute_values(values).unwrap().into_iter().sorted().collect();

                Some((tag.attributes().len(), attrs))
            }
            Part::Content(_) => None,
        })
        .collect()
}

#[test]
fn value_at_attribute_name_start_joins_the_name() {
    for source in STATIC_CORPUS {
        for position in attribute_name_starts(source) {
            let literals = split_at_positions(source, &[position]);
            let inserted = format!("{}q{}", &source[..position], &source[position..]);

            let split = Template::new(&literals);
            let whole = Template::new(&[inserted.as_str()]);
            let values = [Value::from("q")];

            expect_eql!(
                split.compile(&values).unwrap(),
                inserted,
                literals,
                "Value at attribute name start changed the output"
            );

            expect_eql!(
                tag_attributes(&split, &values),
                tag_attributes(&whole, &[]),
                literals,
                "Value at attribute name start changed the attributes"
            );
        }
    }
}

#[test]
fn attribute_name_starts_are_found() {
    let source = r#"<div class="a b" id=main data-x = 'y'>x</div>"#;

    assert_eq!(
        attribute_name_starts(source)
            .into_iter()
            .map(|pos| &source[pos..pos + 2])
            .collect::<Vec<_>>(),
        ["cl", "id", "da"]
    );
    assert!(attribute_name_starts("1 < 2 && 3 > 2").is_empty());
    assert!(attribute_name_starts("<!DOCTYPE html>").is_empty());
}

#[test]
fn split_inside_attribute_value() {
    let split = html(
        &["<div class=\"a", "b\">x</div>"],
        vec![Value::from("")],
    )
    .unwrap();

    let whole = html(&["<div class=\"ab\">x</div>"], vec![]).unwrap();

    assert_eq!(split.to_string(), whole.to_string());
    assert_eq!(split.to_string(), r#"<div class="ab">x</div>"#);
}

#[test]
fn omitted_value_in_split_attribute_value() {
    // A value sharing the attribute with static text never drops it.
    let compiler = html(
        &["<div class=\"a", "b\">x</div>"],
        vec![Value::Null],
    )
    .unwrap();

    assert_eq!(compiler.to_string(), r#"<div class="ab">x</div>"#);
}
