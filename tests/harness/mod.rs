macro_rules! expect_eql {
    ($actual:expr, $expected:expr, $literals:expr, $msg:expr) => {
        match (&$actual, &$expected) {
            (actual, expected) => assert!(
                actual == expected,
                "{}\n\
                 literals: {:?}\n\
                 actual: {:#?}\n\
                 expected: {:#?}",
                $msg,
                $literals,
                actual,
                expected,
            ),
        }
    };
}

pub mod suite;

use itertools::Itertools;
use litmark::{html, Value};
use rand::Rng;

/// Well-formed documents: every tag is closed and every quote is balanced.
pub static STATIC_CORPUS: &[&str] = &[
    "",
    "Hello, world!",
    "<p>text</p>",
    r#"<div class="a b" id=main data-x = 'y'>x</div>"#,
    "<input type=checkbox checked disabled><br/><hr />",
    "<!DOCTYPE html><html><!-- comment --><body></body></html>",
    "1 < 2 && 3 > 2",
    "<a href=/path/to/page>link</a>",
    "<svg viewBox=\"0 0 10 10\"><path d='M0 0L10 10'/></svg>",
    "<p\n  class=\"multi\n line\"\n>\n</p >",
    "<a / b c=d /e>",
    "<ul><li>один</li><li>два ☃</li></ul>",
];

/// Splits `source` at the given byte positions.
pub fn split_at_positions(source: &str, positions: &[usize]) -> Vec<String> {
    std::iter::once(0)
        .chain(positions.iter().copied())
        .chain(std::iter::once(source.len()))
        .tuple_windows()
        .map(|(start, end)| source[start..end].to_string())
        .collect()
}

/// Picks up to `max_count` sorted, distinct char boundaries of `source` (duplicates allowed).
pub fn random_positions(source: &str, max_count: usize, rng: &mut impl Rng) -> Vec<usize> {
    let boundaries = source.char_indices().map(|(i, _)| i).skip(1).collect::<Vec<_>>();

    if boundaries.is_empty() {
        return Vec::new();
    }

    let count = rng.gen_range(0..=max_count);

    (0..count)
        .map(|_| boundaries[rng.gen_range(0..boundaries.len())])
        .sorted()
        .collect()
}

/// Compiles the literals with an empty string for each gap between them.
pub fn compile_with_blanks(literals: &[String]) -> String {
    let values = (1..literals.len()).map(|_| Value::from("")).collect();

    html(literals, values).unwrap().to_string()
}

/// Byte positions where an attribute name starts after whitespace inside a start or end tag.
pub fn attribute_name_starts(source: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut in_tag = false;
    let mut quote = None;
    let mut after_equals = false;
    let mut prev = ' ';

    for (pos, ch) in source.char_indices() {
        if !in_tag {
            let next = source[pos..].chars().nth(1);

            in_tag = ch == '<' && next.is_some_and(|c| c == '/' || c.is_ascii_alphabetic());
        } else if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
        } else {
            match ch {
                '>' => in_tag = false,
                '=' => after_equals = true,
                '"' | '\'' if after_equals => {
                    quote = Some(ch);
                    after_equals = false;
                }
                ch if ch.is_ascii_whitespace() => (),
                '/' => after_equals = false,
                _ if after_equals => after_equals = false,
                _ if prev.is_ascii_whitespace() => positions.push(pos),
                _ => (),
            }
        }

        prev = ch;
    }

    positions
}
