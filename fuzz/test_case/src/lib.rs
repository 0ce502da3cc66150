use litmark::{html, tokenize_literals, LexEvent, Settings, TemplateCache, TokenizerState, Value};

static MARKUP: &[&str] = &[
    "<",
    "/>",
    "</",
    "\"",
    "\'",
    " = ",
    "=",
    "<p>",
    "</p>",
    "<br>",
    "<br/>",
    "<svg>",
    "<!--",
    "-->",
    "<!DOCTYPE html>",
    " = \"",
    "&amp;",
    "<p id=foo>",
    "<p foo=x>",
    "<p",
    "foo=BAR",
    "<a",
    "id=myid",
    "class='warning ",
    "class=\"",
    "       ",
    "\n\r\n\r\r\t",
    "/",
    ">",
];

fn get_byte(data: &mut &[u8]) -> u8 {
    let Some((first, rest)) = (*data).split_at_checked(1) else {
        return 1;
    };
    *data = rest;
    first[0]
}

fn get_string(data: &mut &[u8], min_len: usize) -> String {
    let len = min_len + (get_byte(data) % 16) as usize;
    let (slice, rest) = data.split_at(data.len().min(len));
    *data = rest;
    slice
        .iter()
        .map(|&b| {
            if b < 128 {
                b as char
            } else {
                char::from_u32(u32::from(b) * 33).unwrap_or('<')
            }
        })
        .collect()
}

fn get_source(data: &mut &[u8]) -> String {
    let mut source = String::new();

    for _ in 0..(get_byte(data) % 24) {
        let n = get_byte(data) as usize;

        if n & 1 == 0 {
            source.push_str(MARKUP[(n / 2) % MARKUP.len()]);
        } else {
            source.push_str(&get_string(data, 0));
        }
    }

    source
}

fn get_split_positions(data: &mut &[u8], source: &str) -> Vec<usize> {
    let boundaries = source.char_indices().map(|(i, _)| i).skip(1).collect::<Vec<_>>();

    if boundaries.is_empty() {
        return Vec::new();
    }

    let mut positions = (0..(get_byte(data) % 8))
        .map(|_| boundaries[get_byte(data) as usize % boundaries.len()])
        .collect::<Vec<_>>();

    positions.sort_unstable();
    positions
}

fn split_at_positions(source: &str, positions: &[usize]) -> Vec<String> {
    let mut literals = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;

    for &end in positions {
        literals.push(source[start..end].to_string());
        start = end;
    }

    literals.push(source[start..].to_string());
    literals
}

fn get_value(data: &mut &[u8], depth: usize) -> Value<'static> {
    match get_byte(data) % 9 {
        0 => Value::Null,
        1 => Value::Bool(false),
        2 => Value::Bool(true),
        3 => Value::from(i64::from(get_byte(data)) - 128),
        4 => Value::from(f64::from(get_byte(data)) / 7.0),
        5 => Value::from(get_string(data, 0)),
        6 => Value::from(MARKUP[get_byte(data) as usize % MARKUP.len()]),
        7 if depth < 3 => (0..(get_byte(data) % 4))
            .map(|_| get_value(data, depth + 1))
            .collect(),
        8 if depth < 3 => {
            let value = get_value(data, depth + 1);

            match html(&["<b class=\"", "\"></b>"], vec![value]) {
                Ok(compiler) => compiler.into(),
                Err(_) => Value::Null,
            }
        }
        _ => Value::from(""),
    }
}

/// State of the last token of the source: `Content` if every tag of the source is closed.
fn final_state(source: &str) -> TokenizerState {
    let mut last = TokenizerState::Content;

    tokenize_literals(&[source], |event| {
        if let LexEvent::Token { state, .. } = event {
            last = state;
        }
    });

    last
}

/// Compiles random templates with random values, nothing should panic.
pub fn run_template(mut data: &[u8]) {
    let settings = get_byte(&mut data);
    let source = get_source(&mut data);
    let positions = get_split_positions(&mut data, &source);
    let literals = split_at_positions(&source, &positions);
    let value_count = literals.len() - 1 + usize::from(settings & 2 == 0);

    let values = (0..value_count)
        .map(|_| get_value(&mut data, 0))
        .collect::<Vec<_>>();

    let cache = TemplateCache::new(Settings {
        strict: settings & 1 == 0,
        ..Settings::default()
    });

    if let Ok(compiler) = cache.html(&literals, values) {
        let _ = compiler.compile();
        let _ = compiler.parts_with_values();
    }
}

/// Splits random sources and checks that blank values reproduce them.
pub fn run_boundaries(mut data: &[u8]) {
    let source = get_source(&mut data);

    if final_state(&source) != TokenizerState::Content {
        return;
    }

    let positions = get_split_positions(&mut data, &source);
    let literals = split_at_positions(&source, &positions);
    let values = (1..literals.len()).map(|_| Value::from("")).collect();

    let output = html(&literals, values)
        .and_then(|compiler| compiler.compile())
        .unwrap();

    assert_eq!(output, source, "literals: {literals:?}");
}
