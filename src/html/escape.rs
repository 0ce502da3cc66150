use memchr::{memchr2, memchr3};
use std::borrow::Cow;

#[inline]
const fn replacement(ch: u8) -> &'static str {
    match ch {
        b'"' => "&quot;",
        b'&' => "&amp;",
        b'\'' => "&#x27;",
        b'<' => "&lt;",
        _ => "&gt;",
    }
}

/// Escapes `text` for use in HTML content or in a quoted attribute value, feeding the
/// escaped output to `output_handler` chunk by chunk.
///
/// The following characters are replaced:
///     - `"` with `&quot;`
///     - `&` with `&amp;`
///     - `'` with `&#x27;`
///     - `<` with `&lt;`
///     - `>` with `&gt;`
pub fn escape_html_with(text: &str, output_handler: &mut dyn FnMut(&str)) {
    let bytes = text.as_bytes();
    let mut pos = 0;

    // NOTE: memchr can search for at most three needles at once, so markup
    // characters and quotes are looked up separately. The last found position of
    // each search is kept until it's consumed to not rescan the same input.
    let mut next_markup = memchr3(b'<', b'>', b'&', bytes);
    let mut next_quote = memchr2(b'"', b'\'', bytes);

    loop {
        let found = match (next_markup, next_quote) {
            (Some(m), Some(q)) => Some(m.min(q)),
            (found, None) | (None, found) => found,
        };

        let Some(found) = found else {
            if pos < bytes.len() {
                output_handler(&text[pos..]);
            }

            break;
        };

        // NOTE: all the needles are ASCII, so `found` is always on a char boundary.
        if found > pos {
            output_handler(&text[pos..found]);
        }

        output_handler(replacement(bytes[found]));
        pos = found + 1;

        if next_markup == Some(found) {
            next_markup = memchr3(b'<', b'>', b'&', &bytes[pos..]).map(|p| p + pos);
        } else {
            next_quote = memchr2(b'"', b'\'', &bytes[pos..]).map(|p| p + pos);
        }
    }
}

/// Appends escaped `text` to `output`.
#[inline]
pub fn escape_html_into(text: &str, output: &mut String) {
    escape_html_with(text, &mut |chunk| output.push_str(chunk));
}

/// Escapes `text`, borrowing it if there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let needs_escaping = memchr3(b'<', b'>', b'&', text.as_bytes()).is_some()
        || memchr2(b'"', b'\'', text.as_bytes()).is_some();

    if needs_escaping {
        let mut escaped = String::with_capacity(text.len() + text.len() / 4);

        escape_html_into(text, &mut escaped);

        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(text)
    }
}
