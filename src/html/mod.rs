mod escape;

pub use self::escape::{escape_html, escape_html_into, escape_html_with};
