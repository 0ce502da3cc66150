//! litmark compiles HTML templates made of static literals and interpolated values.
//!
//! A template is tokenized once per skeleton (the sequence of its literals) and the
//! resulting parts are reused by every instantiation. Values are escaped according to the
//! place they are interpolated into: text content, attribute values, attribute names or
//! tag names. Nested templates are inserted as is.
//!
//! ```
//! use litmark::html;
//!
//! let items = ["<one>", "two"];
//! let list = html!(
//!     "<ul class=\"{}\">{}</ul>",
//!     "list",
//!     items
//!         .iter()
//!         .map(|item| html!("<li>{}</li>", *item))
//!         .collect::<Result<Vec<_>, _>>()?
//! )?;
//!
//! assert_eq!(
//!     list.to_string(),
//!     r#"<ul class="list"><li>&lt;one&gt;</li><li>two</li></ul>"#
//! );
//! # Ok::<(), litmark::TemplateError>(())
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod errors;
mod html;
mod settings;
mod template;
mod tokenizer;

pub use self::base::Range;
pub use self::errors::TemplateError;
pub use self::html::{escape_html, escape_html_into, escape_html_with};
pub use self::settings::{MemorySettings, Settings};
pub use self::template::{
    split_placeholders, Attribute, Compile, ContentPart, Fragment, Part, Quote, Skeleton,
    TagPart, Template, TemplateCache, TemplateCompiler, Value,
};
pub use self::tokenizer::{tokenize_literals, HtmlTokenizer, LexEvent, Token, TokenizerState};

/// Instantiates a template with the process-wide [`TemplateCache`].
///
/// `n` literals take `n - 1` values, or `n` values if the template ends with a value.
///
/// ```
/// use litmark::html;
///
/// let page = html(&["<a href=\"", "\">", "</a>"], vec!["/home".into(), "Home".into()])?;
///
/// assert_eq!(page.to_string(), r#"<a href="/home">Home</a>"#);
/// # Ok::<(), litmark::TemplateError>(())
/// ```
pub fn html<'v, S: AsRef<str>>(
    literals: &[S],
    values: Vec<Value<'v>>,
) -> Result<TemplateCompiler<'v>, TemplateError> {
    TemplateCache::global().html(literals, values)
}

/// Instantiates a template written as a format string with `{}` placeholders.
///
/// The template is parsed on first use of each invocation site. Evaluates to
/// `Result<TemplateCompiler, TemplateError>`.
///
/// ```
/// use litmark::html;
///
/// let link = html!("<a href=\"{}\" hidden={}>{}</a>", "/x?a=1&b=2", false, "<x>")?;
///
/// assert_eq!(link.to_string(), r#"<a href="/x?a=1&amp;b=2">&lt;x&gt;</a>"#);
/// # Ok::<(), litmark::TemplateError>(())
/// ```
#[macro_export]
macro_rules! html {
    ($source:literal $(, $value:expr)* $(,)?) => {{
        static SKELETON: $crate::Skeleton = $crate::Skeleton::new($source);

        SKELETON.compiler(::std::vec![$($crate::Value::from($value)),*])
    }};
}
