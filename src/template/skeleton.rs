use super::compiler::TemplateCompiler;
use super::value::Value;
use super::Template;
use crate::errors::TemplateError;
use std::sync::{Arc, OnceLock};

/// Splits a format string into template literals at `{}` placeholders.
///
/// `{{` and `}}` produce literal braces. Any other brace is kept as is.
pub fn split_placeholders(source: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut current = String::new();
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, chars.peek().copied()) {
            ('{', Some('}')) => {
                chars.next();
                literals.push(std::mem::take(&mut current));
            }
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    literals.push(current);

    literals
}

/// A template source bound to a call site.
///
/// The template is parsed on first use and kept for the lifetime of the skeleton. The
/// [`html!`] macro declares a `static` skeleton for each invocation.
///
/// [`html!`]: crate::html!
pub struct Skeleton {
    source: &'static str,
    template: OnceLock<Arc<Template>>,
}

impl Skeleton {
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        Skeleton {
            source,
            template: OnceLock::new(),
        }
    }

    #[inline]
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn template(&self) -> &Arc<Template> {
        self.template
            .get_or_init(|| Arc::new(Template::new(&split_placeholders(self.source))))
    }

    /// Instantiates the template with the values, checking their number.
    pub fn compiler<'v>(
        &self,
        values: Vec<Value<'v>>,
    ) -> Result<TemplateCompiler<'v>, TemplateError> {
        TemplateCompiler::new(Arc::clone(self.template()), values)
    }
}
