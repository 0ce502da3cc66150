use super::part::Part;
use super::value::{check_values, Compile, Value};
use super::Template;
use crate::errors::TemplateError;
use std::fmt::{self, Display};
use std::sync::Arc;

/// A template instantiated with values, ready to be compiled.
#[derive(Debug)]
pub struct TemplateCompiler<'v> {
    template: Arc<Template>,
    values: Vec<Value<'v>>,
    strict: bool,
}

impl<'v> TemplateCompiler<'v> {
    /// Pairs the template with values, checking their number and kinds.
    pub fn new(template: Arc<Template>, values: Vec<Value<'v>>) -> Result<Self, TemplateError> {
        TemplateCompiler::with_strictness(template, values, true)
    }

    /// In lenient mode missing values are rendered as null and extra values are ignored.
    pub(crate) fn with_strictness(
        template: Arc<Template>,
        values: Vec<Value<'v>>,
        strict: bool,
    ) -> Result<Self, TemplateError> {
        check_values(&values)?;

        if strict {
            template.check_value_count(values.len())?;
        }

        Ok(TemplateCompiler {
            template,
            values,
            strict,
        })
    }

    #[inline]
    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    #[inline]
    pub fn values(&self) -> &[Value<'v>] {
        &self.values
    }

    /// Replaces the values the template is compiled with. The values are checked the same
    /// way as on construction, the previous values are kept if the check fails.
    pub fn set_values(&mut self, values: Vec<Value<'v>>) -> Result<(), TemplateError> {
        check_values(&values)?;

        if self.strict {
            self.template.check_value_count(values.len())?;
        }

        self.values = values;

        Ok(())
    }

    #[inline]
    pub fn into_values(self) -> Vec<Value<'v>> {
        self.values
    }

    /// Returns `true` if the underlying template has no literals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Pairs each part of the template with the values it consumes.
    pub fn parts_with_values(&self) -> Result<Vec<(&Part, &[Value<'v>])>, TemplateError> {
        if self.strict {
            self.template.parts_with_values(&self.values)
        } else {
            Ok(self.template.split_values(&self.values))
        }
    }

    /// Renders the HTML.
    pub fn compile(&self) -> Result<String, TemplateError> {
        Compile::compile(self)
    }
}

impl Compile for TemplateCompiler<'_> {
    fn compile_into(&self, output: &mut String) -> Result<(), TemplateError> {
        output.reserve(self.template.output_size_hint());

        self.template.render_into(output, &self.values, self.strict)
    }
}

/// Values are checked when they are bound, so only a failing third-party [`Compile`]
/// implementation nested in the values can make formatting fail. Use
/// [`TemplateCompiler::compile`] to handle such errors instead of panicking in `to_string()`.
impl Display for TemplateCompiler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.compile().map_err(|_| fmt::Error)?;

        f.write_str(&html)
    }
}

impl<'v> From<TemplateCompiler<'v>> for Value<'v> {
    #[inline]
    fn from(compiler: TemplateCompiler<'v>) -> Self {
        Value::Markup(Box::new(compiler))
    }
}
