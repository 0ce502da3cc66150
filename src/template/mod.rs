mod attribute;
mod cache;
mod compiler;
mod fragment;
mod parser;
mod part;
mod skeleton;
mod value;

use self::parser::TemplateParser;
use crate::errors::TemplateError;
use crate::settings::MemorySettings;

pub use self::attribute::{Attribute, Quote};
pub use self::cache::TemplateCache;
pub use self::compiler::TemplateCompiler;
pub use self::fragment::Fragment;
pub use self::part::{ContentPart, Part, TagPart};
pub use self::skeleton::{split_placeholders, Skeleton};
pub use self::value::{Compile, Value};

/// A parsed template skeleton.
///
/// A template is built from the static text around interpolation points (the literals),
/// so `n` literals make room for `n - 1` values. The literals are tokenized once, on
/// construction, and the resulting [`Part`]s are reused for every compilation.
#[derive(Debug)]
pub struct Template {
    literals: Box<[Box<str>]>,
    parts: Vec<Part>,
    value_count: usize,
    output_size_hint: usize,
    is_parsed: bool,
}

impl Template {
    pub fn new<S: AsRef<str>>(literals: &[S]) -> Self {
        Self::with_settings(literals, &MemorySettings::default())
    }

    pub fn with_settings<S: AsRef<str>>(literals: &[S], settings: &MemorySettings) -> Self {
        let literals: Box<[Box<str>]> = literals.iter().map(|l| l.as_ref().into()).collect();
        let static_len = literals.iter().map(|l| l.len()).sum::<usize>();

        let mut template = Template {
            literals,
            parts: Vec::new(),
            value_count: 0,
            output_size_hint: static_len.max(settings.preallocated_output_size),
            is_parsed: false,
        };

        template.parse();

        template
    }

    fn parse(&mut self) {
        if self.is_parsed {
            return;
        }

        self.parts = TemplateParser::parse(&self.literals);
        self.value_count = self.parts.iter().map(Part::breaks).sum();
        self.is_parsed = true;
    }

    #[inline]
    pub fn literals(&self) -> &[Box<str>] {
        &self.literals
    }

    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of values the template has to be compiled with.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Returns `true` if the template has been created from no literals at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[inline]
    pub fn is_parsed(&self) -> bool {
        self.is_parsed
    }

    #[inline]
    pub fn output_size_hint(&self) -> usize {
        self.output_size_hint
    }

    pub fn check_value_count(&self, actual: usize) -> Result<(), TemplateError> {
        if actual == self.value_count {
            Ok(())
        } else {
            Err(TemplateError::ValueCountMismatch {
                expected: self.value_count,
                actual,
            })
        }
    }

    /// Renders the template with the given values.
    pub fn compile(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.output_size_hint);

        self.render_into(&mut output, values, true)?;

        Ok(output)
    }

    /// Pairs each part with the slice of values it consumes.
    pub fn parts_with_values<'t, 'a, 'v>(
        &'t self,
        values: &'a [Value<'v>],
    ) -> Result<Vec<(&'t Part, &'a [Value<'v>])>, TemplateError> {
        self.check_value_count(values.len())?;

        Ok(self.split_values(values))
    }

    pub(crate) fn split_values<'t, 'a, 'v>(
        &'t self,
        values: &'a [Value<'v>],
    ) -> Vec<(&'t Part, &'a [Value<'v>])> {
        let mut start = 0;

        self.parts
            .iter()
            .map(|part| {
                let end = (start + part.breaks()).min(values.len());
                let part_values = &values[start..end];

                start = end;

                (part, part_values)
            })
            .collect()
    }

    pub(crate) fn render_into(
        &self,
        output: &mut String,
        values: &[Value<'_>],
        strict: bool,
    ) -> Result<(), TemplateError> {
        if strict {
            self.check_value_count(values.len())?;
        }

        for (part, part_values) in self.split_values(values) {
            part.compile_into(output, part_values)?;
        }

        Ok(())
    }
}
