use super::fragment::{count_external, next_value, push_static, static_text, Fragment};
use super::value::{prepare_attribute_value, prepare_node_value, Value};
use crate::errors::TemplateError;

/// Quotes around an attribute value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Quote {
    #[default]
    None,
    Double,
    Single,
}

impl Quote {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Quote::None => "",
            Quote::Double => "\"",
            Quote::Single => "'",
        }
    }
}

/// An attribute of a tag along with the formatting it was written with.
///
/// Compiles to `before_name` + name + `after_name` + `before_value` + value + closing quote,
/// where `after_name` holds `=` and `before_value` holds the opening quote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attribute {
    before_name: String,
    name: Vec<Fragment>,
    after_name: String,
    before_value: String,
    value: Vec<Fragment>,
    quote: Quote,
}

impl Attribute {
    pub(crate) fn new(before_name: &str) -> Self {
        Attribute {
            before_name: before_name.to_string(),
            ..Attribute::default()
        }
    }

    #[inline]
    pub fn before_name(&self) -> &str {
        &self.before_name
    }

    #[inline]
    pub fn name(&self) -> &[Fragment] {
        &self.name
    }

    #[inline]
    pub fn after_name(&self) -> &str {
        &self.after_name
    }

    #[inline]
    pub fn before_value(&self) -> &str {
        &self.before_value
    }

    #[inline]
    pub fn value(&self) -> &[Fragment] {
        &self.value
    }

    #[inline]
    pub fn quote(&self) -> Quote {
        self.quote
    }

    /// Returns `true` if the attribute is followed by `=`.
    #[inline]
    pub fn has_value(&self) -> bool {
        !self.after_name.is_empty()
    }

    /// Lowercased name of the attribute, unless it's provided by a value.
    pub fn static_name(&self) -> Option<String> {
        static_text(&self.name).map(|name| name.to_ascii_lowercase())
    }

    #[inline]
    pub fn name_breaks(&self) -> usize {
        count_external(&self.name)
    }

    /// Number of values consumed by the attribute.
    #[inline]
    pub fn breaks(&self) -> usize {
        self.name_breaks() + count_external(&self.value)
    }

    /// Returns `true` if the attribute should be dropped from the output given its values:
    /// either the whole name or the whole value is a single value placeholder and that value
    /// is null or `false`.
    pub fn is_skipped(&self, values: &[Value<'_>]) -> bool {
        let is_omitted = |value: Option<&Value<'_>>| value.map_or(true, Value::is_omitted);

        let nameless = matches!(self.name.as_slice(), [Fragment::External])
            && is_omitted(values.first());

        let valueless = matches!(self.value.as_slice(), [Fragment::External])
            && is_omitted(values.get(self.name_breaks()));

        nameless || valueless
    }

    /// Renders the name of the attribute.
    pub fn resolve_name(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut name = String::new();

        self.compile_name(&mut name, &mut values.iter())?;

        Ok(name)
    }

    /// Renders the value of the attribute without quotes. Attributes without
    /// a value resolve to an empty string.
    pub fn resolve_value(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut value = String::new();
        let mut values = values.iter().skip(self.name_breaks());

        self.compile_value(&mut value, &mut values)?;

        Ok(value)
    }

    /// Renders the attribute with its formatting, unless it's skipped.
    pub fn compile(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut output = String::new();

        if !self.is_skipped(values) {
            self.compile_into(&mut output, values)?;
        }

        Ok(output)
    }

    pub(crate) fn compile_into(
        &self,
        output: &mut String,
        values: &[Value<'_>],
    ) -> Result<(), TemplateError> {
        let mut values = values.iter();

        output.push_str(&self.before_name);
        self.compile_name(output, &mut values)?;
        output.push_str(&self.after_name);
        output.push_str(&self.before_value);
        self.compile_value(output, &mut values)?;
        output.push_str(self.quote.as_str());

        Ok(())
    }

    fn compile_name<'a, 'v: 'a>(
        &self,
        output: &mut String,
        values: &mut impl Iterator<Item = &'a Value<'v>>,
    ) -> Result<(), TemplateError> {
        for fragment in &self.name {
            match fragment {
                Fragment::Static(text) => output.push_str(text),
                Fragment::External => prepare_node_value(output, next_value(values))?,
            }
        }

        Ok(())
    }

    fn compile_value<'a, 'v: 'a>(
        &self,
        output: &mut String,
        values: &mut impl Iterator<Item = &'a Value<'v>>,
    ) -> Result<(), TemplateError> {
        for fragment in &self.value {
            match fragment {
                Fragment::Static(text) => output.push_str(text),
                Fragment::External => {
                    if let Some(value) = prepare_attribute_value(next_value(values))? {
                        output.push_str(&value);
                    }
                }
            }
        }

        Ok(())
    }

    /// An attribute that has been started by whitespace, but got neither a name nor a value.
    pub(crate) fn is_blank(&self) -> bool {
        self.name.is_empty() && self.after_name.is_empty() && self.value.is_empty()
    }

    /// The name ends with a value placeholder and nothing followed it yet, so text
    /// resumed right after the placeholder continues the same attribute.
    pub(crate) fn ends_with_name_break(&self) -> bool {
        matches!(self.name.last(), Some(Fragment::External))
            && self.after_name.is_empty()
            && self.value.is_empty()
    }

    #[inline]
    pub(crate) fn push_before_name(&mut self, text: &str) {
        self.before_name.push_str(text);
    }

    pub(crate) fn take_before_name(&mut self) -> String {
        std::mem::take(&mut self.before_name)
    }

    #[inline]
    pub(crate) fn push_name(&mut self, text: &str) {
        push_static(&mut self.name, text);
    }

    #[inline]
    pub(crate) fn add_name_break(&mut self) {
        self.name.push(Fragment::External);
    }

    #[inline]
    pub(crate) fn push_after_name(&mut self, text: &str) {
        self.after_name.push_str(text);
    }

    pub(crate) fn push_before_value(&mut self, text: &str) {
        self.before_value.push_str(text);

        self.quote = match text.as_bytes().last() {
            Some(b'"') => Quote::Double,
            Some(b'\'') => Quote::Single,
            _ => self.quote,
        };
    }

    #[inline]
    pub(crate) fn set_quote(&mut self, quote: Quote) {
        self.quote = quote;
    }

    #[inline]
    pub(crate) fn push_value(&mut self, text: &str) {
        push_static(&mut self.value, text);
    }

    #[inline]
    pub(crate) fn add_value_break(&mut self) {
        self.value.push(Fragment::External);
    }
}
