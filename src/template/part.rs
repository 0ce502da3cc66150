use super::attribute::Attribute;
use super::fragment::{count_external, next_value, push_static, static_text, Fragment};
use super::value::{prepare_node_value, Value};
use crate::errors::TemplateError;
use hashbrown::HashMap;

/// A run of text between tags.
///
/// Holds one more string than the number of values it consumes: values are
/// interleaved with the strings on compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPart {
    strings: Vec<String>,
}

impl Default for ContentPart {
    #[inline]
    fn default() -> Self {
        ContentPart {
            strings: vec![String::new()],
        }
    }
}

impl ContentPart {
    #[inline]
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    #[inline]
    pub fn breaks(&self) -> usize {
        self.strings.len() - 1
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        if let Some(last) = self.strings.last_mut() {
            last.push_str(text);
        }
    }

    #[inline]
    pub(crate) fn add_break(&mut self) {
        self.strings.push(String::new());
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self.strings.as_slice(), [s] if s.is_empty())
    }

    fn compile_into(&self, output: &mut String, values: &[Value<'_>]) -> Result<(), TemplateError> {
        let mut values = values.iter();

        for (idx, string) in self.strings.iter().enumerate() {
            output.push_str(string);

            if idx < self.breaks() {
                prepare_node_value(output, next_value(&mut values))?;
            }
        }

        Ok(())
    }
}

/// A start or end tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagPart {
    raw: String,
    name: Vec<Fragment>,
    attributes: Vec<Attribute>,
    trailing: String,
    self_closing: bool,
    end_tag: bool,
    closed: bool,
}

impl TagPart {
    pub(crate) fn new(tag_open: &str) -> Self {
        TagPart {
            raw: tag_open.to_string(),
            end_tag: tag_open == "</",
            ..TagPart::default()
        }
    }

    /// Static source text of the tag.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn name(&self) -> &[Fragment] {
        &self.name
    }

    /// Lowercased tag name, unless it's provided by a value.
    pub fn tag_name(&self) -> Option<String> {
        static_text(&self.name).map(|name| name.to_ascii_lowercase())
    }

    /// Renders the tag name.
    pub fn resolve_tag_name(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut name = String::new();
        let mut values = values.iter();

        self.compile_name(&mut name, &mut values)?;

        Ok(name)
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whitespace between the last attribute and the end of the tag.
    #[inline]
    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    #[inline]
    pub fn is_self_closed_tag(&self) -> bool {
        self.self_closing
    }

    #[inline]
    pub fn is_end_tag(&self) -> bool {
        self.end_tag
    }

    #[inline]
    pub fn breaks(&self) -> usize {
        count_external(&self.name) + self.attributes.iter().map(Attribute::breaks).sum::<usize>()
    }

    /// Resolves attribute names and values of the tag.
    ///
    /// Names are lowercased and, for duplicate attributes, the first occurrence wins.
    /// Skipped attributes are not included.
    pub fn attribute_values(
        &self,
        values: &[Value<'_>],
    ) -> Result<HashMap<String, String>, TemplateError> {
        let mut map = HashMap::with_capacity(self.attributes.len());

        for (attr, values) in self.attributes_with_values(values) {
            if attr.is_skipped(values) {
                continue;
            }

            let name = attr.resolve_name(values)?.to_ascii_lowercase();

            if !map.contains_key(&name) {
                let value = attr.resolve_value(values)?;

                map.insert(name, value);
            }
        }

        Ok(map)
    }

    fn attributes_with_values<'a, 'v>(
        &'a self,
        values: &'a [Value<'v>],
    ) -> impl Iterator<Item = (&'a Attribute, &'a [Value<'v>])> + 'a {
        let mut start = count_external(&self.name).min(values.len());

        self.attributes.iter().map(move |attr| {
            let end = (start + attr.breaks()).min(values.len());
            let attr_values = &values[start..end];

            start = end;

            (attr, attr_values)
        })
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

    fn compile_into(&self, output: &mut String, values: &[Value<'_>]) -> Result<(), TemplateError> {
        if self.breaks() == 0 {
            output.push_str(&self.raw);

            return Ok(());
        }

        output.push_str(if self.end_tag { "</" } else { "<" });
        self.compile_name(output, &mut values.iter())?;

        for (attr, values) in self.attributes_with_values(values) {
            if !attr.is_skipped(values) {
                attr.compile_into(output, values)?;
            }
        }

        output.push_str(&self.trailing);

        if self.self_closing {
            output.push('/');
        }

        // NOTE: only the last tag of a template can be left open.
        if self.closed {
            output.push('>');
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn push_raw(&mut self, text: &str) {
        self.raw.push_str(text);
    }

    #[inline]
    pub(crate) fn into_raw(self) -> String {
        self.raw
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
    pub(crate) fn set_self_closing(&mut self, self_closing: bool) {
        self.self_closing = self_closing;
    }

    /// Starts a new attribute. Whitespace and solidi that didn't lead to an attribute
    /// are accumulated in a blank attribute until it gets a name.
    pub(crate) fn start_attribute(&mut self, before_name: &str) {
        match self.attributes.last_mut() {
            // NOTE: empty text right after a name placeholder is where a literal resumed.
            Some(attr)
                if before_name.is_empty() && !self.self_closing && attr.ends_with_name_break() =>
            {
                return;
            }
            Some(attr) if attr.is_blank() => {
                // NOTE: a solidus that isn't followed by `>` doesn't make the tag self-closing.
                if self.self_closing {
                    attr.push_before_name("/");
                }

                attr.push_before_name(before_name);
            }
            _ => {
                let mut attr = Attribute::new("");

                if self.self_closing {
                    attr.push_before_name("/");
                }

                attr.push_before_name(before_name);
                self.attributes.push(attr);
            }
        }

        self.self_closing = false;
    }

    pub(crate) fn current_attribute_mut(&mut self) -> &mut Attribute {
        if self.attributes.is_empty() {
            self.attributes.push(Attribute::default());
        }

        let last = self.attributes.len() - 1;

        &mut self.attributes[last]
    }

    /// Ends the tag with `>`.
    pub(crate) fn close(&mut self, tag_close: &str) {
        self.push_raw(tag_close);
        self.closed = true;
        self.finish();
    }

    /// Drops the attribute that never got a name or a value, keeping its leading
    /// whitespace as the trailing whitespace of the tag.
    pub(crate) fn finish(&mut self) {
        if let Some(attr) = self.attributes.last_mut() {
            if attr.is_blank() {
                self.trailing = attr.take_before_name();
                self.attributes.pop();
            }
        }
    }
}

/// A unit of a parsed template: either a tag or the content between tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Content(ContentPart),
    Tag(TagPart),
}

impl Part {
    #[inline]
    pub fn is_tag(&self) -> bool {
        matches!(self, Part::Tag(_))
    }

    #[inline]
    pub fn is_content(&self) -> bool {
        matches!(self, Part::Content(_))
    }

    #[inline]
    pub fn as_tag(&self) -> Option<&TagPart> {
        match self {
            Part::Tag(tag) => Some(tag),
            Part::Content(_) => None,
        }
    }

    /// Number of values consumed by the part.
    #[inline]
    pub fn breaks(&self) -> usize {
        match self {
            Part::Content(content) => content.breaks(),
            Part::Tag(tag) => tag.breaks(),
        }
    }

    /// Renders the part with its own slice of the template values.
    pub fn compile(&self, values: &[Value<'_>]) -> Result<String, TemplateError> {
        let mut output = String::new();

        self.compile_into(&mut output, values)?;

        Ok(output)
    }

    pub fn compile_into(
        &self,
        output: &mut String,
        values: &[Value<'_>],
    ) -> Result<(), TemplateError> {
        match self {
            Part::Content(content) => content.compile_into(output, values),
            Part::Tag(tag) => tag.compile_into(output, values),
        }
    }
}
