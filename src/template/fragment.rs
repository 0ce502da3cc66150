use super::value::Value;

/// A piece of a tag name, an attribute name or an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text taken from the template literals.
    Static(String),
    /// A placeholder for a value provided on instantiation.
    External,
}

impl Fragment {
    #[inline]
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Fragment::External)
    }
}

pub(crate) fn push_static(fragments: &mut Vec<Fragment>, text: &str) {
    if text.is_empty() {
        return;
    }

    if let Some(Fragment::Static(last)) = fragments.last_mut() {
        last.push_str(text);
    } else {
        fragments.push(Fragment::Static(text.to_string()));
    }
}

#[inline]
pub(crate) fn count_external(fragments: &[Fragment]) -> usize {
    fragments.iter().filter(|f| f.is_external()).count()
}

/// Returns the text of the fragments if none of them is external.
pub(crate) fn static_text(fragments: &[Fragment]) -> Option<String> {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Static(text) => Some(text.as_str()),
            Fragment::External => None,
        })
        .collect()
}

static NULL: Value<'static> = Value::Null;

/// Takes the next value for an external fragment. Missing values are only possible
/// in lenient mode and are treated as null.
#[inline]
pub(crate) fn next_value<'a, 'v>(values: &mut impl Iterator<Item = &'a Value<'v>>) -> &'a Value<'v> {
    values.next().unwrap_or(&NULL)
}
