use crate::errors::TemplateError;
use crate::html::{escape_html, escape_html_into};
use cfg_if::cfg_if;
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// Something that renders to HTML and can be inserted into a template without escaping.
///
/// Implemented by [`TemplateCompiler`], which makes templates nestable.
///
/// [`TemplateCompiler`]: crate::TemplateCompiler
pub trait Compile {
    /// Appends the rendered HTML to `output`.
    fn compile_into(&self, output: &mut String) -> Result<(), TemplateError>;

    /// Renders the HTML into a new string.
    fn compile(&self) -> Result<String, TemplateError> {
        let mut output = String::new();

        self.compile_into(&mut output)?;

        Ok(output)
    }
}

/// A value interpolated into a template.
pub enum Value<'v> {
    /// Renders as nothing. Omits an attribute if it's the attribute's only value.
    Null,
    /// Renders as `true` or `false`. `false` omits an attribute if it's the attribute's
    /// only value.
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Text. Always escaped.
    Str(Cow<'v, str>),
    /// Items are rendered one after another in content and joined with `,` in attribute values.
    List(Vec<Value<'v>>),
    /// Nested markup inserted as is.
    Markup(Box<dyn Compile + Send + Sync + 'v>),
    /// JSON object. Can't be rendered.
    #[cfg(feature = "json")]
    Object(serde_json::Map<String, serde_json::Value>),
}

impl<'v> Value<'v> {
    /// Collects items of an iterator into a [`Value::List`].
    pub fn iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'v>>,
    {
        items.into_iter().collect()
    }

    /// Wraps nested markup.
    pub fn markup(markup: impl Compile + Send + Sync + 'v) -> Self {
        Value::Markup(Box::new(markup))
    }

    /// Returns `true` for values that cause an attribute to be dropped.
    #[inline]
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Value::Null | Value::Bool(false))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Markup(_) => "markup",
            #[cfg(feature = "json")]
            Value::Object(_) => "object",
        }
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Markup(_) => f.write_str("Markup(..)"),
            #[cfg(feature = "json")]
            Value::Object(map) => f.debug_tuple("Object").field(map).finish(),
        }
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // NOTE: covers negative zero as well.
        "0".into()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");

        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

/// Renders a value in HTML content.
pub(crate) fn prepare_node_value(output: &mut String, value: &Value<'_>) -> Result<(), TemplateError> {
    match value {
        Value::Null => (),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => output.push_str(&n.to_string()),
        Value::Float(n) => output.push_str(&number_to_string(*n)),
        Value::Str(s) => escape_html_into(s, output),
        Value::List(items) => {
            for item in items {
                prepare_node_value(output, item)?;
            }
        }
        Value::Markup(markup) => markup.compile_into(output)?,
        #[cfg(feature = "json")]
        Value::Object(_) => return Err(TemplateError::UnsupportedValue(value.kind())),
    }

    Ok(())
}

/// Renders a value in an attribute value. Returns `None` if the value should be omitted.
pub(crate) fn prepare_attribute_value<'a>(
    value: &'a Value<'_>,
) -> Result<Option<Cow<'a, str>>, TemplateError> {
    Ok(match value {
        Value::Null | Value::Bool(false) => None,
        Value::Str(s) => Some(escape_html(s)),
        Value::List(items) => {
            let mut joined = String::new();

            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    joined.push(',');
                }

                prepare_node_value(&mut joined, item)?;
            }

            Some(Cow::Owned(joined))
        }
        _ => {
            let mut rendered = String::new();

            prepare_node_value(&mut rendered, value)?;

            Some(Cow::Owned(rendered))
        }
    })
}

/// Rejects values that can't be rendered anywhere in a template.
pub(crate) fn check_values(values: &[Value<'_>]) -> Result<(), TemplateError> {
    for value in values {
        match value {
            Value::List(items) => check_values(items)?,
            #[cfg(feature = "json")]
            Value::Object(_) => return Err(TemplateError::UnsupportedValue(value.kind())),
            _ => (),
        }
    }

    Ok(())
}

impl<'v, T: Into<Value<'v>>> FromIterator<T> for Value<'v> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Value<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_lossless!(Bool(bool): bool);
impl_from_lossless!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
impl_from_lossless!(Float(f64): f32, f64);

macro_rules! impl_from_wide_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
                }
            }
        )+
    };
}

impl_from_wide_int!(u64, usize, isize);

impl<'v> From<&'v str> for Value<'v> {
    #[inline]
    fn from(value: &'v str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl<'v> From<&'v String> for Value<'v> {
    #[inline]
    fn from(value: &'v String) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl<'v> From<Cow<'v, str>> for Value<'v> {
    #[inline]
    fn from(value: Cow<'v, str>) -> Self {
        Value::Str(value)
    }
}

impl From<char> for Value<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Value::Str(Cow::Owned(value.to_string()))
    }
}

impl<'v, T: Into<Value<'v>>> From<Option<T>> for Value<'v> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<'v, T: Into<Value<'v>>> From<Vec<T>> for Value<'v> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

cfg_if! {
    if #[cfg(feature = "json")] {
        impl From<serde_json::Value> for Value<'_> {
            fn from(value: serde_json::Value) -> Self {
                use serde_json::Value as Json;

                match value {
                    Json::Null => Value::Null,
                    Json::Bool(b) => Value::Bool(b),
                    Json::Number(n) => match n.as_i64() {
                        Some(n) => Value::Int(n),
                        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
                    },
                    Json::String(s) => Value::Str(Cow::Owned(s)),
                    Json::Array(items) => items.into_iter().collect(),
                    Json::Object(map) => Value::Object(map),
                }
            }
        }
    }
}
