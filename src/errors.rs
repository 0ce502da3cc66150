use thiserror::Error;

/// An error that occurs while instantiating or compiling a template.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum TemplateError {
    /// The number of values doesn't match the number of interpolation points in the template.
    #[error("The template expects {expected} value(s), but {actual} value(s) have been provided.")]
    ValueCountMismatch { expected: usize, actual: usize },

    /// A value of the given kind can't be interpolated into HTML.
    #[error("Values of type `{0}` can't be interpolated into a template.")]
    UnsupportedValue(&'static str),
}
