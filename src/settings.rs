/// Specifies memory settings for template compilation.
#[derive(Debug, Clone)]
pub struct MemorySettings {
    /// Minimal capacity of the output buffer allocated for each compilation.
    ///
    /// The buffer is never smaller than the total length of the template's static text.
    ///
    /// ### Default
    ///
    /// `256` bytes when constructed with `MemorySettings::default()`.
    pub preallocated_output_size: usize,

    /// Maximum number of parsed templates kept by a [`TemplateCache`].
    ///
    /// Once the limit is reached, templates that aren't cached yet are parsed on each
    /// instantiation and dropped afterwards. Cached entries are never evicted.
    ///
    /// ### Default
    ///
    /// [`usize::MAX`] when constructed with `MemorySettings::default()`.
    ///
    /// [`TemplateCache`]: crate::TemplateCache
    pub max_cached_templates: usize,
}

impl Default for MemorySettings {
    #[inline]
    fn default() -> Self {
        MemorySettings {
            preallocated_output_size: 256,
            max_cached_templates: usize::MAX,
        }
    }
}

/// Specifies settings of a [`TemplateCache`].
///
/// [`TemplateCache`]: crate::TemplateCache
#[derive(Debug, Clone)]
pub struct Settings {
    /// Memory settings.
    pub memory_settings: MemorySettings,

    /// If set to `true`, instantiating or compiling a template with a number of values
    /// different from the number of interpolation points is an error.
    ///
    /// In lenient mode missing values are treated as [`Value::Null`] and superfluous
    /// values are ignored.
    ///
    /// ### Default
    ///
    /// `true` when constructed with `Settings::default()`.
    ///
    /// [`Value::Null`]: crate::Value::Null
    pub strict: bool,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            memory_settings: MemorySettings::default(),
            strict: true,
        }
    }
}
