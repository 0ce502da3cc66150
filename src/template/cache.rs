use super::compiler::TemplateCompiler;
use super::value::Value;
use super::Template;
use crate::errors::TemplateError;
use crate::settings::Settings;
use hashbrown::{Equivalent, HashMap};
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

fn hash_literals<'l, H: Hasher>(literals: impl ExactSizeIterator<Item = &'l str>, state: &mut H) {
    literals.len().hash(state);

    for literal in literals {
        literal.hash(state);
    }
}

#[derive(PartialEq, Eq)]
struct LiteralsKey(Box<[Box<str>]>);

impl Hash for LiteralsKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_literals(self.0.iter().map(|l| &**l), state);
    }
}

/// Borrowed form of the key, so lookups don't allocate.
struct LiteralsRef<'a, S>(&'a [S]);

impl<S: AsRef<str>> Hash for LiteralsRef<'_, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_literals(self.0.iter().map(|l| l.as_ref()), state);
    }
}

impl<S: AsRef<str>> Equivalent<LiteralsKey> for LiteralsRef<'_, S> {
    fn equivalent(&self, key: &LiteralsKey) -> bool {
        self.0.len() == key.0.len()
            && self
                .0
                .iter()
                .zip(key.0.iter())
                .all(|(a, b)| a.as_ref() == &**b)
    }
}

/// Parsed templates keyed by the content of their literals.
///
/// Templates are parsed outside of the lock. If two threads parse the same template
/// concurrently, the one that is stored first wins and the other is dropped.
pub struct TemplateCache {
    templates: Mutex<HashMap<LiteralsKey, Arc<Template>>>,
    settings: Settings,
}

impl TemplateCache {
    pub fn new(settings: Settings) -> Self {
        TemplateCache {
            templates: Mutex::new(HashMap::new()),
            settings,
        }
    }

    /// The process-wide cache used by [`html`].
    ///
    /// [`html`]: crate::html
    pub fn global() -> &'static TemplateCache {
        static GLOBAL: OnceLock<TemplateCache> = OnceLock::new();

        GLOBAL.get_or_init(TemplateCache::default)
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // NOTE: the map is never left in an inconsistent state, so the poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<LiteralsKey, Arc<Template>>> {
        self.templates.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains<S: AsRef<str>>(&self, literals: &[S]) -> bool {
        self.lock().contains_key(&LiteralsRef(literals))
    }

    /// Returns the template for the literals, parsing it if it's not cached yet.
    pub fn get_or_parse<S: AsRef<str>>(&self, literals: &[S]) -> Arc<Template> {
        if let Some(template) = self.lock().get(&LiteralsRef(literals)) {
            trace!(@cache "hit", literals);

            return Arc::clone(template);
        }

        trace!(@cache "miss", literals);

        let template = Arc::new(Template::with_settings(
            literals,
            &self.settings.memory_settings,
        ));

        let mut templates = self.lock();

        if let Some(existing) = templates.get(&LiteralsRef(literals)) {
            return Arc::clone(existing);
        }

        if templates.len() < self.settings.memory_settings.max_cached_templates {
            let key = LiteralsKey(literals.iter().map(|l| l.as_ref().into()).collect());

            templates.insert(key, Arc::clone(&template));
        }

        template
    }

    /// Instantiates the template for the literals with the values.
    ///
    /// `n` literals take `n - 1` values. `n` values are accepted as well, in which case
    /// the template is considered to end with a value.
    pub fn html<'v, S: AsRef<str>>(
        &self,
        literals: &[S],
        values: Vec<Value<'v>>,
    ) -> Result<TemplateCompiler<'v>, TemplateError> {
        let template = if !literals.is_empty() && values.len() == literals.len() {
            let literals = literals
                .iter()
                .map(|l| l.as_ref())
                .chain(iter::once(""))
                .collect::<Vec<_>>();

            self.get_or_parse(&literals)
        } else {
            self.get_or_parse(literals)
        };

        TemplateCompiler::with_strictness(template, values, self.settings.strict)
    }
}

impl Default for TemplateCache {
    #[inline]
    fn default() -> Self {
        TemplateCache::new(Settings::default())
    }
}
