//! Built-in metadata parsers and the language registry.

use matterkit_core::{MatterOptions, ParseFn, Result, parse_fn};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

pub mod toml_parser;
pub mod yaml_parser;

/// Registry shared by [`crate::extract`] and [`crate::test`] callers that
/// don't bring their own. Built on first use.
static DEFAULT_REGISTRY: LazyLock<ParserRegistry> = LazyLock::new(ParserRegistry::with_builtins);

/// The default registry: `yaml` and `toml`.
pub fn default_registry() -> &'static ParserRegistry {
    &DEFAULT_REGISTRY
}

/// Mapping from lowercase language tag to parsing function.
///
/// Owned by the caller; wrap it in a lock to mutate it from several threads.
#[derive(Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, ParseFn>,
}

impl ParserRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// A registry seeded with the `yaml` and `toml` parsers
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("yaml", parse_fn(yaml_parser::parse));
        registry.register("toml", parse_fn(toml_parser::parse));
        registry
    }

    /// Add or replace the parser for `lang`, returning the replaced entry
    pub fn register(&mut self, lang: impl AsRef<str>, parser: ParseFn) -> Option<ParseFn> {
        let lang = normalize_tag(lang.as_ref());
        log::debug!("Registering front-matter parser for {:?}", lang);
        self.parsers.insert(lang, parser)
    }

    /// Closure form of [`ParserRegistry::register`]
    pub fn register_fn<F>(&mut self, lang: impl AsRef<str>, f: F) -> Option<ParseFn>
    where
        F: Fn(&str, &MatterOptions) -> Result<Option<serde_json::Value>> + Send + Sync + 'static,
    {
        self.register(lang, parse_fn(f))
    }

    /// Remove the parser for `lang`
    pub fn unregister(&mut self, lang: &str) -> Option<ParseFn> {
        self.parsers.remove(&normalize_tag(lang))
    }

    /// Look up the parser for `lang`
    pub fn get(&self, lang: &str) -> Option<&ParseFn> {
        self.parsers.get(&normalize_tag(lang))
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.parsers.contains_key(&normalize_tag(lang))
    }

    /// Registered language tags, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}

#[inline]
fn normalize_tag(lang: &str) -> String {
    lang.trim().to_lowercase()
}
