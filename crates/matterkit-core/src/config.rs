//! Extraction options.
//!
//! Follows a builder pattern for complex configuration with validation.
//! Everything except the parser override can also be loaded from a YAML
//! or TOML file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Delimiter used for both header and footer when none is configured.
pub const DEFAULT_DELIMITER: &str = "---";

/// Language assumed when the header line carries no tag.
pub const DEFAULT_LANGUAGE: &str = "yaml";

/// A metadata parsing function.
///
/// Receives the trimmed metadata text and the options of the current call.
/// Built-in parsers return `Ok(None)` on malformed input; an `Err` from a
/// custom parser is returned to the extraction caller unchanged.
pub type ParseFn =
    Arc<dyn Fn(&str, &MatterOptions) -> Result<Option<serde_json::Value>> + Send + Sync>;

/// Wrap a closure or function item as a [`ParseFn`].
pub fn parse_fn<F>(f: F) -> ParseFn
where
    F: Fn(&str, &MatterOptions) -> Result<Option<serde_json::Value>> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Header/footer delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DelimiterRepr", into = "DelimiterRepr")]
pub struct Delimiters {
    pub header: String,
    pub footer: String,
}

impl Delimiters {
    /// Distinct header and footer
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Same delimiter for header and footer
    pub fn both(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self {
            header: delimiter.clone(),
            footer: delimiter,
        }
    }

    /// Build from a possibly incomplete pair.
    ///
    /// A single supplied delimiter is used for both ends; with neither,
    /// both default to [`DEFAULT_DELIMITER`].
    pub fn from_pair(header: Option<String>, footer: Option<String>) -> Self {
        match (header, footer) {
            (Some(header), Some(footer)) => Self::new(header, footer),
            (Some(one), None) | (None, Some(one)) => Self::both(one),
            (None, None) => Self::default(),
        }
    }

    /// Validate that neither delimiter is empty
    pub fn validate(&self) -> Result<()> {
        if self.header.is_empty() {
            return Err(Error::config_error("Header delimiter cannot be empty"));
        }
        if self.footer.is_empty() {
            return Err(Error::config_error("Footer delimiter cannot be empty"));
        }
        Ok(())
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::both(DEFAULT_DELIMITER)
    }
}

/// Serialized form: a single string, or a 2-element array whose entries may be null.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DelimiterRepr {
    Single(String),
    Pair(Option<String>, Option<String>),
}

impl TryFrom<DelimiterRepr> for Delimiters {
    type Error = String;

    fn try_from(repr: DelimiterRepr) -> std::result::Result<Self, Self::Error> {
        let delimiters = match repr {
            DelimiterRepr::Single(one) => Delimiters::both(one),
            DelimiterRepr::Pair(header, footer) => Delimiters::from_pair(header, footer),
        };
        delimiters.validate().map_err(|e| e.to_string())?;
        Ok(delimiters)
    }
}

impl From<Delimiters> for DelimiterRepr {
    fn from(delimiters: Delimiters) -> Self {
        DelimiterRepr::Pair(Some(delimiters.header), Some(delimiters.footer))
    }
}

/// Per-call override of language resolution.
#[derive(Clone)]
pub enum ParserOverride {
    /// Always used, whatever the block's language
    Function(ParseFn),
    /// Consulted by language tag before the registry
    Map(HashMap<String, ParseFn>),
}

impl ParserOverride {
    /// The override's function for `lang`, if it has one.
    pub fn resolve(&self, lang: &str) -> Option<&ParseFn> {
        match self {
            ParserOverride::Function(f) => Some(f),
            ParserOverride::Map(map) => map.get(lang),
        }
    }

    fn validate(&self) -> Result<()> {
        if let ParserOverride::Map(map) = self
            && map.keys().any(|k| k.trim().is_empty())
        {
            return Err(Error::config_error("Parser map contains an empty language tag"));
        }
        Ok(())
    }

    fn normalize(self) -> Self {
        match self {
            ParserOverride::Map(map) => ParserOverride::Map(
                map.into_iter()
                    .map(|(k, f)| (k.trim().to_lowercase(), f))
                    .collect(),
            ),
            function => function,
        }
    }
}

impl fmt::Debug for ParserOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserOverride::Function(_) => f.write_str("Function(..)"),
            ParserOverride::Map(map) => {
                let mut langs: Vec<_> = map.keys().collect();
                langs.sort();
                f.debug_tuple("Map").field(&langs).finish()
            }
        }
    }
}

/// Options recognized by extraction and presence checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatterOptions {
    /// Disable the strict delimiter ambiguity checks
    pub loose: bool,
    /// Language used when the header line carries no tag
    pub lang: String,
    /// Header/footer delimiters
    #[serde(alias = "delims")]
    pub delimiters: Delimiters,
    /// Parser override; not loadable from config files
    #[serde(skip)]
    pub parsers: Option<ParserOverride>,
}

impl Default for MatterOptions {
    fn default() -> Self {
        Self {
            loose: false,
            lang: DEFAULT_LANGUAGE.to_string(),
            delimiters: Delimiters::default(),
            parsers: None,
        }
    }
}

impl MatterOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with builder
    pub fn builder() -> MatterOptionsBuilder {
        MatterOptionsBuilder::new()
    }

    /// Whether the strict ambiguity checks apply
    pub fn is_strict(&self) -> bool {
        !self.loose
    }

    /// Default language tag, trimmed and lowercased
    pub fn default_language(&self) -> String {
        self.lang.trim().to_lowercase()
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(Error::config_error("Default language cannot be empty"));
        }
        self.delimiters.validate()?;
        if let Some(parsers) = &self.parsers {
            parsers.validate()?;
        }
        Ok(())
    }

    /// Validate, then lowercase the default language and parser map keys
    pub fn normalize(mut self) -> Result<Self> {
        self.validate()?;
        self.lang = self.default_language();
        self.parsers = self.parsers.map(ParserOverride::normalize);
        Ok(self)
    }

    /// Load options from a YAML or TOML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to load options from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_config_str(&content, path)
    }

    /// Blocking variant of [`MatterOptions::load`]
    pub fn load_blocking(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load options from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_config_str(&content, path)
    }

    fn from_config_str(content: &str, path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let options: Self = match extension.as_deref() {
            Some("toml") => toml::from_str(content)
                .map_err(|e| Error::config_error(format!("Invalid options file: {}", e)))?,
            Some("yaml" | "yml") => serde_yaml::from_str(content)
                .map_err(|e| Error::config_error(format!("Invalid options file: {}", e)))?,
            _ => {
                return Err(Error::config_error(format!(
                    "Unsupported options file format: {}",
                    path.display()
                )));
            }
        };

        log::debug!("Loaded options from {}", path.display());
        options.normalize()
    }
}

/// Builder for MatterOptions
pub struct MatterOptionsBuilder {
    options: MatterOptions,
}

impl MatterOptionsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            options: MatterOptions::default(),
        }
    }

    /// Set the tolerance mode
    pub fn loose(mut self, loose: bool) -> Self {
        self.options.loose = loose;
        self
    }

    /// Set the default language
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.options.lang = lang.into();
        self
    }

    /// Set both delimiters explicitly
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.options.delimiters = delimiters;
        self
    }

    /// Use one delimiter for header and footer
    pub fn delims(mut self, delimiter: impl Into<String>) -> Self {
        self.options.delimiters = Delimiters::both(delimiter);
        self
    }

    /// Parse every block with `f`, ignoring language tags
    pub fn parser_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &MatterOptions) -> Result<Option<serde_json::Value>> + Send + Sync + 'static,
    {
        self.options.parsers = Some(ParserOverride::Function(parse_fn(f)));
        self
    }

    /// Add a per-call parser for `lang`.
    ///
    /// Replaces a previously set [`MatterOptionsBuilder::parser_fn`].
    pub fn parser<F>(mut self, lang: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &MatterOptions) -> Result<Option<serde_json::Value>> + Send + Sync + 'static,
    {
        let mut map = match self.options.parsers.take() {
            Some(ParserOverride::Map(map)) => map,
            _ => HashMap::new(),
        };
        map.insert(lang.into(), parse_fn(f));
        self.options.parsers = Some(ParserOverride::Map(map));
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<MatterOptions> {
        self.options.normalize()
    }
}

impl Default for MatterOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
