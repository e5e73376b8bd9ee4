//! # matterkit Parser
//!
//! Front-matter detection and extraction.
//!
//! This crate provides:
//! - A delimiter-driven detector for front-matter blocks at the start of a document
//! - Strict and loose tolerance modes for ambiguous delimiter runs
//! - Language tags on the header line (`--- toml`)
//! - Dispatch to per-call overrides or a [`ParserRegistry`] with built-in YAML and TOML parsers
//!
//! ## Quick Start
//!
//! ```
//! use matterkit_core::MatterOptions;
//!
//! let matter = matterkit_parser::extract("---\ntitle: Hello\n---\nBody", &MatterOptions::default()).unwrap();
//! assert_eq!(matter.body, "Body");
//! assert_eq!(matter.get_str("title"), Some("Hello"));
//!
//! assert!(matterkit_parser::test("---\na: 1\n---\n", &MatterOptions::default()));
//! ```
//!
//! ### Custom Registry
//!
//! ```
//! use matterkit_core::MatterOptions;
//! use matterkit_parser::ParserRegistry;
//!
//! let mut registry = ParserRegistry::default();
//! registry.register_fn("json", |text, _| {
//!     Ok(serde_json::from_str(text).ok())
//! });
//!
//! let matter = matterkit_parser::extract_with(
//!     "--- json\n{\"a\": 1}\n---\n",
//!     &MatterOptions::default(),
//!     &registry,
//! )
//! .unwrap();
//! assert_eq!(matter.data.unwrap()["a"], 1);
//! ```
//!
//! ## Tolerance Modes
//!
//! Strict mode (the default) rejects a delimiter that runs into a repeat of
//! its last character (`----` for `---`) and a footer line with anything but
//! whitespace after the delimiter. Loose mode accepts both.

mod detector;
pub mod dispatch;
pub mod parsers;

pub use detector::{BOM, FrontMatterSpan, detect, strip_bom};
pub use parsers::{ParserRegistry, default_registry};

use matterkit_core::{Matter, MatterOptions, Result};

/// Extract front matter using the default registry.
///
/// See [`extract_with`].
pub fn extract(text: &str, options: &MatterOptions) -> Result<Matter> {
    extract_with(text, options, default_registry())
}

/// Extract front matter, resolving languages against `registry`.
///
/// Options are validated before any scanning. A leading byte-order mark is
/// removed first. The parser runs only when the trimmed metadata is
/// non-empty; its errors are returned unchanged.
pub fn extract_with(
    text: &str,
    options: &MatterOptions,
    registry: &ParserRegistry,
) -> Result<Matter> {
    options.validate()?;
    let text = strip_bom(text);

    let Some(span) = detect(text, &options.delimiters, options.is_strict()) else {
        log::trace!("No front matter detected");
        return Ok(Matter::absent(text));
    };

    let language = span
        .tag
        .clone()
        .unwrap_or_else(|| options.default_language());
    let raw = span.metadata(text);

    let data = if raw.is_empty() {
        None
    } else {
        let parse = dispatch::resolve(&language, options.parsers.as_ref(), registry)?;
        parse(raw, options)?
    };

    log::trace!(
        "Front matter detected: language={}, metadata={} bytes, body at {}",
        language,
        raw.len(),
        span.body_start
    );

    Ok(Matter {
        source: text.to_string(),
        body: span.body(text).to_string(),
        data,
        raw: Some(raw.to_string()),
        language: Some(language),
    })
}

/// Whether `text` starts with a front-matter block.
///
/// Honors only the delimiters and tolerance mode. Never parses; returns
/// `false` for empty input or invalid delimiters.
pub fn test(text: &str, options: &MatterOptions) -> bool {
    if text.is_empty() || options.delimiters.validate().is_err() {
        return false;
    }
    detect(strip_bom(text), &options.delimiters, options.is_strict()).is_some()
}

/// Convenient prelude for common imports.
pub mod prelude {
    pub use matterkit_core::prelude::*;

    pub use crate::parsers::{ParserRegistry, default_registry};
    pub use crate::{FrontMatterSpan, detect, extract, extract_with, test};
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn accept_all() -> MatterOptions {
        MatterOptions::builder()
            .parser_fn(|_, _| Ok(None))
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn no_header_means_untouched(s in "[a-z \n:~-]{0,40}") {
            prop_assume!(!s.starts_with("---"));
            let matter = extract(&s, &MatterOptions::default()).unwrap();
            prop_assert_eq!(&matter.body, &s);
            prop_assert!(matter.data.is_none());
        }

        #[test]
        fn presence_check_agrees_with_extraction(s in "[a-z \n:-]{0,40}", loose in any::<bool>()) {
            let mut options = accept_all();
            options.loose = loose;

            let matter = extract(&s, &options).unwrap();
            prop_assert!(matter.source.ends_with(&matter.body));
            if test(&s, &options) {
                prop_assert!(matter.has_front_matter());
                prop_assert!(matter.body.len() < matter.source.len());
            } else {
                prop_assert!(!matter.has_front_matter());
                prop_assert_eq!(&matter.body, &s);
            }
        }

        #[test]
        fn yaml_round_trip(
            fields in prop::collection::btree_map("k[a-z]{0,6}", "v[a-z]{0,6}", 1..5),
            body in "[a-z \n]{0,30}",
        ) {
            let metadata = fields
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("\n");
            let text = format!("---\n{metadata}\n---\n{body}");

            let matter = extract(&text, &MatterOptions::default()).unwrap();
            let expected: BTreeMap<String, serde_json::Value> = fields
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect();
            let data: BTreeMap<String, serde_json::Value> =
                serde_json::from_value(matter.data.clone().unwrap()).unwrap();

            prop_assert_eq!(data, expected);
            prop_assert_eq!(&matter.body, &body);
        }
    }
}
