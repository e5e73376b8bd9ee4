//! Language dispatch: which function parses a block.

use matterkit_core::{Error, ParseFn, ParserOverride, Result};

use crate::parsers::ParserRegistry;

/// Resolve the parser for `lang`.
///
/// Order: an override function, then an override map entry, then the
/// registry. Fails with [`Error::UnknownLanguage`] when nothing matches.
pub fn resolve<'a>(
    lang: &str,
    overrides: Option<&'a ParserOverride>,
    registry: &'a ParserRegistry,
) -> Result<&'a ParseFn> {
    overrides
        .and_then(|o| o.resolve(lang))
        .or_else(|| registry.get(lang))
        .ok_or_else(|| Error::unknown_language(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matterkit_core::{MatterOptions, parse_fn};
    use serde_json::json;
    use std::collections::HashMap;

    fn call(parse: &ParseFn) -> serde_json::Value {
        parse("", &MatterOptions::default()).unwrap().unwrap()
    }

    #[test]
    fn test_function_override_wins() {
        let overrides = ParserOverride::Function(parse_fn(|_, _| Ok(Some(json!("fn")))));
        let registry = ParserRegistry::default();
        assert_eq!(call(resolve("yaml", Some(&overrides), &registry).unwrap()), "fn");
        assert_eq!(call(resolve("unknown", Some(&overrides), &registry).unwrap()), "fn");
    }

    #[test]
    fn test_map_then_registry() {
        let mut map = HashMap::new();
        map.insert("yaml".to_string(), parse_fn(|_, _| Ok(Some(json!("map")))));
        let overrides = ParserOverride::Map(map);

        let mut registry = ParserRegistry::new();
        registry.register_fn("toml", |_, _| Ok(Some(json!("registry"))));

        assert_eq!(call(resolve("yaml", Some(&overrides), &registry).unwrap()), "map");
        assert_eq!(call(resolve("toml", Some(&overrides), &registry).unwrap()), "registry");
    }

    #[test]
    fn test_unresolved_language() {
        let registry = ParserRegistry::default();
        let err = resolve("json5", None, &registry).err().unwrap();
        assert!(matches!(err, Error::UnknownLanguage { ref lang } if lang == "json5"));
    }
}
