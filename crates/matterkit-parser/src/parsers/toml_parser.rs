//! TOML front matter: `--- toml`

use matterkit_core::{MatterOptions, Result};
use serde_json::{Map, Number, Value};

/// Parse a TOML document into a JSON object.
///
/// Datetimes become RFC 3339 strings. Malformed TOML yields `Ok(None)`.
pub fn parse(text: &str, _options: &MatterOptions) -> Result<Option<Value>> {
    match text.parse::<toml::Table>() {
        Ok(table) => Ok(Some(table_to_json(table))),
        Err(e) => {
            log::debug!("Ignoring malformed TOML front matter: {}", e);
            Ok(None)
        }
    }
}

fn table_to_json(table: toml::Table) -> Value {
    Value::Object(
        table
            .into_iter()
            .map(|(key, value)| (key, to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

fn to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        // NaN and infinities have no JSON representation
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        toml::Value::Table(table) => table_to_json(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_default(text: &str) -> Option<Value> {
        parse(text, &MatterOptions::default()).unwrap()
    }

    #[test]
    fn test_simple_table() {
        assert_eq!(parse_default("foo = \"bar\""), Some(json!({"foo": "bar"})));
    }

    #[test]
    fn test_value_types() {
        let value = parse_default(
            "title = \"Post\"\ndraft = false\nweight = 10\nratio = 0.5\ntags = [\"a\", \"b\"]\n\n[author]\nname = \"Ann\"",
        )
        .unwrap();

        assert_eq!(value["title"], "Post");
        assert_eq!(value["draft"], false);
        assert_eq!(value["weight"], 10);
        assert_eq!(value["ratio"], 0.5);
        assert_eq!(value["tags"], json!(["a", "b"]));
        assert_eq!(value["author"]["name"], "Ann");
    }

    #[test]
    fn test_datetime_as_string() {
        let value = parse_default("date = 1979-05-27T07:32:00Z").unwrap();
        assert_eq!(value["date"], "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_non_finite_float_is_null() {
        let value = parse_default("x = nan").unwrap();
        assert_eq!(value["x"], Value::Null);
    }

    #[test]
    fn test_malformed_returns_none() {
        assert_eq!(parse_default("foo = "), None);
        assert_eq!(parse_default("foo: bar"), None);
    }
}
