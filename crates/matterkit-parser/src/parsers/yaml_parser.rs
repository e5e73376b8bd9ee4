//! YAML front matter: `--- yaml`

use matterkit_core::{MatterOptions, Result};
use serde_json::Value;

/// Parse YAML metadata into a JSON value.
///
/// Malformed YAML and an explicit `null` document yield `Ok(None)`.
pub fn parse(text: &str, _options: &MatterOptions) -> Result<Option<Value>> {
    match serde_yaml::from_str::<Value>(text) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::debug!("Ignoring malformed YAML front matter: {}", e);
            Ok(None)
        }
    }
}
