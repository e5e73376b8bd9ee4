//! Extraction result types.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of extracting front matter from a document.
///
/// `body` is always a suffix of `source`. When no block was detected,
/// `body == source` and `data`, `raw` and `language` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    /// The document, minus a leading byte-order mark
    pub source: String,
    /// Content after the front-matter block
    pub body: String,
    /// Parsed metadata; `None` when absent, empty, or rejected by the parser
    pub data: Option<serde_json::Value>,
    /// Trimmed metadata text of a detected block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Language governing a detected block (header tag or default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Matter {
    /// Result for a document without front matter
    pub fn absent(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            body: source.clone(),
            source,
            data: None,
            raw: None,
            language: None,
        }
    }

    /// Whether a front-matter block was detected (even if it held no data)
    pub fn has_front_matter(&self) -> bool {
        self.raw.is_some()
    }

    /// Byte offset into `source` where `body` begins
    pub fn body_offset(&self) -> usize {
        self.source.len() - self.body.len()
    }

    /// Get a string field from the parsed data
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key)?.as_str()
    }

    /// Deserialize the parsed data into a specific type.
    ///
    /// Returns `Ok(None)` when there is no data.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.data {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::parse_error(format!("Failed to deserialize front matter: {e}"))),
            None => Ok(None),
        }
    }
}

/// Front matter extracted from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMatter {
    /// Canonical path of the file that was read
    pub path: PathBuf,
    #[serde(flatten)]
    pub matter: Matter,
}

impl FileMatter {
    pub fn new(path: PathBuf, matter: Matter) -> Self {
        Self { path, matter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Matter {
        Matter {
            source: "---\ntitle: Hello\n---\nBody".to_string(),
            body: "Body".to_string(),
            data: Some(json!({"title": "Hello", "draft": true})),
            raw: Some("title: Hello".to_string()),
            language: Some("yaml".to_string()),
        }
    }

    #[test]
    fn test_absent_result() {
        let matter = Matter::absent("plain text");
        assert_eq!(matter.body, matter.source);
        assert!(matter.data.is_none());
        assert!(!matter.has_front_matter());
        assert_eq!(matter.body_offset(), 0);
    }

    #[test]
    fn test_accessors() {
        let matter = sample();
        assert!(matter.has_front_matter());
        assert_eq!(matter.get_str("title"), Some("Hello"));
        assert_eq!(matter.get_str("draft"), None);
        assert_eq!(&matter.source[matter.body_offset()..], "Body");
    }

    #[test]
    fn test_deserialize_typed() {
        #[derive(Deserialize)]
        struct Meta {
            title: String,
            draft: bool,
        }

        let meta: Meta = sample().deserialize().unwrap().unwrap();
        assert_eq!(meta.title, "Hello");
        assert!(meta.draft);

        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrong {
            count: u32,
        }
        assert!(sample().deserialize::<Wrong>().is_err());
        assert!(Matter::absent("x").deserialize::<Wrong>().unwrap().is_none());
    }

    #[test]
    fn test_file_matter_serializes_flat() {
        let file = FileMatter::new(PathBuf::from("/notes/a.md"), sample());
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["path"], "/notes/a.md");
        assert_eq!(value["body"], "Body");
        assert_eq!(value["data"]["title"], "Hello");
    }
}
