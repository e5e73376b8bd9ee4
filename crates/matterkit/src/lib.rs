//! # matterkit
//!
//! Front-matter extraction for static-site generators and document pipelines.
//!
//! Re-exports the public API of the workspace crates:
//! - [`matterkit_core`] - options, errors, and result models
//! - [`matterkit_parser`] - detection, presence checks, and the parser registry
//! - [`matterkit_fs`] - blocking and async file readers
//!
//! ```
//! use matterkit::prelude::*;
//!
//! let matter = extract("--- toml\ntitle = \"Hi\"\n---\nBody", &MatterOptions::default()).unwrap();
//! assert_eq!(matter.get_str("title"), Some("Hi"));
//! assert_eq!(matter.body, "Body");
//! ```

pub mod cli;

pub use matterkit_core::*;
pub use matterkit_fs::{
    MatterReader, read_matter, read_matter_async, read_matter_async_with, read_matter_with,
};
pub use matterkit_parser::{
    FrontMatterSpan, ParserRegistry, default_registry, detect, extract, extract_with, strip_bom,
    test,
};

/// Everything needed for typical use
pub mod prelude {
    pub use matterkit_core::prelude::*;
    pub use matterkit_fs::prelude::*;
    pub use matterkit_parser::prelude::*;
}
