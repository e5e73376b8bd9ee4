//! # matterkit File Reader
//!
//! Front-matter extraction for files on disk.
//!
//! Blocking ([`read_matter`]) and async ([`read_matter_async`]) readers run
//! the same extraction as [`matterkit_parser::extract`] on the file's
//! contents and attach the canonical path. Read failures are returned as
//! errors; no partial result is produced.
//!
//! ## Quick Start
//!
//! ```no_run
//! use matterkit_fs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = MatterOptions::default();
//!
//!     let file = read_matter_async("content/post.md", &options).await?;
//!     println!("{}: {:?}", file.path.display(), file.matter.data);
//!
//!     // Reuse options and a registry across many files
//!     let reader = MatterReader::new(options)?;
//!     let other = reader.read(std::path::Path::new("content/other.md"))?;
//!     println!("{}", other.matter.body);
//!
//!     Ok(())
//! }
//! ```

pub mod reader;

pub use reader::{
    MatterReader, read_matter, read_matter_async, read_matter_async_with, read_matter_with,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::reader::{MatterReader, read_matter, read_matter_async};
    pub use matterkit_core::prelude::*;
}
