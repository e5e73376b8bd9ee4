//! # matterkit Core
//!
//! Core option types, error types, and result models for front-matter
//! extraction. This crate defines the canonical types that all other
//! matterkit crates depend on.
//!
//! ## Core Modules
//!
//! - [`config`] - Extraction options, delimiters, and parser overrides
//! - [`error`] - Error taxonomy and Result alias
//! - [`models`] - Extraction results ([`Matter`], [`FileMatter`])
//!
//! ## Usage Examples
//!
//! ### Building Options
//!
//! ```
//! use matterkit_core::prelude::*;
//!
//! let options = MatterOptions::builder()
//!     .delimiters(Delimiters::new("~~~", "^^^"))
//!     .lang("TOML")
//!     .build()
//!     .unwrap();
//! assert_eq!(options.lang, "toml");
//! ```
//!
//! ### Error Handling
//!
//! ```
//! use matterkit_core::prelude::*;
//!
//! let err = MatterOptions::builder().delims("").build().unwrap_err();
//! assert!(err.is_config());
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::{
    DEFAULT_DELIMITER, DEFAULT_LANGUAGE, Delimiters, MatterOptions, MatterOptionsBuilder, ParseFn,
    ParserOverride, parse_fn,
};
pub use error::{Error, Result};
pub use models::{FileMatter, Matter};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Delimiters, MatterOptions, ParseFn, ParserOverride, parse_fn};
    pub use crate::error::{Error, Result};
    pub use crate::models::{FileMatter, Matter};
}
