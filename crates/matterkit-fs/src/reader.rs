//! File reader applying front-matter extraction to file contents

use matterkit_core::prelude::*;
use matterkit_parser::{ParserRegistry, default_registry, extract_with};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

/// Reads files and extracts their front matter with fixed options
#[derive(Debug, Clone)]
pub struct MatterReader {
    options: MatterOptions,
    registry: Arc<ParserRegistry>,
}

impl MatterReader {
    /// Create a reader using the default registry
    pub fn new(options: MatterOptions) -> Result<Self> {
        Self::with_registry(options, default_registry().clone())
    }

    /// Create a reader with its own registry
    pub fn with_registry(options: MatterOptions, registry: ParserRegistry) -> Result<Self> {
        Ok(Self {
            options: options.normalize()?,
            registry: Arc::new(registry),
        })
    }

    /// Get options
    pub fn options(&self) -> &MatterOptions {
        &self.options
    }

    /// Get registry
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Read `path` and extract its front matter (blocking)
    #[instrument(skip(self), fields(file = ?path), name = "matter_read")]
    pub fn read(&self, path: &Path) -> Result<FileMatter> {
        let (canonical, content) = load_blocking(path)?;
        self.assemble(canonical, &content)
    }

    /// Read `path` and extract its front matter
    #[instrument(skip(self), fields(file = ?path), name = "matter_read_async")]
    pub async fn read_async(&self, path: &Path) -> Result<FileMatter> {
        let (canonical, content) = load(path).await?;
        self.assemble(canonical, &content)
    }

    fn assemble(&self, path: PathBuf, content: &str) -> Result<FileMatter> {
        let matter = extract_with(content, &self.options, &self.registry)?;
        log::debug!(
            "Read {}: front matter {}",
            path.display(),
            if matter.has_front_matter() {
                "found"
            } else {
                "absent"
            }
        );
        Ok(FileMatter::new(path, matter))
    }
}

/// Read a file and extract its front matter (blocking)
pub fn read_matter(path: impl AsRef<Path>, options: &MatterOptions) -> Result<FileMatter> {
    read_matter_with(path, options, default_registry())
}

/// Blocking read resolving languages against `registry`
pub fn read_matter_with(
    path: impl AsRef<Path>,
    options: &MatterOptions,
    registry: &ParserRegistry,
) -> Result<FileMatter> {
    options.validate()?;
    let (canonical, content) = load_blocking(path.as_ref())?;
    let matter = extract_with(&content, options, registry)?;
    Ok(FileMatter::new(canonical, matter))
}

/// Read a file and extract its front matter
pub async fn read_matter_async(
    path: impl AsRef<Path>,
    options: &MatterOptions,
) -> Result<FileMatter> {
    read_matter_async_with(path, options, default_registry()).await
}

/// Async read resolving languages against `registry`
pub async fn read_matter_async_with(
    path: impl AsRef<Path>,
    options: &MatterOptions,
    registry: &ParserRegistry,
) -> Result<FileMatter> {
    options.validate()?;
    let (canonical, content) = load(path.as_ref()).await?;
    let matter = extract_with(&content, options, registry)?;
    Ok(FileMatter::new(canonical, matter))
}

/// Canonicalize `path` and read it as UTF-8
fn load_blocking(path: &Path) -> Result<(PathBuf, String)> {
    let canonical = std::fs::canonicalize(path).map_err(|e| Error::from_io_at(e, path))?;
    let content =
        std::fs::read_to_string(&canonical).map_err(|e| Error::from_io_at(e, &canonical))?;
    Ok((canonical, content))
}

async fn load(path: &Path) -> Result<(PathBuf, String)> {
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| Error::from_io_at(e, path))?;
    let content = tokio::fs::read_to_string(&canonical)
        .await
        .map_err(|e| Error::from_io_at(e, &canonical))?;
    Ok((canonical, content))
}
