//! Command-line interface: argument definitions and command execution.
//!
//! Kept in the library so the commands can be driven from tests; the
//! binary only parses arguments, sets up logging, and maps the outcome to
//! an exit code.

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use matterkit_core::{Delimiters, MatterOptions};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// matterkit - front-matter extraction for documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML or TOML); flags override its values
    #[arg(short, long, env = "MATTERKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command that runs detection
#[derive(Args, Debug, Clone, Default)]
pub struct DetectArgs {
    /// Delimiters as HEADER or HEADER,FOOTER
    #[arg(short, long, value_delimiter = ',')]
    pub delims: Vec<String>,

    /// Accept ambiguous delimiter runs and trailing text after the footer
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub loose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract front matter and print the result as JSON
    Extract {
        /// File to read, or `-` for stdin
        file: PathBuf,

        /// Language used when the header line has no tag
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        detect: DetectArgs,

        /// Pretty-print the JSON output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        pretty: bool,
    },

    /// Report whether each file starts with front matter
    Test {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        detect: DetectArgs,
    },
}

/// Merge the options file (if any) with command-line flags
pub async fn build_options(
    config: Option<&Path>,
    detect: &DetectArgs,
    lang: Option<&str>,
) -> anyhow::Result<MatterOptions> {
    let mut options = match config {
        Some(path) => MatterOptions::load(path).await?,
        None => MatterOptions::default(),
    };

    if detect.loose {
        options.loose = true;
    }

    options.delimiters = match detect.delims.as_slice() {
        [] => options.delimiters,
        [both] => Delimiters::both(both.as_str()),
        [header, footer] => Delimiters::new(header.as_str(), footer.as_str()),
        more => bail!("Expected at most two delimiters, got {}", more.len()),
    };

    if let Some(lang) = lang {
        options.lang = lang.to_string();
    }

    Ok(options.normalize()?)
}

/// Run a parsed command, writing results to `out`.
///
/// Returns `Ok(false)` when `test` finds a file without front matter.
pub async fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = cli.config.as_deref();

    match &cli.command {
        Command::Extract {
            file,
            lang,
            detect,
            pretty,
        } => {
            let options = build_options(config, detect, lang.as_deref()).await?;

            if file.as_os_str() == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                let matter = matterkit_parser::extract(&text, &options)?;
                write_json(out, &matter, *pretty)?;
            } else {
                let file_matter = matterkit_fs::read_matter_async(file, &options)
                    .await
                    .with_context(|| format!("Failed to extract {}", file.display()))?;
                write_json(out, &file_matter, *pretty)?;
            }
            Ok(true)
        }

        Command::Test { files, detect } => {
            let options = build_options(config, detect, None).await?;
            let mut all_found = true;

            for file in files {
                let text = tokio::fs::read_to_string(file)
                    .await
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let found = matterkit_parser::test(&text, &options);
                log::debug!("{}: front matter {}", file.display(), found);

                writeln!(out, "{}: {}", file.display(), found)?;
                all_found &= found;
            }
            Ok(all_found)
        }
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
