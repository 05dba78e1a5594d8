//! TOML configuration file support.
//!
//! Settings shared by several commands can live in a config file:
//!
//! ```toml
//! # mergeproject.toml
//! [writer]
//! indent = 4
//! indent_char = "\t"
//!
//! [show]
//! recurse = true
//! ```

use anyhow::{bail, Context, Result};
use mergeproject::project::WriterConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for mergeproject.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output formatting settings.
    #[serde(default)]
    pub writer: WriterSection,

    /// Settings for the show command.
    #[serde(default)]
    pub show: ShowSection,
}

/// Configuration for written project files.
#[derive(Debug, Default, Deserialize)]
pub struct WriterSection {
    /// Indentation width per level (0 writes everything on one line).
    pub indent: Option<usize>,

    /// Indentation character, a space or a tab.
    pub indent_char: Option<String>,
}

/// Configuration for the show command.
#[derive(Debug, Default, Deserialize)]
pub struct ShowSection {
    /// Recurse by default when an entry has no subfolders setting.
    pub recurse: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Writer settings with defaults filled in.
    pub fn writer_config(&self) -> Result<WriterConfig> {
        let mut config = WriterConfig::default();
        if let Some(indent) = self.writer.indent {
            config.indent_size = indent;
        }
        if let Some(indent_char) = &self.writer.indent_char {
            config.indent_char = match indent_char.as_str() {
                " " => b' ',
                "\t" => b'\t',
                other => bail!("Unsupported indent_char {:?}, use a space or a tab", other),
            };
        }
        Ok(config)
    }
}
