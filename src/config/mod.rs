//! Converter configuration management for `docs2jekyll.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[convert]` | Front matter values, file selection, permalink |
//!
//! # Example
//!
//! ```toml
//! [convert]
//! layout = "page"
//! fallback_title = "Documentation"
//! extension = "html"
//! permalink_root = "docs"
//! ignored = [".DS_Store"]
//! ```
//!
//! The file is optional. Without it every value falls back to its default,
//! and CLI flags always win over file values.

mod convert;
pub mod defaults;
mod error;

pub use convert::ConvertConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docs2jekyll.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the config file that was loaded (empty when defaults are used)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,
}

impl Config {
    /// Parse configuration from the TOML text of the file at `path`
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        Self::parse(&content, path)
    }

    /// Load the config file named by the CLI if it exists, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.convert.layout, cli.layout.as_ref());
        if let Some(root) = &cli.permalink_root {
            self.convert.permalink_root = Some(root.clone());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate values that would otherwise produce broken front matter
    pub fn validate(&self) -> Result<()> {
        let convert = &self.convert;
        let invalid = |field: &'static str, reason: &str| ConfigError::Invalid {
            field,
            reason: reason.to_owned(),
        };

        if convert.layout.trim().is_empty() {
            bail!(invalid("layout", "must not be empty"));
        }
        if convert.layout.contains(['\n', '\r']) {
            bail!(invalid("layout", "must be a single line"));
        }
        if convert.fallback_title.trim().is_empty() {
            bail!(invalid("fallback_title", "must not be empty"));
        }
        if convert.extension.is_empty() {
            bail!(invalid("extension", "must not be empty"));
        }
        if convert.extension.starts_with('.') {
            bail!(invalid("extension", "is written without the leading dot"));
        }
        if let Some(root) = &convert.permalink_root
            && root.contains(['\n', '\r'])
        {
            bail!(invalid("permalink_root", "must be a single line"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
