//! Shared configuration loader for markdown2html.
//!
//! `defaults/md2html.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2HtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use md2html_babel::ConversionRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2html.default.toml");

/// Top-level configuration consumed by markdown2html applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2HtmlConfig {
    pub convert: ConvertConfig,
}

/// Conversion-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub rules: RulesConfig,
}

/// Mirrors the knobs exposed by [`ConversionRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    pub bold_tag: String,
    pub italic_tag: String,
    pub removal_chars: String,
    pub line_break: String,
}

impl From<RulesConfig> for ConversionRules {
    fn from(config: RulesConfig) -> Self {
        ConversionRules {
            bold_tag: config.bold_tag,
            italic_tag: config.italic_tag,
            removal_chars: config.removal_chars,
            line_break: config.line_break,
        }
    }
}

impl From<&RulesConfig> for ConversionRules {
    fn from(config: &RulesConfig) -> Self {
        ConversionRules {
            bold_tag: config.bold_tag.clone(),
            italic_tag: config.italic_tag.clone(),
            removal_chars: config.removal_chars.clone(),
            line_break: config.line_break.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Md2HtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2HtmlConfig, ConfigError> {
    Loader::new().build()
}
