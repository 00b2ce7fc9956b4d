//! Configuration loader for madx-lexer.
//!
//! `defaults/madx.default.toml` is embedded into the binary so that documentation and runtime
//! behavior stay in sync. Callers layer user files and key overrides on top of those defaults
//! via [`Loader`] before deserializing into [`MadxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/madx.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MadxConfig {
    pub output: OutputConfig,
    pub html: HtmlConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format
    pub format: String,
    pub merge_adjacent: bool,
}

/// Knobs of the `html` format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HtmlConfig {
    pub class_prefix: String,
    pub wrap: bool,
    pub css_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    pub color: ColorMode,
}

/// When the `terminal` format emits ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    Always,
    Never,
    /// Colour only when writing to a terminal; resolved by the caller
    Auto,
}

impl ColorMode {
    /// Resolve to a yes/no decision given whether output goes to a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
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

    /// Apply a single key/value override, e.g. `output.format` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MadxConfig, ConfigError> {
        let config: MadxConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(format = %config.output.format, "configuration loaded");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MadxConfig, ConfigError> {
    Loader::new().build()
}
