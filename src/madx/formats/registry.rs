//! Format registry for token output
//!
//! This module provides a pluggable registry of output formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`.

use crate::madx::config::MadxConfig;
use crate::madx::token::Token;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for token stream formatters
///
/// Tokens carry their own text, so a stream that covers its source is enough to reproduce it.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Render tokens in this format
    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render tokens using the specified format
    pub fn format(&self, tokens: &[Token<'_>], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        tracing::debug!(format, tokens = tokens.len(), "formatting tokens");
        formatter.format(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::SimpleFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::HtmlFormatter::default());
        registry.register(super::TerminalFormatter::default());

        registry
    }

    /// Create a registry whose configurable formats follow `config`
    ///
    /// `color` is the already resolved terminal colour decision, see
    /// [ColorMode::enabled](crate::madx::config::ColorMode::enabled).
    pub fn from_config(config: &MadxConfig, color: bool) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::HtmlFormatter::from_config(&config.html));
        registry.register(super::TerminalFormatter::new(color));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
