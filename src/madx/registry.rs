//! Lexer registry
//!
//! Hosts pick a tokenizer by a short alias (`--lexer madx`) or by the name of the file being
//! highlighted. Each tokenizer carries static [LexerInfo] describing both; the registry
//! indexes that metadata.
//!
//! Filename patterns are shell-style globs where `*` matches any run of characters and `?`
//! matches one. They are matched against the final path component only, case-sensitively.

use crate::madx::lexing::{MadxLexer, Tokens};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Registration metadata for a tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexerInfo {
    /// Display name
    pub name: &'static str,
    /// Short names, matched case-insensitively
    pub aliases: &'static [&'static str],
    /// Filename globs
    pub filenames: &'static [&'static str],
}

pub const MADX_INFO: LexerInfo = LexerInfo {
    name: "MadX",
    aliases: &["mad", "madx"],
    filenames: &["*.mad", "*.madx", "*.seq"],
};

/// Error that can occur while registering a tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A filename glob did not translate into a valid pattern
    InvalidFilename { glob: String, message: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidFilename { glob, message } => {
                write!(f, "Invalid filename pattern '{glob}': {message}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Something that turns source text into a token stream
pub trait Tokenizer: Send + Sync {
    fn info(&self) -> &LexerInfo;

    fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a>;
}

impl Tokenizer for MadxLexer {
    fn info(&self) -> &LexerInfo {
        &MADX_INFO
    }

    fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        MadxLexer::tokenize(self, source)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &'static T {
    fn info(&self) -> &LexerInfo {
        (**self).info()
    }

    fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        (**self).tokenize(source)
    }
}

struct Entry {
    tokenizer: Box<dyn Tokenizer>,
    filenames: Vec<Regex>,
}

/// Registry of tokenizers, in registration order
pub struct LexerRegistry {
    entries: Vec<Entry>,
}

impl LexerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LexerRegistry {
            entries: Vec::new(),
        }
    }

    /// Register a tokenizer.
    ///
    /// Lookups return the first registered match, so earlier registrations win ties.
    pub fn register<T: Tokenizer + 'static>(&mut self, tokenizer: T) -> Result<(), RegistryError> {
        let filenames = tokenizer
            .info()
            .filenames
            .iter()
            .map(|glob| glob_to_regex(glob))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(lexer = tokenizer.info().name, "registered lexer");
        self.entries.push(Entry {
            tokenizer: Box::new(tokenizer),
            filenames,
        });
        Ok(())
    }

    /// Find a tokenizer by alias, ignoring case.
    pub fn by_alias(&self, alias: &str) -> Option<&dyn Tokenizer> {
        self.entries
            .iter()
            .find(|entry| {
                entry
                    .tokenizer
                    .info()
                    .aliases
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(alias))
            })
            .map(|entry| entry.tokenizer.as_ref())
    }

    /// Find a tokenizer whose filename globs match the file name of `path`.
    pub fn for_filename(&self, path: impl AsRef<Path>) -> Option<&dyn Tokenizer> {
        let name = path.as_ref().file_name()?.to_str()?;
        self.entries
            .iter()
            .find(|entry| entry.filenames.iter().any(|re| re.is_match(name)))
            .map(|entry| entry.tokenizer.as_ref())
    }

    /// Metadata of every registered tokenizer, in registration order.
    pub fn list(&self) -> Vec<&LexerInfo> {
        self.entries.iter().map(|e| e.tokenizer.info()).collect()
    }

    /// Create a registry holding the shared MAD-X lexer
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // MADX_INFO's globs are plain literals with `*`, they always translate.
        if let Err(err) = registry.register(MadxLexer::shared()) {
            tracing::warn!(%err, "could not register the MAD-X lexer");
        }
        registry
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn glob_to_regex(glob: &str) -> Result<Regex, RegistryError> {
    let body = regex::escape(glob).replace(r"\*", ".*").replace(r"\?", ".");
    Regex::new(&format!("^{body}$")).map_err(|err| RegistryError::InvalidFilename {
        glob: glob.to_string(),
        message: err.to_string(),
    })
}
