//! Serde-backed formats
//!
//! The token list is serialized as-is: each token becomes a record with its `kind`, `text` and
//! `span` (`start`, `end` byte offsets).

use super::registry::{FormatError, Formatter};
use crate::madx::token::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Token list as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Token list as YAML"
    }
}
