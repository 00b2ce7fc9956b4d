//! Plain token listing
//!
//! One line per token: the dotted kind name, the byte span and the text as a Rust string
//! literal, so whitespace and newlines stay visible.
//!
//!     Name.Class 0..5 "twiss"
//!     Punctuation 5..6 ";"

use super::registry::{FormatError, Formatter};
use crate::madx::token::Token;
use std::fmt::Write;

pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tokens {
            writeln!(
                out,
                "{} {}..{} {:?}",
                token.kind,
                token.start(),
                token.end(),
                token.text
            )
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One line per token: kind, byte span and text"
    }
}
