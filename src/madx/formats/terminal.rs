//! ANSI terminal output
//!
//! Reproduces the source text with each token coloured by kind. Text tokens are written
//! unstyled, and with colour disabled the output is the source text itself.

use super::registry::{FormatError, Formatter};
use crate::madx::token::{Token, TokenKind};
use crossterm::style::{style, Color, Stylize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        TerminalFormatter { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Foreground colour for a kind; `None` leaves the text unstyled.
pub fn kind_color(kind: TokenKind) -> Option<Color> {
    match kind {
        TokenKind::Comment | TokenKind::CommentMultiline => Some(Color::DarkGrey),
        TokenKind::String => Some(Color::Green),
        TokenKind::Keyword => Some(Color::Magenta),
        TokenKind::Operator => Some(Color::Yellow),
        TokenKind::Punctuation | TokenKind::Text => None,
        TokenKind::NameClass => Some(Color::Blue),
        TokenKind::NameAttribute => Some(Color::Cyan),
        TokenKind::NameVariable => Some(Color::Red),
        TokenKind::NameFunction => Some(Color::DarkYellow),
    }
}

impl Formatter for TerminalFormatter {
    fn name(&self) -> &str {
        "terminal"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tokens {
            let color = if self.color { kind_color(token.kind) } else { None };
            let written = match color {
                Some(color) if token.kind.is_comment() => {
                    write!(out, "{}", style(token.text).with(color).italic())
                }
                Some(color) => write!(out, "{}", style(token.text).with(color)),
                None => write!(out, "{}", token.text),
            };
            written.map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Source text with ANSI colours"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::madx::lexing::tokenize;

    fn render(formatter: TerminalFormatter, source: &str) -> String {
        let tokens: Vec<_> = tokenize(source).collect();
        formatter.format(&tokens).unwrap()
    }

    #[test]
    fn test_without_color_reproduces_source() {
        let source = "qf: quadrupole, l=1, k1=0.3; ! focusing\n";
        assert_eq!(render(TerminalFormatter::new(false), source), source);
    }

    #[test]
    fn test_with_color_adds_escape_codes() {
        let out = render(TerminalFormatter::new(true), "twiss;");
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("twiss"));
        assert!(out.ends_with(';'));
    }

    #[test]
    fn test_text_is_never_styled() {
        assert_eq!(kind_color(TokenKind::Text), None);
        assert_eq!(render(TerminalFormatter::new(true), "@#$"), "@#$");
    }
}
