//! Lexer
//!
//! This module ties the MAD-X grammar to the scan driver.
//!
//! Structure:
//!     The grammar is compiled once, on first use, into a process-wide [MadxLexer]. Each call to
//!     [tokenize] starts a fresh [Tokens] stream over that shared grammar, so concurrent
//!     callers never share scan state.
//!
//! The pipeline consists of:
//! 1. Core tokenization: the stateful scanner in ./lexing/scanner.rs
//! 2. Optional transformations on the resulting token list ./lexing/transformations.rs
//!    (merging adjacent tokens of the same kind, for output formats that prefer fewer spans)
//!
//! Tokenization never fails. Unrecognized input degrades to Text tokens, and the tokens of a
//! stream always cover the source exactly.

pub mod scanner;
pub mod transformations;

pub use scanner::Tokens;
pub use transformations::merge_adjacent;

use crate::madx::grammar::{madx_grammar, Grammar, GrammarError};
use once_cell::sync::Lazy;

/// A lexer bound to a compiled grammar.
#[derive(Debug)]
pub struct MadxLexer {
    grammar: Grammar,
}

static MADX_LEXER: Lazy<MadxLexer> = Lazy::new(|| match MadxLexer::try_new() {
    Ok(lexer) => lexer,
    // The built-in tables are covered by tests; failing here means they were edited badly.
    Err(err) => panic!("built-in MAD-X grammar failed to build: {err}"),
});

impl MadxLexer {
    /// Compile the MAD-X grammar.
    pub fn try_new() -> Result<Self, GrammarError> {
        Ok(Self::with_grammar(madx_grammar()?))
    }

    /// A lexer over any compiled grammar.
    pub fn with_grammar(grammar: Grammar) -> Self {
        MadxLexer { grammar }
    }

    /// The process-wide lexer, compiled on first use.
    pub fn shared() -> &'static MadxLexer {
        &MADX_LEXER
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Start a token stream over `source`.
    pub fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        Tokens::new(&self.grammar, source)
    }
}

/// Tokenize MAD-X source with the shared lexer.
///
/// The returned stream is lazy; collect it or iterate it directly.
pub fn tokenize(source: &str) -> Tokens<'_> {
    MADX_LEXER.tokenize(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::madx::token::TokenKind;

    #[test]
    fn test_shared_lexer_is_reused() {
        assert!(std::ptr::eq(MadxLexer::shared(), MadxLexer::shared()));
    }

    #[test]
    fn test_tokenize_covers_source() {
        let source = "qf: quadrupole, l=1, k1=0.3;\ntwiss;";
        let text: String = tokenize(source).map(|t| t.text).collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_private_lexer_matches_shared() {
        let lexer = MadxLexer::try_new().unwrap();
        let source = "x := 3 * pi; ! done";
        let own: Vec<_> = lexer.tokenize(source).collect();
        let shared: Vec<_> = tokenize(source).collect();
        assert_eq!(own, shared);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut first = tokenize("/* open");
        let mut second = tokenize("twiss;");
        assert_eq!(first.next().map(|t| t.kind), Some(TokenKind::CommentMultiline));
        assert_eq!(second.next().map(|t| t.kind), Some(TokenKind::NameClass));
        assert_eq!(first.stack_depth(), 2);
        assert_eq!(second.stack_depth(), 2);
    }
}
