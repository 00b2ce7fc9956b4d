//! Testing utilities for token assertions
//!
//! Shared by the unit tests and the integration tests under `tests/`.
//!
//! Sample Sources
//!
//!     Larger MAD-X inputs live in `tests/fixtures/`, one realistic job per file. Load them
//!     by name with [fixture] instead of pasting long scripts into test bodies, so the same
//!     vetted inputs back the statement tests, the property tests and the CLI tests.
//!
//! Assertions
//!
//!     Highlighting output is a flat token list, and most of it is whitespace. Tests usually
//!     care about the significant tokens only:
//!
//!         assert_tokens("twiss, sequence=lhcb1;", &[
//!             (TokenKind::NameClass, "twiss"),
//!             (TokenKind::Punctuation, ","),
//!             ...
//!         ]);
//!
//!     [assert_covers] checks the structural guarantee every token list must meet, regardless
//!     of classification: non-empty tokens, in order, without gaps, spelling out the source.

use crate::madx::lexing::tokenize;
use crate::madx::token::{Token, TokenKind};
use std::path::PathBuf;

/// Directory holding the sample sources.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a sample source by file name.
///
/// Panics if the sample does not exist.
pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Token kinds of `source`, whitespace included.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).map(|t| t.kind).collect()
}

/// Kinds and texts of `source`, without whitespace-only Text tokens.
pub fn significant(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .filter(|t| !t.is_whitespace())
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Assert the significant tokens of `source`.
#[track_caller]
pub fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let actual = significant(source);
    assert_eq!(
        actual, expected,
        "\nsignificant tokens of {source:?} differ"
    );
}

/// Assert that `tokens` are non-empty, contiguous and spell out `source` exactly.
#[track_caller]
pub fn assert_covers(source: &str, tokens: &[Token<'_>]) {
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        assert!(!token.is_empty(), "token #{i} {token} is empty");
        assert_eq!(
            token.start(),
            offset,
            "token #{i} {token} starts at {} but the previous one ended at {offset}",
            token.start()
        );
        assert_eq!(
            &source[token.span.clone()],
            token.text,
            "token #{i} text does not match its span"
        );
        offset = token.end();
    }
    assert_eq!(offset, source.len(), "tokens stop at {offset} of {}", source.len());
}
