//! Token types
//!
//!     The scanner classifies every byte of the input into exactly one token. A token is a
//!     kind plus the byte range it covers and the slice of source text in that range.
//!
//! Token Kinds
//!
//!     The set of kinds is closed and deliberately small: it is what a highlighter needs to
//!     pick a colour, nothing more. Kinds mirror the usual highlighting categories:
//!
//!         - Comment, CommentMultiline: `! ...`, `// ...` and `/* ... */`
//!         - String: single or double quoted text
//!         - Keyword: control flow, declarations, built-in functions and constants
//!         - Operator, Punctuation
//!         - NameClass: command and element type names (`twiss`, `quadrupole`)
//!         - NameAttribute: attribute names inside commands and elements (`sequence`, `k1`)
//!         - NameVariable: labels and assigned variables
//!         - NameFunction: macro names and `exec` targets
//!         - Text: whitespace, values and anything unclassified

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Single line comment (`!`, `//`), also the inert text after an unconditional `stop;`
    Comment,
    /// Block comment body and delimiters
    CommentMultiline,
    String,
    Keyword,
    Operator,
    Punctuation,
    /// Whitespace, values and unclassified text
    Text,
    /// Command or element type name
    NameClass,
    NameAttribute,
    /// Statement label or assigned variable
    NameVariable,
    /// Macro name or `exec` target
    NameFunction,
}

/// Every token kind, in declaration order.
pub const ALL_TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::Comment,
    TokenKind::CommentMultiline,
    TokenKind::String,
    TokenKind::Keyword,
    TokenKind::Operator,
    TokenKind::Punctuation,
    TokenKind::Text,
    TokenKind::NameClass,
    TokenKind::NameAttribute,
    TokenKind::NameVariable,
    TokenKind::NameFunction,
];

impl TokenKind {
    /// Dotted, hierarchical name of the kind (`Name.Class`, `Comment.Multiline`).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::CommentMultiline => "Comment.Multiline",
            TokenKind::String => "String",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Text => "Text",
            TokenKind::NameClass => "Name.Class",
            TokenKind::NameAttribute => "Name.Attribute",
            TokenKind::NameVariable => "Name.Variable",
            TokenKind::NameFunction => "Name.Function",
        }
    }

    /// Short CSS class used by Pygments-compatible stylesheets.
    ///
    /// Text has no class: it is rendered without a wrapping element.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Comment => "c",
            TokenKind::CommentMultiline => "cm",
            TokenKind::String => "s",
            TokenKind::Keyword => "k",
            TokenKind::Operator => "o",
            TokenKind::Punctuation => "p",
            TokenKind::Text => "",
            TokenKind::NameClass => "nc",
            TokenKind::NameAttribute => "na",
            TokenKind::NameVariable => "nv",
            TokenKind::NameFunction => "nf",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::CommentMultiline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified span of source text.
///
/// Tokens borrow their text from the source they were produced from. The span is a byte
/// range and always lies on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    /// Build a token for `span` of `source`.
    pub fn new(kind: TokenKind, source: &'src str, span: Range<usize>) -> Self {
        Token {
            kind,
            text: &source[span.clone()],
            span,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// True when the token is only whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Text && self.text.chars().all(char::is_whitespace)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
