//! # madx-lexer
//!
//! A syntax-highlighting tokenizer for the MAD-X accelerator description language.
//!
//! File Layout
//!
//! The crate is organized around a single stateful scanner. Everything else is a thin layer
//! on top of it:
//!
//! src/madx
//!   ├── token       Token kinds and spans
//!   ├── grammar     Rule/state data model, the table builder and the MAD-X tables
//!   ├── lexing      The scan driver and token stream transformations
//!   ├── registry    Registration metadata and lexer lookup by alias or filename
//!   ├── formats     Output formats for token streams
//!   ├── config      Layered configuration loading
//!   └── testing     Assertion helpers shared by unit and integration tests
//!
//! Most callers only need [`madx::tokenize`]:
//!
//! ```rust,ignore
//! use madx_lexer::madx::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("twiss, sequence=lhcb1;").map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::NameClass);
//! ```

pub mod madx;
