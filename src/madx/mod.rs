//! Main module for the MAD-X lexer

pub mod config;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod registry;
pub mod testing;
pub mod token;

pub use lexing::{tokenize, MadxLexer, Tokens};
pub use registry::{LexerInfo, LexerRegistry, Tokenizer, MADX_INFO};
pub use token::{Token, TokenKind};
