//! Output formats for token streams
//!
//! Each format implements the [Formatter] trait and is looked up by name in a
//! [FormatRegistry]:
//! - `simple`: one line per token with kind, byte span and text, for debugging and tests
//! - `json`, `yaml`: the token list serialized with serde
//! - `html`: `<span>` elements carrying Pygments short CSS classes
//! - `terminal`: ANSI coloured source text

pub mod html;
pub mod registry;
pub mod serialized;
pub mod simple;
pub mod terminal;

pub use html::HtmlFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use simple::SimpleFormatter;
pub use terminal::TerminalFormatter;
