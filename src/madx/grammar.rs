//! Grammar
//!
//!     The lexer is table driven. A grammar is a flat list of named states, each an ordered
//!     list of rules; the scanner only ever looks at the state on top of its stack and takes
//!     the first rule that matches where it stands.
//!
//!     Grammars are data. They are written as [RuleSpec](rule::RuleSpec) lists with symbolic
//!     state names, and compiled once by [GrammarBuilder](builder::GrammarBuilder) into an
//!     immutable [Grammar](builder::Grammar). Nothing in a grammar changes after it is built,
//!     so one grammar can back any number of concurrent scans.
//!
//! Layout
//!
//!     - [rule]: rule specs, compiled rules and states, transitions
//!     - [builder]: the compiler from specs to a grammar, and its errors
//!     - [tables]: MAD-X command, element, keyword and attribute names
//!     - [generators]: rule lists generated from the tables (command and element sub-states)
//!     - [states]: the MAD-X state table itself

pub mod builder;
pub mod generators;
pub mod rule;
pub mod states;
pub mod tables;

pub use builder::{Grammar, GrammarBuilder, GrammarError, ROOT_STATE};
pub use rule::{groups, include, rule, Action, Next, Rule, RuleSpec, State, StateId, Transition};
pub use states::madx_grammar;
