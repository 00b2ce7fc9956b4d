//! Rule generators
//!
//!     Most of the MAD-X grammar is repetitive: every command and every element type gets a
//!     sub-state of the same shape, differing only in the attribute names it highlights.
//!     These functions produce those rule lists from the name tables.
//!
//!     A command or element sub-state looks like:
//!         1. strings and comments pass through
//!         2. `;` ends the statement and pops back to the caller
//!         3. attribute names, optionally followed by `=` or `:=`
//!         4. expressions: functions, constants, numbers, words, operators, punctuation
//!         5. any other single character, as text

use super::rule::{groups, include, rule, RuleSpec};
use super::tables::{CommandSpec, ElementSpec, COMMON_ELEMENT_ATTRIBUTES};
use crate::madx::token::TokenKind;

/// Labels, variables and macro names. Matched case-sensitively, as written.
pub const IDENTIFIER: &str = r"[A-Za-z_][\w.]*";

/// Join regex fragments into an alternation body, verbatim.
pub fn alternation(names: &[&str]) -> String {
    names.join("|")
}

/// A case-insensitive, word-bounded match of any of `names`.
pub fn keywords(names: &[&str], kind: TokenKind) -> RuleSpec {
    rule(format!(r"\b(?i:{})\b", alternation(names)), kind)
}

/// Attribute names, with the assignment operator that may follow them.
///
/// Returns `None` for an empty list: an empty alternation would match the empty string.
pub fn attribute_rule(attributes: &[&str]) -> Option<RuleSpec> {
    if attributes.is_empty() {
        return None;
    }
    Some(groups(
        format!(r"\b((?i:{}))\b(\s*)(:?=)?", alternation(attributes)),
        &[TokenKind::NameAttribute, TokenKind::Text, TokenKind::Operator],
    ))
}

/// The sub-state entered after a command name.
pub fn command_state(attributes: &[&str]) -> Vec<RuleSpec> {
    let mut rules = vec![
        include("strings"),
        include("comments"),
        rule(";", TokenKind::Punctuation).pop(),
    ];
    rules.extend(attribute_rule(attributes));
    rules.push(include("expressions"));
    rules.push(rule(r"(?s).", TokenKind::Text));
    rules
}

/// The sub-state entered after `label: TYPE`.
///
/// Element statements accept the type's own attributes followed by the common ones.
pub fn element_state(attributes: &[&str]) -> Vec<RuleSpec> {
    let merged: Vec<&str> = attributes
        .iter()
        .chain(COMMON_ELEMENT_ATTRIBUTES)
        .copied()
        .collect();
    command_state(&merged)
}

/// Command name, pushing the command's sub-state.
pub fn command_trigger(command: &CommandSpec, state: &str) -> RuleSpec {
    keywords(command.names, TokenKind::NameClass).push(state)
}

/// `label: TYPE`, pushing the element's sub-state.
pub fn element_trigger(element: &ElementSpec) -> RuleSpec {
    labelled(&format!(r"(?i:{})\b", alternation(element.names))).push(&element.state_name())
}

/// `label: anything`, for elements derived from user-defined classes.
pub fn generic_element_trigger(state: &str) -> RuleSpec {
    labelled(IDENTIFIER).push(state)
}

fn labelled(class: &str) -> RuleSpec {
    groups(
        format!(r"({IDENTIFIER})(\s*)(:)(\s*)({class})"),
        &[
            TokenKind::NameVariable,
            TokenKind::Text,
            TokenKind::Text,
            TokenKind::Text,
            TokenKind::NameClass,
        ],
    )
}
