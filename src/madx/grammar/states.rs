//! The MAD-X state table
//!
//! Entry point is `root`. Everything else is reached by pushing from there:
//!
//!     root ──┬── macro ─── macro (nested block) ...
//!            ├── stop                          (after an unconditional stop;)
//!            ├── comment ─── comment ...       (block comments nest)
//!            ├── exec
//!            ├── assignment
//!            ├── seqedit ─── seqedit.<command>
//!            ├── cmd.<command>
//!            └── elem.<type>, elem.generic
//!
//! `macro` shares its repertoire with `root` through the `root_cmds` fragment, so every
//! state reachable from `root` is also reachable from a macro body.
//!
//! Precedence inside `root_cmds`, first match wins:
//!     comments, exec, comparisons, assignments, declarations, named element types, the
//!     generic `label: anything` element, seqedit, commands, keywords, punctuation and
//!     finally a run of text. The run stops short of comment and string openers, so a
//!     comment after an unknown word is still a comment.
//!
//! Comparisons sit ahead of assignments so that `a == b` inside a condition does not open an
//! assignment statement, and named element types sit ahead of the generic element so that
//! `qf: quadrupole` gets the quadrupole attributes.

use super::builder::{Grammar, GrammarBuilder, GrammarError, ROOT_STATE};
use super::generators::{
    command_state, command_trigger, element_state, element_trigger, generic_element_trigger,
    keywords, IDENTIFIER,
};
use super::rule::{groups, include, rule, RuleSpec};
use super::tables::{
    CommandSpec, CONSTANTS, COMMANDS, CONTROL_KEYWORDS, DECLARATION_KEYWORDS, ELEMENTS,
    MATH_FUNCTIONS, SEQEDIT_COMMANDS, STOP_KEYWORDS,
};
use crate::madx::token::TokenKind;

pub const GENERIC_ELEMENT_STATE: &str = "elem.generic";

/// Build the complete MAD-X grammar.
pub fn madx_grammar() -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new()
        .fragment("strings", strings())
        .fragment("comments", comments())
        .fragment("punctuation", vec![rule(r"[,(){}\[\]]", TokenKind::Punctuation)])
        .fragment("expressions", expressions())
        .fragment("root_cmds", root_cmds())
        .state(ROOT_STATE, root())
        .state("macro", macro_body())
        .state("stop", stop())
        .state("comment", comment())
        .state("exec", exec())
        .state("assignment", command_state(&[]))
        .state("seqedit", seqedit());

    for command in COMMANDS {
        builder = builder.state(&command.state_name(), command_state(command.attributes));
    }
    for element in ELEMENTS {
        builder = builder.state(&element.state_name(), element_state(element.attributes));
    }
    builder = builder.state(GENERIC_ELEMENT_STATE, element_state(&[]));
    for command in SEQEDIT_COMMANDS {
        builder = builder.state(&seqedit_state_name(command), command_state(command.attributes));
    }

    builder.build()
}

fn seqedit_state_name(command: &CommandSpec) -> String {
    format!("seqedit.{}", command.names[0])
}

fn strings() -> Vec<RuleSpec> {
    vec![
        rule(r#""[^"\n]*"?"#, TokenKind::String),
        rule(r"'[^'\n]*'?", TokenKind::String),
    ]
}

fn comments() -> Vec<RuleSpec> {
    vec![
        rule(r"(?:!|//)[^\n]*", TokenKind::Comment),
        rule(r"/\*", TokenKind::CommentMultiline).push("comment"),
    ]
}

fn expressions() -> Vec<RuleSpec> {
    vec![
        keywords(MATH_FUNCTIONS, TokenKind::Keyword),
        keywords(CONSTANTS, TokenKind::Keyword),
        rule(r"(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?", TokenKind::Text),
        rule(IDENTIFIER, TokenKind::Text),
        rule(r":=|->|==|<>|>=|<=|[-+*/^=<>]", TokenKind::Operator),
        include("punctuation"),
        rule(r"\s+", TokenKind::Text),
    ]
}

fn root() -> Vec<RuleSpec> {
    vec![
        include("strings"),
        rule(r"\s+", TokenKind::Text),
        // name(args): macro = {
        groups(
            format!(
                r"({IDENTIFIER})(\s*)(\([^)\n]*\))?(\s*)(:?)(\s*)((?i:macro))(\s*)(=)(\s*)(\{{)"
            ),
            &[
                TokenKind::NameFunction,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Keyword,
                TokenKind::Text,
                TokenKind::Operator,
                TokenKind::Text,
                TokenKind::Punctuation,
            ],
        )
        .push("macro"),
        groups(
            format!(r"\b((?i:{}))(\s*)(;)", STOP_KEYWORDS.join("|")),
            &[TokenKind::Keyword, TokenKind::Text, TokenKind::Punctuation],
        )
        .push("stop"),
        include("root_cmds"),
    ]
}

fn root_cmds() -> Vec<RuleSpec> {
    let mut rules = vec![
        include("comments"),
        rule(r"\b(?i:exec)\b", TokenKind::Keyword).push("exec"),
        groups(
            format!(r"({IDENTIFIER})(\s*)(==|<>|>=|<=|<|>)"),
            &[TokenKind::Text, TokenKind::Text, TokenKind::Operator],
        ),
        groups(
            format!(r"({IDENTIFIER})(\s*)(:?=)"),
            &[TokenKind::NameVariable, TokenKind::Text, TokenKind::Operator],
        )
        .push("assignment"),
        keywords(DECLARATION_KEYWORDS, TokenKind::Keyword),
    ];
    rules.extend(ELEMENTS.iter().map(element_trigger));
    rules.push(generic_element_trigger(GENERIC_ELEMENT_STATE));
    rules.push(rule(r"\b(?i:seqedit)\b", TokenKind::Keyword).push("seqedit"));
    rules.extend(
        COMMANDS
            .iter()
            .map(|command| command_trigger(command, &command.state_name())),
    );
    rules.extend([
        keywords(CONTROL_KEYWORDS, TokenKind::Keyword),
        keywords(STOP_KEYWORDS, TokenKind::Keyword),
        keywords(MATH_FUNCTIONS, TokenKind::Keyword),
        rule(r"[;,(){}\[\]]", TokenKind::Punctuation),
        rule(r#"[^\n;{}!/"']+"#, TokenKind::Text),
        rule(r"(?s).", TokenKind::Text),
    ]);
    rules
}

fn macro_body() -> Vec<RuleSpec> {
    vec![
        include("strings"),
        rule(r"\s+", TokenKind::Text),
        rule(r"\{", TokenKind::Punctuation).push("macro"),
        rule(r"\}", TokenKind::Punctuation).pop(),
        include("root_cmds"),
    ]
}

fn stop() -> Vec<RuleSpec> {
    vec![
        rule(r"[^}]+", TokenKind::Comment),
        rule(r"\}", TokenKind::Punctuation).pop(),
    ]
}

fn comment() -> Vec<RuleSpec> {
    vec![
        rule(r"[^*/]+", TokenKind::CommentMultiline),
        rule(r"/\*", TokenKind::CommentMultiline).push("comment"),
        rule(r"\*/", TokenKind::CommentMultiline).pop(),
        rule(r"[*/]", TokenKind::CommentMultiline),
    ]
}

fn exec() -> Vec<RuleSpec> {
    vec![
        rule(r"\s+", TokenKind::Text),
        rule(",", TokenKind::Punctuation),
        // exec, name(args) and exec(name, args) both end the state once the name is tagged
        rule(IDENTIFIER, TokenKind::NameFunction).pop(),
        groups(
            format!(r"(\()(\s*)({IDENTIFIER})"),
            &[
                TokenKind::Punctuation,
                TokenKind::Text,
                TokenKind::NameFunction,
            ],
        )
        .pop(),
        rule(r"\(", TokenKind::Punctuation).pop(),
        rule(";", TokenKind::Punctuation).pop(),
        rule(r"(?s).", TokenKind::Text),
    ]
}

fn seqedit() -> Vec<RuleSpec> {
    let mut rules = vec![
        include("strings"),
        include("comments"),
        rule(r"\s+", TokenKind::Text),
        rule(r"\b(?i:endedit)\b", TokenKind::Keyword).pop(),
        groups(
            r"\b((?i:sequence))(\s*)(=)",
            &[TokenKind::NameAttribute, TokenKind::Text, TokenKind::Operator],
        ),
    ];
    rules.extend(
        SEQEDIT_COMMANDS
            .iter()
            .map(|command| command_trigger(command, &seqedit_state_name(command))),
    );
    rules.extend([
        rule(";", TokenKind::Punctuation),
        include("expressions"),
        rule(r"(?s).", TokenKind::Text),
    ]);
    rules
}
