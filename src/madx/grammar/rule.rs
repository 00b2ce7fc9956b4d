//! Rules and states
//!
//!     There are two layers here. Rule specs ([RuleSpec]) are what grammar tables are written
//!     in: a pattern, what to emit and where to go next, with states referred to by name and
//!     shared fragments pulled in by [include]. The builder turns those into compiled [Rule]s,
//!     where the regex is compiled once and the next state is a resolved [StateId].
//!
//!     Patterns are written unanchored and without line anchors. The builder anchors them at
//!     the scan position, so a rule either matches right where the scanner stands or not at
//!     all. Word boundaries still see the character before the scan position: a rule using
//!     `\b` or `\B` is also compiled with that character in front of it, so `\bpi\b` does
//!     not match the tail of `2pi`.

use crate::madx::token::TokenKind;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// What a matching rule emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One token spanning the whole match
    Emit(TokenKind),
    /// One token per capture group, left to right
    ByGroups(Vec<TokenKind>),
}

/// Symbolic state transition, as written in grammar tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    Stay,
    Push(String),
    Pop,
}

/// An entry of a state or fragment definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    Match {
        pattern: String,
        action: Action,
        next: Next,
    },
    /// Splice in the rules of a named fragment (or state) at this position
    Include(String),
}

impl RuleSpec {
    /// Push `state` after this rule matches.
    pub fn push(self, state: &str) -> Self {
        self.with_next(Next::Push(state.to_string()))
    }

    /// Pop the current state after this rule matches.
    pub fn pop(self) -> Self {
        self.with_next(Next::Pop)
    }

    fn with_next(self, next: Next) -> Self {
        match self {
            RuleSpec::Match {
                pattern, action, ..
            } => RuleSpec::Match {
                pattern,
                action,
                next,
            },
            other @ RuleSpec::Include(_) => other,
        }
    }
}

/// A rule emitting a single token of `kind`.
pub fn rule(pattern: impl Into<String>, kind: TokenKind) -> RuleSpec {
    RuleSpec::Match {
        pattern: pattern.into(),
        action: Action::Emit(kind),
        next: Next::Stay,
    }
}

/// A rule emitting one token per capture group.
pub fn groups(pattern: impl Into<String>, kinds: &[TokenKind]) -> RuleSpec {
    RuleSpec::Match {
        pattern: pattern.into(),
        action: Action::ByGroups(kinds.to_vec()),
        next: Next::Stay,
    }
}

/// Include a fragment by name.
pub fn include(name: &str) -> RuleSpec {
    RuleSpec::Include(name.to_string())
}

/// Index of a state in a [Grammar](super::Grammar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolved state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(StateId),
    Pop,
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// The pattern as written in the table, before anchoring
    pub pattern: String,
    pub(crate) regex: Regex,
    /// `regex` preceded by one arbitrary character, for patterns with word boundaries
    pub(crate) in_context: Option<Regex>,
    pub action: Action,
    pub transition: Transition,
}

impl Rule {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Length of the match at `offset` in `source`, if any.
    pub fn find_at(&self, source: &str, offset: usize) -> Option<usize> {
        let (regex, haystack, shift) = self.haystack(source, offset);
        regex.find(haystack).map(|m| m.end() - shift)
    }

    /// The match at `offset` in `source`: its length and the range of every capture group,
    /// relative to `offset`.
    pub fn captures_at(
        &self,
        source: &str,
        offset: usize,
    ) -> Option<(usize, Vec<Option<Range<usize>>>)> {
        let (regex, haystack, shift) = self.haystack(source, offset);
        let captures = regex.captures(haystack)?;
        let len = captures.get(0).map_or(shift, |m| m.end()) - shift;
        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.start() - shift..m.end() - shift))
            .collect();
        Some((len, groups))
    }

    fn haystack<'h>(&self, source: &'h str, offset: usize) -> (&Regex, &'h str, usize) {
        match (&self.in_context, source[..offset].chars().next_back()) {
            (Some(regex), Some(previous)) => {
                let start = offset - previous.len_utf8();
                (regex, &source[start..], offset - start)
            }
            _ => (&self.regex, &source[offset..], 0),
        }
    }
}

/// A named, ordered list of compiled rules
#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub rules: Vec<Rule>,
}
