//! Scan driver
//!
//!     Walks the source with a stack of states, starting at `root`. Each step tries the rules
//!     of the state on top of the stack, in order, anchored at the current offset:
//!
//!         - the first rule that matches emits its token(s), applies its transition and
//!           moves the offset to the end of the match
//!         - if nothing matches, the current character is emitted as Text
//!
//!     Rules see the whole source, not just the text after the offset, so a word boundary
//!     at the offset depends on the character before it.
//!
//!     Every step advances by at least one character, so a scan always terminates and the
//!     tokens it yields cover the source exactly, in order, without gaps or overlaps.
//!
//! Group Mappings
//!
//!     A rule with a group mapping emits one token per participating, non-empty capture
//!     group. Bytes of the match that fall outside every group are emitted as Text, so a
//!     loosely written pattern can never break coverage.
//!
//! Zero-width Matches
//!
//!     The builder rejects patterns that match the empty string, but a pattern can still match
//!     zero bytes in some contexts (a lone `\b`, for instance). Such matches are treated as
//!     no match, which keeps the forward progress guarantee independent of the tables.

use crate::madx::grammar::{Action, Grammar, Rule, StateId, Transition};
use crate::madx::token::{Token, TokenKind};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;

/// A lazy token stream over one source text
///
/// Created by [MadxLexer::tokenize](super::MadxLexer::tokenize) or
/// [tokenize](super::tokenize). Each stream owns its own state stack; the grammar is only
/// borrowed.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    grammar: &'a Grammar,
    source: &'a str,
    offset: usize,
    stack: Vec<StateId>,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(grammar: &'a Grammar, source: &'a str) -> Self {
        Tokens {
            grammar,
            source,
            offset: 0,
            stack: vec![grammar.root()],
            pending: VecDeque::new(),
        }
    }

    /// Number of states on the stack (1 when back at `root`).
    ///
    /// Reflects the stack after the last scan step, which may be ahead of the last token
    /// returned when a single step produced several tokens.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Name of the state on top of the stack.
    pub fn current_state(&self) -> &'a str {
        &self.grammar.state(self.top()).name
    }

    /// Byte offset where the next scan step starts.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn top(&self) -> StateId {
        // The stack never drops below the root state.
        self.stack.last().copied().unwrap_or_else(|| self.grammar.root())
    }

    /// Run one scan step, queueing at least one token.
    fn step(&mut self) {
        let grammar = self.grammar;
        let state = grammar.state(self.top());
        for rule in &state.rules {
            if let Some((len, transition)) = self.try_rule(rule) {
                self.offset += len;
                self.apply(transition);
                return;
            }
        }

        let width = self.source[self.offset..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.emit(TokenKind::Text, 0..width);
        self.offset += width;
    }

    /// Queue the tokens of `rule` if it matches at the current offset.
    ///
    /// Returns the match length and the rule's transition.
    fn try_rule(&mut self, rule: &Rule) -> Option<(usize, Transition)> {
        match &rule.action {
            Action::Emit(kind) => {
                let len = rule.find_at(self.source, self.offset)?;
                if len == 0 {
                    tracing::trace!(pattern = %rule.pattern, offset = self.offset, "ignored empty match");
                    return None;
                }
                self.emit(*kind, 0..len);
                Some((len, rule.transition))
            }
            Action::ByGroups(kinds) => {
                let (len, captures) = rule.captures_at(self.source, self.offset)?;
                if len == 0 {
                    tracing::trace!(pattern = %rule.pattern, offset = self.offset, "ignored empty match");
                    return None;
                }

                let mut cursor = 0;
                for (kind, group) in kinds.iter().zip(captures) {
                    let Some(group) = group else {
                        continue;
                    };
                    if group.is_empty() || group.start < cursor {
                        continue;
                    }
                    if group.start > cursor {
                        self.emit(TokenKind::Text, cursor..group.start);
                    }
                    cursor = group.end;
                    self.emit(*kind, group);
                }
                if cursor < len {
                    self.emit(TokenKind::Text, cursor..len);
                }
                Some((len, rule.transition))
            }
        }
    }

    /// Queue a token for `range`, relative to the current offset.
    fn emit(&mut self, kind: TokenKind, range: Range<usize>) {
        let span = self.offset + range.start..self.offset + range.end;
        self.pending.push_back(Token::new(kind, self.source, span));
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(id) => {
                self.stack.push(id);
                tracing::trace!(
                    state = %self.grammar.state(id).name,
                    depth = self.stack.len(),
                    "push"
                );
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    tracing::trace!(
                        state = %self.current_state(),
                        depth = self.stack.len(),
                        "pop"
                    );
                }
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pending.is_empty() && self.offset < self.source.len() {
            self.step();
        }
        self.pending.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.offset;
        let lower = self.pending.len() + usize::from(remaining > 0);
        (lower, Some(self.pending.len() + remaining))
    }
}

impl FusedIterator for Tokens<'_> {}
