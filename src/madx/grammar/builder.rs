//! Grammar builder
//!
//!     Turns named lists of [RuleSpec]s into an immutable [Grammar]. Building happens once per
//!     lexer and is deterministic: states keep their insertion order and rules keep their
//!     declared order, so the same tables always produce the same grammar.
//!
//!     The builder is also where table mistakes are caught. Every problem it can detect is a
//!     programmer error in the tables, reported as a [GrammarError] rather than discovered
//!     mid-scan:
//!         - patterns that do not compile, or that can match the empty string
//!         - pushes to states that do not exist, includes of unknown fragments
//!         - include cycles
//!         - group mappings whose length differs from the pattern's capture count

use super::rule::{Action, Next, Rule, RuleSpec, State, StateId, Transition};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Name of the entry state every grammar must define
pub const ROOT_STATE: &str = "root";

/// Errors found while building a grammar
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// A pattern failed to compile
    InvalidPattern {
        state: String,
        pattern: String,
        message: String,
    },
    /// A pattern matches the empty string and could stall the scanner
    EmptyMatch { state: String, pattern: String },
    /// A push names a state that was never defined
    UnknownState { state: String, target: String },
    /// An include names neither a fragment nor a state
    UnknownFragment { state: String, fragment: String },
    /// A fragment includes itself, directly or through other fragments
    RecursiveInclude { chain: Vec<String> },
    /// Two states share a name
    DuplicateState(String),
    /// A group mapping does not line up with the pattern's capture groups
    GroupMismatch {
        state: String,
        pattern: String,
        groups: usize,
        kinds: usize,
    },
    /// No state named `root`
    MissingRoot,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::InvalidPattern {
                state,
                pattern,
                message,
            } => write!(f, "Invalid pattern {pattern:?} in state '{state}': {message}"),
            GrammarError::EmptyMatch { state, pattern } => {
                write!(f, "Pattern {pattern:?} in state '{state}' matches the empty string")
            }
            GrammarError::UnknownState { state, target } => {
                write!(f, "State '{state}' pushes unknown state '{target}'")
            }
            GrammarError::UnknownFragment { state, fragment } => {
                write!(f, "State '{state}' includes unknown fragment '{fragment}'")
            }
            GrammarError::RecursiveInclude { chain } => {
                write!(f, "Recursive include: {}", chain.join(" -> "))
            }
            GrammarError::DuplicateState(name) => write!(f, "State '{name}' is defined twice"),
            GrammarError::GroupMismatch {
                state,
                pattern,
                groups,
                kinds,
            } => write!(
                f,
                "Pattern {pattern:?} in state '{state}' has {groups} groups but maps {kinds} kinds"
            ),
            GrammarError::MissingRoot => write!(f, "Grammar has no '{ROOT_STATE}' state"),
        }
    }
}

impl std::error::Error for GrammarError {}

/// An immutable, compiled set of lexical states
///
/// States live in a flat table and refer to each other by [StateId], so the grammar has no
/// cycles of ownership and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Grammar {
    states: Vec<State>,
    index: HashMap<String, StateId>,
    root: StateId,
}

impl Grammar {
    /// The entry state
    pub fn root(&self) -> StateId {
        self.root
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// All states, in definition order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Total number of compiled rules over all states
    pub fn rule_count(&self) -> usize {
        self.states.iter().map(|s| s.rules.len()).sum()
    }
}

/// Collects fragments and states, then compiles them into a [Grammar]
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    fragments: HashMap<String, Vec<RuleSpec>>,
    states: Vec<(String, Vec<RuleSpec>)>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fragment: a rule list that is only ever spliced into states.
    ///
    /// Registering a fragment under an existing name replaces it.
    pub fn fragment(mut self, name: &str, rules: Vec<RuleSpec>) -> Self {
        self.fragments.insert(name.to_string(), rules);
        self
    }

    /// Register a state.
    pub fn state(mut self, name: &str, rules: Vec<RuleSpec>) -> Self {
        self.states.push((name.to_string(), rules));
        self
    }

    /// Resolve includes and transitions and compile every pattern.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let mut index = HashMap::new();
        for (i, (name, _)) in self.states.iter().enumerate() {
            if index.insert(name.clone(), StateId(i)).is_some() {
                return Err(GrammarError::DuplicateState(name.clone()));
            }
        }
        let root = *index.get(ROOT_STATE).ok_or(GrammarError::MissingRoot)?;

        let mut states = Vec::with_capacity(self.states.len());
        for (name, specs) in &self.states {
            let mut flat = Vec::new();
            let mut chain = vec![name.clone()];
            self.expand(name, specs, &mut chain, &mut flat)?;

            let rules = flat
                .into_iter()
                .map(|(pattern, action, next)| compile(name, pattern, action, next, &index))
                .collect::<Result<Vec<_>, _>>()?;
            states.push(State {
                name: name.clone(),
                rules,
            });
        }

        let grammar = Grammar {
            states,
            index,
            root,
        };
        tracing::debug!(
            states = grammar.states.len(),
            rules = grammar.rule_count(),
            "built grammar"
        );
        Ok(grammar)
    }

    /// Flatten `specs`, splicing in included fragments depth first.
    fn expand<'b>(
        &'b self,
        state: &str,
        specs: &'b [RuleSpec],
        chain: &mut Vec<String>,
        out: &mut Vec<(&'b str, &'b Action, &'b Next)>,
    ) -> Result<(), GrammarError> {
        for spec in specs {
            match spec {
                RuleSpec::Match {
                    pattern,
                    action,
                    next,
                } => out.push((pattern.as_str(), action, next)),
                RuleSpec::Include(name) => {
                    if chain.iter().any(|c| c == name) {
                        let mut chain = chain.clone();
                        chain.push(name.clone());
                        return Err(GrammarError::RecursiveInclude { chain });
                    }
                    let included = self.lookup(name).ok_or_else(|| GrammarError::UnknownFragment {
                        state: state.to_string(),
                        fragment: name.clone(),
                    })?;
                    chain.push(name.clone());
                    self.expand(state, included, chain, out)?;
                    chain.pop();
                }
            }
        }
        Ok(())
    }

    /// Fragments shadow states of the same name.
    fn lookup(&self, name: &str) -> Option<&[RuleSpec]> {
        self.fragments.get(name).map(|r| r.as_slice()).or_else(|| {
            self.states
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, r)| r.as_slice())
        })
    }
}

fn compile(
    state: &str,
    pattern: &str,
    action: &Action,
    next: &Next,
    index: &HashMap<String, StateId>,
) -> Result<Rule, GrammarError> {
    let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|e| {
        GrammarError::InvalidPattern {
            state: state.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        }
    })?;

    let in_context = if pattern.contains(r"\b") || pattern.contains(r"\B") {
        let anchored = format!(r"\A(?s:.)(?:{pattern})");
        Some(Regex::new(&anchored).map_err(|e| GrammarError::InvalidPattern {
            state: state.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?)
    } else {
        None
    };

    if regex.is_match("") {
        return Err(GrammarError::EmptyMatch {
            state: state.to_string(),
            pattern: pattern.to_string(),
        });
    }

    if let Action::ByGroups(kinds) = action {
        let groups = regex.captures_len() - 1;
        if groups != kinds.len() {
            return Err(GrammarError::GroupMismatch {
                state: state.to_string(),
                pattern: pattern.to_string(),
                groups,
                kinds: kinds.len(),
            });
        }
    }

    let transition = match next {
        Next::Stay => Transition::Stay,
        Next::Pop => Transition::Pop,
        Next::Push(target) => {
            let id = index
                .get(target)
                .copied()
                .ok_or_else(|| GrammarError::UnknownState {
                    state: state.to_string(),
                    target: target.clone(),
                })?;
            Transition::Push(id)
        }
    };

    Ok(Rule {
        pattern: pattern.to_string(),
        regex,
        in_context,
        action: action.clone(),
        transition,
    })
}
