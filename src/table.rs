//! The transition table: an immutable map from `(state, symbol)` to a [`Transition`].

use crate::types::Transition;
use std::collections::HashMap;

/// A deterministic transition function.
///
/// A table can only be built by collecting keyed transitions, so it is never
/// observable half-built. When two entries share a key the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<(String, String), Transition>,
}

impl TransitionTable {
    /// Looks up the transition for the given state and symbol under the head.
    pub fn get(&self, state: &str, symbol: &str) -> Option<&Transition> {
        // Borrowed tuple keys can't be looked up without allocating.
        self.rules.get(&(state.to_string(), symbol.to_string()))
    }

    /// Returns the number of distinct `(state, symbol)` keys.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over `((state, symbol), transition)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &Transition)> {
        self.rules.iter()
    }

    /// Returns true if any transition leaves `state`.
    pub fn has_outgoing(&self, state: &str) -> bool {
        self.rules.keys().any(|(from, _)| from == state)
    }
}

impl FromIterator<((String, String), Transition)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = ((String, String), Transition)>>(iter: I) -> Self {
        let mut rules = HashMap::new();
        for (key, transition) in iter {
            rules.insert(key, transition);
        }
        Self { rules }
    }
}
