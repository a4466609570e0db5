//! This module provides functions for analyzing Turing Machine programs to spot likely
//! mistakes before execution. Findings are diagnostics only: a program that produces
//! diagnostics is still valid and runs exactly the same way.

use crate::parser::Program;
use std::collections::HashSet;
use std::fmt;

/// Represents a suspicious construct found in a program.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Diagnostic {
    /// A transition for `(state, symbol)` was replaced by a later one with the same key.
    ShadowedTransition { state: String, symbol: String },
    /// Final states that are neither the initial state nor the target of any transition.
    UnreachableFinalStates(Vec<String>),
    /// The initial state has no outgoing transitions, so the machine halts on the first step.
    InitialStateWithoutTransitions(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ShadowedTransition { state, symbol } => write!(
                f,
                "Transition ({state}, {symbol}) is defined more than once; the last one is used"
            ),
            Diagnostic::UnreachableFinalStates(states) => {
                write!(f, "Final states never reached by any transition: {states:?}")
            }
            Diagnostic::InitialStateWithoutTransitions(state) => {
                write!(f, "Initial state {state} has no outgoing transitions")
            }
        }
    }
}

/// Analyzes a given Turing Machine `Program`.
///
/// # Returns
///
/// All diagnostics found, in a stable order. An empty vector means nothing suspicious.
pub fn analyze(program: &Program) -> Vec<Diagnostic> {
    let mut diagnostics = check_shadowed_transitions(program);
    diagnostics.extend(check_unreachable_final_states(program));
    diagnostics.extend(check_initial_state(program));
    diagnostics
}

/// Reports every `(from, read)` key that appeared more than once.
fn check_shadowed_transitions(program: &Program) -> Vec<Diagnostic> {
    let mut reported = HashSet::new();

    program
        .shadowed
        .iter()
        .filter(|key| reported.insert(*key))
        .map(|(state, symbol)| Diagnostic::ShadowedTransition {
            state: state.clone(),
            symbol: symbol.clone(),
        })
        .collect()
}

/// Reports final states that no transition leads to.
fn check_unreachable_final_states(program: &Program) -> Option<Diagnostic> {
    let targets: HashSet<&str> = program
        .table
        .iter()
        .map(|(_, transition)| transition.next_state.as_str())
        .chain(std::iter::once(program.initial_state.as_str()))
        .collect();

    let mut unreachable: Vec<String> = program
        .final_states
        .iter()
        .filter(|state| !targets.contains(state.as_str()))
        .cloned()
        .collect();

    if unreachable.is_empty() {
        return None;
    }

    unreachable.sort();
    Some(Diagnostic::UnreachableFinalStates(unreachable))
}

/// Reports an initial state that can't make a single move.
fn check_initial_state(program: &Program) -> Option<Diagnostic> {
    if program.table.has_outgoing(&program.initial_state) {
        return None;
    }

    Some(Diagnostic::InitialStateWithoutTransitions(
        program.initial_state.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_clean_program() {
        let program = parse(
            r#"{
                "initial": "q0",
                "final": ["q1"],
                "transitions": [{"from": "q0", "to": "q1", "read": "a", "write": "b", "dir": "R"}]
            }"#,
        )
        .unwrap();

        assert!(analyze(&program).is_empty());
    }

    #[test]
    fn test_shadowed_transition_reported_once() {
        let program = parse(
            r#"{
                "initial": "q0",
                "final": ["q1"],
                "transitions": [
                    {"from": "q0", "to": "q1", "read": "a", "write": "b", "dir": "R"},
                    {"from": "q0", "to": "q1", "read": "a", "write": "c", "dir": "R"},
                    {"from": "q0", "to": "q1", "read": "a", "write": "d", "dir": "R"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            analyze(&program),
            vec![Diagnostic::ShadowedTransition {
                state: "q0".to_string(),
                symbol: "a".to_string(),
            }]
        );
    }

    #[test]
    fn test_unreachable_final_states() {
        let program = parse(
            r#"{
                "initial": "q0",
                "final": ["q0", "z", "y"],
                "transitions": [{"from": "q0", "to": "q1", "read": "a", "write": "b", "dir": "R"}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            check_unreachable_final_states(&program),
            Some(Diagnostic::UnreachableFinalStates(vec![
                "y".to_string(),
                "z".to_string()
            ]))
        );
    }

    #[test]
    fn test_initial_state_without_transitions() {
        let program = parse(r#"{"initial": "q0", "final": ["q0"], "transitions": []}"#).unwrap();

        let diagnostics = analyze(&program);

        assert_eq!(
            diagnostics,
            vec![Diagnostic::InitialStateWithoutTransitions("q0".to_string())]
        );
        assert!(diagnostics[0].to_string().contains("q0"));
    }
}
