//! This module provides the parser for Turing Machine specifications written as JSON.
//! It validates the document and builds a fully typed [`Program`] holding an immutable
//! [`TransitionTable`], or returns the first error found.

use crate::{
    table::TransitionTable,
    types::{Direction, Transition, TuringMachineError, DEFAULT_BLANK_SYMBOL},
};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Keys every transition record must carry, checked in this order.
const TRANSITION_KEYS: [&str; 5] = ["from", "to", "read", "write", "dir"];

/// A validated Turing Machine specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The state the machine starts in.
    pub initial_state: String,
    /// The accepting states.
    pub final_states: HashSet<String>,
    /// The symbol filling every cell that was never written.
    pub blank: String,
    /// The transition function.
    pub table: TransitionTable,
    /// `(from, read)` keys whose earlier record was replaced by a later one, in
    /// the order the replacements occurred. Informational only.
    pub shadowed: Vec<(String, String)>,
}

impl Program {
    /// Returns true if `state` is one of the accepting states.
    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }
}

/// Parses the given JSON text into a `Program`.
///
/// # Returns
///
/// * `Ok(Program)` if the document is valid.
/// * `Err(TuringMachineError::MalformedSpecification)` if the text is not valid JSON.
/// * Any error returned by [`from_value`].
pub fn parse(input: &str) -> Result<Program, TuringMachineError> {
    let document: Value = serde_json::from_str(input)?;
    from_value(&document)
}

/// Builds a `Program` from an already decoded JSON document.
///
/// Required top-level keys are `initial`, `final` and `transitions`; `white`
/// (or its alias `blank`) is optional and defaults to `"_"`. Each transition
/// needs `from`, `to`, `read`, `write` and `dir`.
///
/// # Returns
///
/// * `Err(TuringMachineError::MissingField)` naming the first absent top-level key.
/// * `Err(TuringMachineError::MissingTransitionField)` naming the absent key and the record.
/// * `Err(TuringMachineError::InvalidDirection)` for a direction outside L, R, S, N.
/// * `Err(TuringMachineError::MalformedSpecification)` for values of the wrong shape.
pub fn from_value(document: &Value) -> Result<Program, TuringMachineError> {
    let root = document.as_object().ok_or_else(|| {
        TuringMachineError::MalformedSpecification(
            "specification must be a JSON object".to_string(),
        )
    })?;

    let initial = required(root, "initial")?;
    let finals = required(root, "final")?;
    let transitions = required(root, "transitions")?;

    let initial_state = parse_label(initial, "initial")?;
    let final_states = parse_final_states(finals)?;
    let blank = match root.get("white").or_else(|| root.get("blank")) {
        Some(value) => parse_label(value, "white")?,
        None => DEFAULT_BLANK_SYMBOL.to_string(),
    };

    let records = transitions.as_array().ok_or_else(|| {
        TuringMachineError::MalformedSpecification("\"transitions\" must be an array".to_string())
    })?;

    let mut entries = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    let mut shadowed = Vec::new();

    for record in records {
        let (key, transition) = parse_transition(record)?;

        if !seen.insert(key.clone()) {
            shadowed.push(key.clone());
        }

        entries.push((key, transition));
    }

    Ok(Program {
        initial_state,
        final_states,
        blank,
        table: entries.into_iter().collect(),
        shadowed,
    })
}

/// Parses a single transition record into its `(from, read)` key and `Transition`.
fn parse_transition(
    record: &Value,
) -> Result<((String, String), Transition), TuringMachineError> {
    let fields = record.as_object().ok_or_else(|| {
        TuringMachineError::MalformedSpecification(format!(
            "transition must be a JSON object, got {record}"
        ))
    })?;

    if let Some(key) = TRANSITION_KEYS.iter().find(|key| !fields.contains_key(**key)) {
        return Err(TuringMachineError::MissingTransitionField {
            key: key.to_string(),
            transition: record.to_string(),
        });
    }

    let from = parse_label(&fields["from"], "from")?;
    let to = parse_label(&fields["to"], "to")?;
    let read = parse_label(&fields["read"], "read")?;
    let write = parse_label(&fields["write"], "write")?;
    let direction = parse_label(&fields["dir"], "dir")?.parse::<Direction>()?;

    Ok((
        (from, read),
        Transition {
            next_state: to,
            write,
            direction,
        },
    ))
}

/// Parses the list of accepting states.
fn parse_final_states(value: &Value) -> Result<HashSet<String>, TuringMachineError> {
    value
        .as_array()
        .ok_or_else(|| {
            TuringMachineError::MalformedSpecification("\"final\" must be an array".to_string())
        })?
        .iter()
        .map(|state| parse_label(state, "final"))
        .collect()
}

/// Converts a JSON scalar into a state or symbol label.
///
/// Strings are taken verbatim; numbers and booleans use their JSON text.
fn parse_label(value: &Value, field: &str) -> Result<String, TuringMachineError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(TuringMachineError::MalformedSpecification(format!(
            "\"{field}\" must be a string, got {other}"
        ))),
    }
}

/// Returns the value of a required top-level key.
fn required<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a Value, TuringMachineError> {
    root.get(key)
        .ok_or_else(|| TuringMachineError::MissingField(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_specification() {
        let input = r#"{
            "initial": "q0",
            "final": ["q1"],
            "transitions": [
                {"from": "q0", "to": "q1", "read": "a", "write": "b", "dir": "R"}
            ]
        }"#;

        let program = parse(input).unwrap();

        assert_eq!(program.initial_state, "q0");
        assert!(program.is_final("q1"));
        assert!(!program.is_final("q0"));
        assert_eq!(program.blank, "_");
        assert_eq!(program.table.len(), 1);

        let transition = program.table.get("q0", "a").unwrap();
        assert_eq!(transition.next_state, "q1");
        assert_eq!(transition.write, "b");
        assert_eq!(transition.direction, Direction::Right);
        assert!(program.shadowed.is_empty());
    }

    #[test]
    fn test_custom_blank_symbol() {
        let document = json!({"initial": "q0", "final": [], "white": "B", "transitions": []});

        assert_eq!(from_value(&document).unwrap().blank, "B");
    }

    #[test]
    fn test_blank_alias() {
        let document = json!({"initial": "q0", "final": [], "blank": "#", "transitions": []});

        assert_eq!(from_value(&document).unwrap().blank, "#");
    }

    #[test]
    fn test_missing_top_level_fields() {
        for key in ["initial", "final", "transitions"] {
            let mut document = json!({"initial": "q0", "final": ["q0"], "transitions": []});
            document.as_object_mut().unwrap().remove(key);

            let error = from_value(&document).unwrap_err();
            assert_eq!(error, TuringMachineError::MissingField(key.to_string()));
        }
    }

    #[test]
    fn test_missing_final_names_key() {
        let error = parse(r#"{"initial": "q0", "transitions": []}"#).unwrap_err();

        assert_eq!(error, TuringMachineError::MissingField("final".to_string()));
        assert!(error.to_string().contains("final"));
    }

    #[test]
    fn test_missing_transition_field_echoes_record() {
        let document = json!({
            "initial": "q0",
            "final": [],
            "transitions": [{"from": "q0", "to": "q1", "read": "a", "write": "b"}]
        });

        match from_value(&document).unwrap_err() {
            TuringMachineError::MissingTransitionField { key, transition } => {
                assert_eq!(key, "dir");
                assert!(transition.contains("\"from\":\"q0\""));
            }
            other => panic!("Expected MissingTransitionField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_transition_field_reports_first_in_order() {
        let document = json!({
            "initial": "q0",
            "final": [],
            "transitions": [{"read": "a"}]
        });

        match from_value(&document).unwrap_err() {
            TuringMachineError::MissingTransitionField { key, .. } => assert_eq!(key, "from"),
            other => panic!("Expected MissingTransitionField, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_direction() {
        let document = json!({
            "initial": "q0",
            "final": [],
            "transitions": [{"from": "q0", "to": "q1", "read": "a", "write": "b", "dir": "x"}]
        });

        assert_eq!(
            from_value(&document).unwrap_err(),
            TuringMachineError::InvalidDirection("X".to_string())
        );
    }

    #[test]
    fn test_lowercase_and_alias_directions() {
        let document = json!({
            "initial": "q0",
            "final": [],
            "transitions": [
                {"from": "q0", "to": "q1", "read": "a", "write": "a", "dir": "r"},
                {"from": "q0", "to": "q1", "read": "b", "write": "b", "dir": "n"},
                {"from": "q0", "to": "q1", "read": "c", "write": "c", "dir": "l"}
            ]
        });

        let program = from_value(&document).unwrap();

        assert_eq!(program.table.get("q0", "a").unwrap().direction, Direction::Right);
        assert_eq!(program.table.get("q0", "b").unwrap().direction, Direction::Stay);
        assert_eq!(program.table.get("q0", "c").unwrap().direction, Direction::Left);
    }

    #[test]
    fn test_duplicate_transitions_last_wins() {
        let document = json!({
            "initial": "q0",
            "final": [],
            "transitions": [
                {"from": "q0", "to": "first", "read": "a", "write": "x", "dir": "R"},
                {"from": "q0", "to": "second", "read": "a", "write": "y", "dir": "L"}
            ]
        });

        let program = from_value(&document).unwrap();

        assert_eq!(program.table.len(), 1);
        let transition = program.table.get("q0", "a").unwrap();
        assert_eq!(transition.next_state, "second");
        assert_eq!(transition.write, "y");
        assert_eq!(transition.direction, Direction::Left);
        assert_eq!(program.shadowed, vec![("q0".to_string(), "a".to_string())]);
    }

    #[test]
    fn test_numeric_labels() {
        let document = json!({
            "initial": 0,
            "final": [1],
            "transitions": [{"from": 0, "to": 1, "read": 1, "write": 0, "dir": "R"}]
        });

        let program = from_value(&document).unwrap();

        assert_eq!(program.initial_state, "0");
        assert!(program.is_final("1"));
        assert_eq!(program.table.get("0", "1").unwrap().write, "0");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse("{ not json"),
            Err(TuringMachineError::MalformedSpecification(_))
        ));
        assert!(matches!(
            parse("[]"),
            Err(TuringMachineError::MalformedSpecification(_))
        ));
    }

    #[test]
    fn test_wrongly_typed_sections() {
        let document = json!({"initial": "q0", "final": "q1", "transitions": []});
        assert!(matches!(
            from_value(&document),
            Err(TuringMachineError::MalformedSpecification(_))
        ));

        let document = json!({"initial": "q0", "final": [], "transitions": {}});
        assert!(matches!(
            from_value(&document),
            Err(TuringMachineError::MalformedSpecification(_))
        ));

        let document = json!({"initial": null, "final": [], "transitions": []});
        assert!(matches!(
            from_value(&document),
            Err(TuringMachineError::MalformedSpecification(_))
        ));
    }

    #[test]
    fn test_missing_key_reported_before_type_errors() {
        let document = json!({"initial": null, "final": "oops"});

        assert_eq!(
            from_value(&document).unwrap_err(),
            TuringMachineError::MissingField("transitions".to_string())
        );
    }
}
