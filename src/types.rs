//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including transitions, head directions, execution outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: &str = "_";
/// The default maximum number of steps to execute before forcing a stop.
pub const DEFAULT_MAX_STEPS: usize = 5_000_000;

/// Represents a single transition rule for a Turing Machine.
///
/// The key of a transition, the current state and the symbol under the head,
/// lives in the [`TransitionTable`](crate::table::TransitionTable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The next state the machine transitions to.
    pub next_state: String,
    /// The symbol written at the head position.
    pub write: String,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Direction {
    /// Returns the head displacement for this direction.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

impl FromStr for Direction {
    type Err = TuringMachineError;

    /// Parses a direction letter. Case-insensitive; `N` is an alias for `S`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        match normalized.as_str() {
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            "S" | "N" => Ok(Direction::Stay),
            _ => Err(TuringMachineError::InvalidDirection(normalized)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Stay => "S",
        };
        f.write_str(letter)
    }
}

/// The inclusive range of positions ever occupied by the head.
///
/// Seeded to cover the initial input, so it also contains every position
/// the machine could have written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The leftmost visited position.
    pub min: i64,
    /// The rightmost visited position.
    pub max: i64,
}

impl Span {
    /// The span seeded for an input of `len` symbols: `(0, max(0, len - 1))`.
    ///
    /// An empty input still yields `(0, 0)`.
    pub fn for_input(len: usize) -> Self {
        let max = i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1).max(0);
        Self { min: 0, max }
    }

    /// Widens the span to include `position`.
    pub fn widen(&mut self, position: i64) {
        self.min = self.min.min(position);
        self.max = self.max.max(position);
    }

    /// Returns true if `position` lies within the span, bounds included.
    pub fn contains(&self, position: i64) -> bool {
        self.min <= position && position <= self.max
    }
}

/// Represents the outcome of a single Turing Machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition was applied and execution may continue.
    Continue,
    /// No transition matches the current state and symbol.
    Halt,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// No transition matched; acceptance is decided by the final state.
    Halted,
    /// The step budget ran out. Never accepting.
    StepLimitReached,
}

/// Represents various errors that can occur while building or running a Turing Machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A required top-level key is absent from the specification.
    #[error("Invalid specification, missing key: \"{0}\"")]
    MissingField(String),
    /// A transition record lacks one of its required keys.
    #[error("Invalid transition (missing key \"{key}\"): {transition}")]
    MissingTransitionField { key: String, transition: String },
    /// A direction outside of L, R, S and N.
    #[error("Invalid direction: {0}. Use L, R, S/N.")]
    InvalidDirection(String),
    /// The specification is not a well-formed document of the expected shape.
    #[error("Malformed specification: {0}")]
    MalformedSpecification(String),
    /// Indicates an error related to reading input files or writing output files.
    #[error("File error: {0}")]
    FileError(String),
}

impl From<serde_json::Error> for TuringMachineError {
    fn from(error: serde_json::Error) -> Self {
        TuringMachineError::MalformedSpecification(error.to_string())
    }
}
