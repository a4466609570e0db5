//! This crate provides the core logic for a single-tape deterministic Turing Machine simulator.
//! It includes modules for building transition tables from JSON specifications, modeling a
//! sparse unbounded tape, running the step loop, and rendering the final tape contents.

pub mod analyzer;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod table;
pub mod tape;
pub mod trace;
pub mod types;

/// Re-exports the `analyze` function and `Diagnostic` enum from the analyzer module.
pub use analyzer::{analyze, Diagnostic};
/// Re-exports the `ProgramLoader` struct from the loader module.
pub use loader::ProgramLoader;
/// Re-exports the simulator entry points from the machine module.
pub use machine::{execute, Execution, TuringMachine};
/// Re-exports the parsing functions from the parser module.
pub use parser::{from_value, parse, Program};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the sparse tape and its renderer.
pub use tape::{render, Tape};
/// Re-exports the debug tracing hook.
pub use trace::{NoTrace, StepEvent, TraceSink};
/// Re-exports various types related to Turing Machine definition and execution from the types module.
pub use types::{
    Direction, Span, Step, Termination, Transition, TuringMachineError, DEFAULT_BLANK_SYMBOL,
    DEFAULT_MAX_STEPS,
};
