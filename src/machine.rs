//! This module defines the `TuringMachine` struct, which simulates a single-tape deterministic
//! Turing Machine over a sparse tape. It owns the run configuration (state, head, tape, step
//! counter and visited span) and drives the step loop until the machine halts or the step
//! budget runs out.

use crate::parser::Program;
use crate::tape::Tape;
use crate::trace::{NoTrace, StepEvent, TraceSink};
use crate::types::{Span, Step, Termination};

/// Represents a running single-tape Turing Machine.
///
/// The transition table is borrowed from the `Program` and never changes; everything
/// else is the mutable configuration of this one run.
#[derive(Debug, Clone)]
pub struct TuringMachine<'a> {
    program: &'a Program,
    state: String,
    tape: Tape,
    head: i64,
    span: Span,
    step_count: usize,
}

/// The result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// True only if the machine halted in a final state.
    pub accepted: bool,
    /// Why the run ended.
    pub termination: Termination,
    /// The tape as left by the last step.
    pub tape: Tape,
    /// The final head position.
    pub head: i64,
    /// The final state.
    pub state: String,
    /// Number of steps counted, including the step that found no transition.
    pub steps: usize,
    /// Every position the head occupied, plus the initial input range.
    pub span: Span,
}

impl Execution {
    /// Renders the visited part of the final tape without leading or trailing blanks.
    pub fn render(&self) -> String {
        self.tape.render(self.span)
    }
}

impl<'a> TuringMachine<'a> {
    /// Creates a new `TuringMachine` in the program's initial state with `input` written
    /// at positions `0..n-1` and the head at position 0.
    pub fn new(program: &'a Program, input: &str) -> Self {
        Self {
            program,
            state: program.initial_state.clone(),
            tape: Tape::new(input, &program.blank),
            head: 0,
            span: Span::for_input(input.chars().count()),
            step_count: 0,
        }
    }

    /// Executes a single step of the machine's computation.
    ///
    /// The step counter is incremented before the lookup, so the step that finds no
    /// matching transition is counted too.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if a transition was applied.
    /// * `Step::Halt` if no transition matches the current state and symbol.
    pub fn step(&mut self) -> Step {
        self.step_traced(&mut NoTrace)
    }

    fn step_traced<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> Step {
        self.step_count += 1;

        let symbol = self.tape.read(self.head);
        sink.step(&StepEvent {
            step: self.step_count,
            state: &self.state,
            head: self.head,
            symbol,
        });

        let Some(transition) = self.program.table.get(&self.state, symbol) else {
            return Step::Halt;
        };

        self.tape.write(self.head, &transition.write);
        self.head += transition.direction.offset();
        self.state.clone_from(&transition.next_state);
        self.span.widen(self.head);

        Step::Continue
    }

    /// Runs the machine until it halts or `max_steps` steps have been counted.
    pub fn run(self, max_steps: usize) -> Execution {
        self.run_traced(max_steps, &mut NoTrace)
    }

    /// Like [`run`](Self::run), reporting every step to `sink`.
    pub fn run_traced<S: TraceSink + ?Sized>(mut self, max_steps: usize, sink: &mut S) -> Execution {
        while self.step_count < max_steps {
            if self.step_traced(sink) == Step::Halt {
                return self.finish(Termination::Halted);
            }
        }

        self.finish(Termination::StepLimitReached)
    }

    fn finish(self, termination: Termination) -> Execution {
        let accepted =
            termination == Termination::Halted && self.program.is_final(&self.state);

        Execution {
            accepted,
            termination,
            tape: self.tape,
            head: self.head,
            state: self.state,
            steps: self.step_count,
            span: self.span,
        }
    }

    /// Returns the current state of the Turing Machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the current head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Returns the total number of steps counted so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the span of positions visited so far.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the tape as written so far.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the symbol currently under the head.
    pub fn symbol(&self) -> &str {
        self.tape.read(self.head)
    }
}

/// Runs `program` on `input` for at most `max_steps` steps.
pub fn execute(program: &Program, input: &str, max_steps: usize) -> Execution {
    TuringMachine::new(program, input).run(max_steps)
}
