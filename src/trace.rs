//! Per-step tracing hook for the simulator.
//!
//! Tracing is purely observational: a [`TraceSink`] sees every step but cannot
//! influence the run. Pass one to [`TuringMachine::run_traced`].
//!
//! [`TuringMachine::run_traced`]: crate::machine::TuringMachine::run_traced

/// What the machine observed at the start of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent<'a> {
    /// The 1-based step number, already counted.
    pub step: usize,
    /// The current state.
    pub state: &'a str,
    /// The head position.
    pub head: i64,
    /// The symbol under the head.
    pub symbol: &'a str,
}

/// A trace sink that receives one event per step.
pub trait TraceSink {
    /// Called once per step, after the symbol under the head is read and
    /// before the transition lookup.
    fn step(&mut self, event: &StepEvent<'_>);
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn step(&mut self, _event: &StepEvent<'_>) {}
}

impl<F> TraceSink for F
where
    F: FnMut(&StepEvent<'_>),
{
    fn step(&mut self, event: &StepEvent<'_>) {
        self(event)
    }
}
