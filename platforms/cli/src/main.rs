use clap::Parser;
use std::path::PathBuf;
use std::process;
use tmsim::{
    analyze, ProgramLoader, StepEvent, Termination, TraceSink, TuringMachine,
    TuringMachineError, DEFAULT_MAX_STEPS,
};

/// Runs a single-tape Turing machine described by a JSON specification.
///
/// Writes the final tape to OUTPUT and prints 1 (accepted) or 0 (rejected).
#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// JSON file with the machine specification
    spec: PathBuf,

    /// Text file with the input tape
    input: PathBuf,

    /// File the final tape is written to
    output: PathBuf,

    /// Maximum number of steps before the run is stopped and rejected
    #[clap(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Print each step of the execution to stderr
    #[clap(short = 'd', long)]
    debug: bool,
}

/// Prints one line per step to stderr.
struct StderrTrace;

impl TraceSink for StderrTrace {
    fn step(&mut self, event: &StepEvent<'_>) {
        eprintln!(
            "Step: {}, State: {}, Head: {}, Symbol: {}",
            event.step, event.state, event.head, event.symbol
        );
    }
}

fn run(cli: &Cli) -> Result<bool, TuringMachineError> {
    let program = ProgramLoader::load_program(&cli.spec)?;
    let input = ProgramLoader::load_input(&cli.input)?;

    let machine = TuringMachine::new(&program, &input);
    let execution = if cli.debug {
        for diagnostic in analyze(&program) {
            eprintln!("Warning: {}", diagnostic);
        }

        let execution = machine.run_traced(cli.max_steps, &mut StderrTrace);
        match execution.termination {
            Termination::Halted => eprintln!(
                "\nMachine halted in state {} after {} steps.",
                execution.state, execution.steps
            ),
            Termination::StepLimitReached => eprintln!(
                "\nStep limit of {} reached in state {}.",
                cli.max_steps, execution.state
            ),
        }
        execution
    } else {
        machine.run(cli.max_steps)
    };

    ProgramLoader::write_output(&cli.output, &execution.render())?;

    Ok(execution.accepted)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(accepted) => println!("{}", if accepted { 1 } else { 0 }),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
