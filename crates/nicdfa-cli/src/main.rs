//! # nicdfa CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Sri Lankan NIC validator — deterministic finite automaton.
///
/// Validates the structural format of NIC numbers (legacy 9-digits+V/X and
/// modern 12-digit shapes), prints transition traces, and describes the
/// automaton. Structure only: no checksum or birth-date semantics.
#[derive(Parser, Debug)]
#[command(name = "nicdfa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate candidates (arguments, or stdin lines when omitted).
    Check(nicdfa_cli::check::CheckArgs),
    /// Print the step-by-step state transitions for one candidate.
    Trace(nicdfa_cli::trace::TraceArgs),
    /// Print the automaton description as JSON.
    Info(nicdfa_cli::info::InfoArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let rejected = nicdfa_cli::check::run(args)?;
            // Nonzero exit when any candidate failed, for shell pipelines.
            if rejected > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Trace(args) => nicdfa_cli::trace::run(args)?,
        Commands::Info(args) => nicdfa_cli::info::run(args)?,
    }

    Ok(ExitCode::SUCCESS)
}
