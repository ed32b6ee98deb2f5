//! # `trace` Subcommand
//!
//! Prints the step-by-step state transitions for one candidate, in the
//! classroom-friendly layout the validator has always used:
//!
//! ```text
//! Input: 981234567V
//! Result: ACCEPT
//! Final State: q10
//!
//! State Transitions:
//!   Start -> q0
//!   Read '9' -> q1
//!   ...
//! ```

use clap::Args;

use nicdfa_core::{validate_with_trace, TraceValidation};

/// Arguments for `nicdfa trace`.
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Candidate NIC number to trace.
    pub candidate: String,
}

/// Render the full trace report for a candidate.
pub fn render(candidate: &str, outcome: &TraceValidation) -> String {
    let mut out = String::new();
    out.push_str(&format!("Input: {candidate}\n"));
    out.push_str(&format!("Result: {}\n", outcome.verdict));
    out.push_str(&format!("Final State: {}\n", outcome.final_state));
    if let Some(format) = outcome.format() {
        out.push_str(&format!("Format: {}\n", format.label()));
    }
    out.push_str("\nState Transitions:\n");
    for step in &outcome.trace {
        if step.step == 0 {
            out.push_str(&format!("  Start -> {}\n", step.state));
        } else {
            out.push_str(&format!("  Read '{}' -> {}\n", step.input, step.state));
        }
    }
    out
}

/// Run the subcommand.
pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let outcome = validate_with_trace(&args.candidate);
    print!("{}", render(&args.candidate, &outcome));
    Ok(())
}
