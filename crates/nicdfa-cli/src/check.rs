//! # `check` Subcommand
//!
//! Validates one or more candidate NIC numbers. With no positional
//! arguments it reads candidates line-by-line from stdin, so it composes
//! with shell pipelines for batch validation.

use std::io::BufRead;

use clap::Args;

use nicdfa_core::{validate, Validation};

/// Arguments for `nicdfa check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Candidate NIC numbers; reads stdin line-by-line when omitted.
    pub candidates: Vec<String>,
}

/// One line of report output for a candidate.
pub fn render_line(candidate: &str, outcome: &Validation) -> String {
    match outcome.format() {
        Some(format) => format!("{candidate}: {} — {}", outcome.verdict, format.label()),
        None => format!(
            "{candidate}: {} (final state {})",
            outcome.verdict, outcome.final_state
        ),
    }
}

/// Run the subcommand. Returns how many candidates were rejected.
pub fn run(args: CheckArgs) -> anyhow::Result<usize> {
    let candidates = if args.candidates.is_empty() {
        read_stdin_candidates()?
    } else {
        args.candidates
    };

    let mut rejected = 0;
    for candidate in &candidates {
        let outcome = validate(candidate);
        if !outcome.verdict.is_accept() {
            rejected += 1;
        }
        println!("{}", render_line(candidate, &outcome));
    }

    tracing::debug!(
        total = candidates.len(),
        rejected,
        "validated candidate batch",
    );
    Ok(rejected)
}

fn read_stdin_candidates() -> anyhow::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    Ok(candidates)
}
