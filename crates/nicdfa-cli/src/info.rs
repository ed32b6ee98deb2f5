//! # `info` Subcommand
//!
//! Prints the automaton self-description as pretty JSON, the same payload
//! the HTTP gateway serves at `GET /dfa-info`.

use clap::Args;

/// Arguments for `nicdfa info`.
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Run the subcommand.
pub fn run(_args: InfoArgs) -> anyhow::Result<()> {
    let description = nicdfa_core::describe();
    println!("{}", serde_json::to_string_pretty(&description)?);
    Ok(())
}
