//! # nicdfa-cli — NIC Validator Command Line
//!
//! Subcommand handlers for the `nicdfa` binary. Each module owns one
//! subcommand's argument struct and its `run` function; `main.rs` only
//! parses and dispatches.

pub mod check;
pub mod info;
pub mod trace;
