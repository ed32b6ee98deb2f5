//! # nicdfa-core — NIC Validation Automaton
//!
//! Deterministic finite automaton that validates the structural format of
//! Sri Lankan National Identity Card (NIC) numbers. This crate is the leaf
//! of the workspace DAG: pure functions, no I/O, no async, nothing internal
//! below it.
//!
//! ## Accepted Language
//!
//! Exactly two shapes, nothing else:
//!
//! - **Legacy NIC** — 9 digits followed by a case-insensitive `V`/`X`
//!   suffix (10 characters total), e.g. `981234567V`.
//! - **Modern NIC** — exactly 12 digits, e.g. `199812345678`.
//!
//! Structure only: checksums, birth-year plausibility, and day-of-year
//! ranges are out of scope by design.
//!
//! ## Key Design Principles
//!
//! 1. **Closed state enum.** The 15 states are a `Copy` enum, so the
//!    transition table is an exhaustive `match` checked at compile time.
//!    The historical `q0`..`q13`/`q_reject` names exist only at the
//!    serde/Display boundary.
//!
//! 2. **Per-call-local cursor.** [`validate`] and [`validate_with_trace`]
//!    fold the pure [`transition`] function over the input; no instance
//!    state, no reset-before-use hazard, trivially safe under unbounded
//!    concurrent use.
//!
//! 3. **Total, never-failing classification.** Every string — empty,
//!    whitespace, non-ASCII — yields a verdict. A malformed NIC is a
//!    normal `REJECT`, not an error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nicdfa-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and serialize under the
//!   wire names existing clients consume.

pub mod describe;
pub mod state;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use describe::{describe, AutomatonDescription};
pub use state::{transition, CharClass, State};
pub use validate::{
    validate, validate_with_trace, NicFormat, TraceStep, TraceValidation, Validation, Verdict,
};
