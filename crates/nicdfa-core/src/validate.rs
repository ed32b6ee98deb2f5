//! # Validation Drivers
//!
//! Single-pass evaluation of a candidate string against the automaton, with
//! and without a step-by-step transition trace.
//!
//! Both drivers are free functions folding [`transition`] over the input
//! with a call-local cursor. Nothing is shared between calls, so repeated
//! and concurrent validations cannot interfere with each other.
//!
//! Malformed input is a normal `REJECT` outcome, never an error: the
//! drivers are total over all strings, empty and non-UTF-8-escaped alike.

use serde::{Deserialize, Serialize};

use crate::state::{transition, State};

// ─── Verdict ─────────────────────────────────────────────────────────

/// The accept/reject classification of one input string.
///
/// Serialized as the historical `ACCEPT`/`REJECT` wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The input matches one of the two NIC shapes.
    #[serde(rename = "ACCEPT")]
    Accept,
    /// The input matches neither shape.
    #[serde(rename = "REJECT")]
    Reject,
}

impl Verdict {
    fn of(final_state: State) -> Self {
        if final_state.is_accepting() {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    /// Whether this verdict is `Accept`.
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accept => f.write_str("ACCEPT"),
            Self::Reject => f.write_str("REJECT"),
        }
    }
}

// ─── NIC Format ──────────────────────────────────────────────────────

/// Which of the two accepted shapes a valid NIC matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NicFormat {
    /// 9 digits followed by a V/X suffix (10 characters total).
    Legacy,
    /// Exactly 12 decimal digits.
    Modern,
}

impl NicFormat {
    /// The format implied by an accepting final state, or `None` for any
    /// non-accepting state.
    pub fn from_final_state(state: State) -> Option<Self> {
        match state {
            State::LegacyAccept => Some(Self::Legacy),
            State::ModernAccept => Some(Self::Modern),
            _ => None,
        }
    }

    /// The human-readable label used in API responses and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "Old NIC (9 digits + V/X)",
            Self::Modern => "New NIC (12 digits)",
        }
    }
}

impl std::fmt::Display for NicFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Results ─────────────────────────────────────────────────────────

/// Result of one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Accept/reject classification.
    pub verdict: Verdict,
    /// The state the automaton halted in.
    pub final_state: State,
}

impl Validation {
    /// The matched format, when the verdict is `Accept`.
    pub fn format(&self) -> Option<NicFormat> {
        NicFormat::from_final_state(self.final_state)
    }
}

/// One entry of a transition trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// 0 for the pre-input entry, then 1-based per character consumed.
    pub step: usize,
    /// The character consumed at this step; empty for step 0.
    pub input: String,
    /// The state after consuming the character.
    pub state: State,
}

/// Result of one validation call with the full transition trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceValidation {
    /// Accept/reject classification.
    pub verdict: Verdict,
    /// The state the automaton halted in.
    pub final_state: State,
    /// Ordered record of every transition taken.
    pub trace: Vec<TraceStep>,
}

impl TraceValidation {
    /// The matched format, when the verdict is `Accept`.
    pub fn format(&self) -> Option<NicFormat> {
        NicFormat::from_final_state(self.final_state)
    }
}

// ─── Drivers ─────────────────────────────────────────────────────────

/// Validate a candidate NIC string.
///
/// Empty input is a defined special case: it rejects in [`State::Reject`]
/// without consulting the transition table. Non-empty input is consumed
/// character by character in one pass; the verdict is `Accept` iff the
/// automaton halts in one of the two accepting states.
pub fn validate(input: &str) -> Validation {
    if input.is_empty() {
        return Validation {
            verdict: Verdict::Reject,
            final_state: State::Reject,
        };
    }

    let final_state = input.chars().fold(State::Start, transition);
    Validation {
        verdict: Verdict::of(final_state),
        final_state,
    }
}

/// Validate a candidate NIC string, recording every transition.
///
/// Same verdict semantics as [`validate`]. For non-empty input the trace
/// opens with a step-0 entry for the start state before any character is
/// consumed, then one entry per character, so its length is `len + 1` and
/// its last entry reports `final_state`.
///
/// Empty input produces a single synthetic `{step: 0, input: "", state:
/// q_reject}` entry with no preceding start-state entry. The asymmetric
/// shape is kept deliberately: existing trace consumers depend on it.
pub fn validate_with_trace(input: &str) -> TraceValidation {
    if input.is_empty() {
        return TraceValidation {
            verdict: Verdict::Reject,
            final_state: State::Reject,
            trace: vec![TraceStep {
                step: 0,
                input: String::new(),
                state: State::Reject,
            }],
        };
    }

    let mut trace = Vec::with_capacity(input.chars().count() + 1);
    trace.push(TraceStep {
        step: 0,
        input: String::new(),
        state: State::Start,
    });

    let mut state = State::Start;
    for (i, c) in input.chars().enumerate() {
        state = transition(state, c);
        trace.push(TraceStep {
            step: i + 1,
            input: c.to_string(),
            state,
        });
    }

    TraceValidation {
        verdict: Verdict::of(state),
        final_state: state,
        trace,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
