//! # Automaton States and Transition Function
//!
//! The 15-state deterministic finite automaton that recognizes the two
//! Sri Lankan NIC shapes.
//!
//! ## States
//!
//! ```text
//! Start ──D──▶ Digit1 ──D──▶ ... ──D──▶ Digit9
//!                                          │
//!                           ┌──────────────┤
//!                           S              D
//!                           ▼              ▼
//!                     LegacyAccept      Digit10 ──D──▶ Digit11 ──D──▶ ModernAccept
//!
//! (any other edge, and any character after an accept state, lands in
//!  Reject, which self-loops forever)
//! ```
//!
//! ## Design Decision
//!
//! The branch point is at the ninth digit: a suffix letter there commits to
//! the legacy 10-character format and accepts immediately; a tenth digit
//! commits to the modern 12-digit path, which needs exactly two more digits.
//! Both accept states transition to `Reject` on any further character, so a
//! trailing character after a completed sequence invalidates the whole
//! string. The table is total over all of Unicode via the three-way
//! character classification, so no "unhandled character" condition exists.
//!
//! States are a closed enum rather than strings so the transition table is
//! exhaustiveness-checked at compile time; the historical `q0`..`q13` /
//! `q_reject` names survive only as the serde/Display wire names.

use serde::{Deserialize, Serialize};

// ─── Character Classes ───────────────────────────────────────────────

/// The three-way partition of the input alphabet.
///
/// Every `char` falls into exactly one class, which is all the transition
/// table needs to know about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Decimal digit `0`-`9`.
    Digit,
    /// Legacy-format suffix letter: `V`, `v`, `X`, or `x`.
    Suffix,
    /// Anything else, including whitespace and non-ASCII. Always invalid.
    Other,
}

impl CharClass {
    /// Classify a single input character.
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else if matches!(c, 'V' | 'v' | 'X' | 'x') {
            Self::Suffix
        } else {
            Self::Other
        }
    }
}

// ─── States ──────────────────────────────────────────────────────────

/// A state of the NIC automaton.
///
/// Fifteen states: the start state, nine digit-counting states, the two
/// modern-path digit states, one accept state per format, and the absorbing
/// reject state. Serialized under the historical wire names (`q0`..`q13`,
/// `q_reject`) consumed by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// No characters consumed yet.
    #[serde(rename = "q0")]
    Start,
    /// One digit consumed.
    #[serde(rename = "q1")]
    Digit1,
    /// Two digits consumed.
    #[serde(rename = "q2")]
    Digit2,
    /// Three digits consumed.
    #[serde(rename = "q3")]
    Digit3,
    /// Four digits consumed.
    #[serde(rename = "q4")]
    Digit4,
    /// Five digits consumed.
    #[serde(rename = "q5")]
    Digit5,
    /// Six digits consumed.
    #[serde(rename = "q6")]
    Digit6,
    /// Seven digits consumed.
    #[serde(rename = "q7")]
    Digit7,
    /// Eight digits consumed.
    #[serde(rename = "q8")]
    Digit8,
    /// Nine digits consumed — the branch point between the two formats.
    #[serde(rename = "q9")]
    Digit9,
    /// Accept state for the legacy format (9 digits + V/X).
    #[serde(rename = "q10")]
    LegacyAccept,
    /// Ten digits consumed on the modern path.
    #[serde(rename = "q11")]
    Digit10,
    /// Eleven digits consumed on the modern path.
    #[serde(rename = "q12")]
    Digit11,
    /// Accept state for the modern format (12 digits).
    #[serde(rename = "q13")]
    ModernAccept,
    /// Absorbing reject state.
    #[serde(rename = "q_reject")]
    Reject,
}

impl State {
    /// Whether this state is in the accepting set.
    ///
    /// Exactly two states accept; everything else, including `Reject`,
    /// does not.
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::LegacyAccept | Self::ModernAccept)
    }

    /// Whether further input can still reach an accept state from here.
    ///
    /// False for `Reject` and for both accept states — all three are
    /// absorbing with respect to further characters.
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Reject | Self::LegacyAccept | Self::ModernAccept)
    }

    /// The historical wire name (`q0`..`q13`, `q_reject`).
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Start => "q0",
            Self::Digit1 => "q1",
            Self::Digit2 => "q2",
            Self::Digit3 => "q3",
            Self::Digit4 => "q4",
            Self::Digit5 => "q5",
            Self::Digit6 => "q6",
            Self::Digit7 => "q7",
            Self::Digit8 => "q8",
            Self::Digit9 => "q9",
            Self::LegacyAccept => "q10",
            Self::Digit10 => "q11",
            Self::Digit11 => "q12",
            Self::ModernAccept => "q13",
            Self::Reject => "q_reject",
        }
    }

    /// Total number of states.
    pub const STATE_COUNT: usize = 15;

    /// All states, in wire-name order.
    pub const ALL: [State; Self::STATE_COUNT] = [
        Self::Start,
        Self::Digit1,
        Self::Digit2,
        Self::Digit3,
        Self::Digit4,
        Self::Digit5,
        Self::Digit6,
        Self::Digit7,
        Self::Digit8,
        Self::Digit9,
        Self::LegacyAccept,
        Self::Digit10,
        Self::Digit11,
        Self::ModernAccept,
        Self::Reject,
    ];
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ─── Transition Function ─────────────────────────────────────────────

/// The transition function δ(q, a) → q'.
///
/// Pure and total: every (state, character) pair has exactly one successor.
/// Callers thread the returned state themselves; there is no cursor held
/// anywhere, which makes the automaton trivially safe under unbounded
/// concurrent use.
pub fn transition(state: State, input: char) -> State {
    use CharClass::*;
    use State::*;

    match (state, CharClass::of(input)) {
        (Start, Digit) => Digit1,
        (Digit1, Digit) => Digit2,
        (Digit2, Digit) => Digit3,
        (Digit3, Digit) => Digit4,
        (Digit4, Digit) => Digit5,
        (Digit5, Digit) => Digit6,
        (Digit6, Digit) => Digit7,
        (Digit7, Digit) => Digit8,
        (Digit8, Digit) => Digit9,
        // Branch point: suffix commits to legacy, a tenth digit to modern.
        (Digit9, Suffix) => LegacyAccept,
        (Digit9, Digit) => Digit10,
        (Digit10, Digit) => Digit11,
        (Digit11, Digit) => ModernAccept,
        // Accept states absorb into Reject on any trailing character;
        // Reject self-loops; every remaining edge is a rejection.
        _ => Reject,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
