//! # Automaton Self-Description
//!
//! A static, serializable description of the automaton's structure for the
//! introspection endpoint and the CLI `info` command. Documentation-as-data:
//! the prose is hand-maintained next to the transition table, and the unit
//! tests below pin the machine-readable parts (start state, accepting set,
//! wire names) to the real automaton so the two cannot drift apart.

use serde::Serialize;

use crate::state::State;

/// Human-oriented glossary of the state set, keyed by wire name.
///
/// The nine digit-counting states are collapsed into one `q1-q9` entry,
/// matching the shape existing clients consume.
#[derive(Debug, Clone, Serialize)]
pub struct StateGlossary {
    #[serde(rename = "q0")]
    pub start: &'static str,
    #[serde(rename = "q1-q9")]
    pub digit_chain: &'static str,
    #[serde(rename = "q10")]
    pub legacy_accept: &'static str,
    #[serde(rename = "q11")]
    pub digit_10: &'static str,
    #[serde(rename = "q12")]
    pub digit_11: &'static str,
    #[serde(rename = "q13")]
    pub modern_accept: &'static str,
    #[serde(rename = "q_reject")]
    pub reject: &'static str,
}

/// Static description of the automaton's structure.
#[derive(Debug, Clone, Serialize)]
pub struct AutomatonDescription {
    pub automaton_type: &'static str,
    pub purpose: &'static str,
    pub alphabet: [&'static str; 3],
    pub states: StateGlossary,
    pub start_state: State,
    pub accepting_states: [State; 2],
    pub valid_formats: [&'static str; 2],
}

/// The description of the NIC automaton.
pub fn describe() -> AutomatonDescription {
    AutomatonDescription {
        automaton_type: "Deterministic Finite Automaton (DFA)",
        purpose: "Validate Sri Lankan NIC number format",
        alphabet: ["0-9", "V", "X"],
        states: StateGlossary {
            start: "Start state",
            digit_chain: "Processing digits 1-9",
            legacy_accept: "Accept state (Old NIC: 9 digits + V/X)",
            digit_10: "Processing 10th digit",
            digit_11: "Processing 11th digit",
            modern_accept: "Accept state (New NIC: 12 digits)",
            reject: "Reject state",
        },
        start_state: State::Start,
        accepting_states: [State::LegacyAccept, State::ModernAccept],
        valid_formats: [
            "Old NIC: 9 digits followed by V or X (e.g., 981234567V)",
            "New NIC: 12 digits (e.g., 199812345678)",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_matches_real_accepting_set() {
        let desc = describe();
        let accepting: Vec<State> = State::ALL
            .into_iter()
            .filter(State::is_accepting)
            .collect();
        assert_eq!(desc.accepting_states.to_vec(), accepting);
        assert_eq!(desc.start_state, State::Start);
    }

    #[test]
    fn test_description_serializes_with_wire_names() {
        let json = serde_json::to_value(describe()).unwrap();
        assert_eq!(json["start_state"], "q0");
        assert_eq!(json["accepting_states"][0], "q10");
        assert_eq!(json["accepting_states"][1], "q13");
        assert_eq!(json["states"]["q1-q9"], "Processing digits 1-9");
        assert_eq!(json["states"]["q_reject"], "Reject state");
    }

    #[test]
    fn test_description_examples_actually_validate() {
        // The e.g. strings embedded in valid_formats must accept.
        use crate::validate::{validate, Verdict};
        assert_eq!(validate("981234567V").verdict, Verdict::Accept);
        assert_eq!(validate("199812345678").verdict, Verdict::Accept);
    }
}
