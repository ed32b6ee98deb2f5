//! # Application State
//!
//! Shared state for the Axum application. The automaton itself is a set of
//! pure functions, so the only thing worth sharing is the static
//! self-description served by the introspection route.

use nicdfa_core::AutomatonDescription;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static description of the automaton, served by `GET /dfa-info`.
    pub description: AutomatonDescription,
}

impl AppState {
    /// Create the application state.
    pub fn new() -> Self {
        Self {
            description: nicdfa_core::describe(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
