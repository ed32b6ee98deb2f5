//! # Automaton Introspection
//!
//! Serves the static self-description of the automaton: state glossary,
//! alphabet, accepting set, and example valid inputs. Documentation-as-data
//! for clients and classroom use; the engine never reads it back.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use nicdfa_core::AutomatonDescription;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/dfa-info", get(dfa_info))
}

/// GET /dfa-info
async fn dfa_info(State(state): State<AppState>) -> Json<AutomatonDescription> {
    Json(state.description.clone())
}
