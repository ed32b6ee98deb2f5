//! # nicdfa-api — Axum HTTP Gateway
//!
//! Thin transport glue around the `nicdfa-core` automaton, built on
//! Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `POST /validate-nic` — validate a candidate NIC
//! - `POST /validate-nic-trace` — validate with the step-by-step trace
//! - `GET  /dfa-info` — static automaton description
//! - `GET  /health` — liveness probe (unauthenticated, engine-independent)
//!
//! ## Architecture
//!
//! Request/response types are compile-time contracts via serde derive.
//! No business logic in route handlers — they delegate to `nicdfa-core`
//! and only translate between wire shapes and engine types. All
//! request-level errors map to structured HTTP responses via [`ApiError`];
//! a DFA `REJECT` is a normal 200 response, not an error.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;

/// Assemble the application router.
///
/// Transport middleware (trace, CORS) is layered on by the binary; tests
/// drive this router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::validate::router())
        .merge(routes::info::router())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("the requested endpoint does not exist".to_string())
}
