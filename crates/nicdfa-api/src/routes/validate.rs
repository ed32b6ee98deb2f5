//! # Validation Routes
//!
//! Routes:
//! - POST /validate-nic — verdict, final state, format label
//! - POST /validate-nic-trace — verdict plus the full transition trace
//!
//! Error taxonomy: a candidate that fails the automaton is a normal 200
//! response carrying `REJECT`. Only malformed *usage* — non-JSON body,
//! missing `nic` field, non-string candidate — surfaces as a 400
//! [`ApiError::BadRequest`], so clients can tell "bad request" from
//! "valid request, invalid NIC".

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use nicdfa_core::{validate, validate_with_trace, State, TraceStep, Verdict};

use crate::error::ApiError;
use crate::state::AppState;

// ─── Response Types ──────────────────────────────────────────────────

/// Body of a `/validate-nic` response.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub result: Verdict,
    pub final_state: State,
    /// The candidate echoed back.
    pub input: String,
    /// Human-readable format label; present only on ACCEPT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

/// Body of a `/validate-nic-trace` response.
#[derive(Debug, Serialize)]
pub struct TraceResponse {
    pub result: Verdict,
    pub final_state: State,
    /// The candidate echoed back.
    pub input: String,
    /// One entry per transition, starting at the pre-input state.
    pub trace: Vec<TraceStep>,
}

// ─── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate-nic", post(validate_nic))
        .route("/validate-nic-trace", post(validate_nic_trace))
}

// ─── Handlers ────────────────────────────────────────────────────────

/// POST /validate-nic
async fn validate_nic(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let nic = candidate(body)?;
    let outcome = validate(&nic);
    tracing::debug!(
        input = %nic,
        verdict = %outcome.verdict,
        final_state = %outcome.final_state,
        "validated candidate",
    );
    Ok(Json(ValidateResponse {
        result: outcome.verdict,
        final_state: outcome.final_state,
        format: outcome.format().map(|f| f.label()),
        input: nic,
    }))
}

/// POST /validate-nic-trace
async fn validate_nic_trace(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TraceResponse>, ApiError> {
    let nic = candidate(body)?;
    let outcome = validate_with_trace(&nic);
    tracing::debug!(
        input = %nic,
        verdict = %outcome.verdict,
        steps = outcome.trace.len(),
        "traced candidate",
    );
    Ok(Json(TraceResponse {
        result: outcome.verdict,
        final_state: outcome.final_state,
        input: nic,
        trace: outcome.trace,
    }))
}

/// Extract the `nic` candidate from the request body.
///
/// Rejected shapes are request-level errors, never DFA verdicts: the
/// automaton only ever sees an actual string.
fn candidate(body: Result<Json<Value>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) =
        body.map_err(|e| ApiError::BadRequest(format!("request body must be JSON: {e}")))?;
    let Some(fields) = body.as_object() else {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };
    let Some(nic) = fields.get("nic") else {
        return Err(ApiError::BadRequest(
            "request must include 'nic' field".to_string(),
        ));
    };
    nic.as_str()
        .map(str::to_owned)
        .ok_or_else(|| ApiError::BadRequest("'nic' field must be a string".to_string()))
}
