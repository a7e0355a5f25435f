//! Shared response envelope types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` bodies so the success
//! payloads stay consistent across handlers.

use serde::Serialize;

/// Acknowledgement payload: `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create acknowledgement: `{ "message": ..., "project_id": ... }`.
///
/// The id is the external string form produced by the identifier codec.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub project_id: String,
}
