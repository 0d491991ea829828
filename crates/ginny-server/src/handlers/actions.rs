//! Assistant-facing handlers: readable context and action dispatch

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};
use ginny_core::{action_definitions, ActionDefinition, BudgetContext};

/// Result of running one action
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub action: String,
    pub response: String,
}

/// GET /api/context - Budget data as the assistant reads it
pub async fn get_context(State(state): State<Arc<AppState>>) -> Json<BudgetContext> {
    let session = state.session.lock().await;
    Json(session.context())
}

/// GET /api/actions - Names, descriptions and parameter schemas
pub async fn list_actions() -> Json<Vec<ActionDefinition>> {
    Json(action_definitions())
}

/// POST /api/actions/:name - Run an action; the body is its parameters
///
/// An empty body counts as `{}`.
pub async fn execute_action(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ActionResponse>, AppError> {
    let input: serde_json::Value = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::bad_request(&format!("Invalid JSON body: {}", e)))?
    };

    let mut session = state.session.lock().await;
    let response = session.execute(&name, &input).map_err(|e| match e {
        ginny_core::Error::UnknownAction(name) => {
            warn!(action = %name, "Unknown action requested");
            AppError::not_found(&format!("Unknown action: {}", name))
        }
        ginny_core::Error::InvalidData(msg) => AppError::bad_request(&msg),
        other => AppError::from(other),
    })?;

    Ok(Json(ActionResponse {
        action: name,
        response,
    }))
}
