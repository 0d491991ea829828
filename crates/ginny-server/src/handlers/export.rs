//! Export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
};
use tracing::info;

use crate::{AppError, AppState};
use ginny_core::export::{self, DEFAULT_EXPORT_FILENAME};

/// GET /api/export/csv - Download the budget as CSV
pub async fn export_csv(State(state): State<Arc<AppState>>) -> Result<Response<Body>, AppError> {
    let csv = {
        let session = state.session.lock().await;
        let record = session
            .store()
            .current()
            .ok_or_else(|| AppError::not_found("No budget to export"))?;
        info!(expenses = record.expenses().len(), "Exporting budget to CSV");
        export::export_csv(record)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", DEFAULT_EXPORT_FILENAME),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(&e.to_string()))
}
