//! Budget snapshot handlers
//!
//! Direct edits from the budget table. These bypass the assistant's guidance
//! strings and answer with status codes instead.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use ginny_core::models::is_valid_amount;
use ginny_core::{derivation, BudgetBreakdown, BudgetRecord, BudgetStore, Category, MAX_AMOUNT};

/// Current snapshot plus the store's change marker
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    pub revision: u64,
    pub updated_at: Option<DateTime<Utc>>,
    pub budget: Option<BudgetRecord>,
}

impl BudgetResponse {
    fn from_store(store: &BudgetStore) -> Self {
        Self {
            revision: store.revision(),
            updated_at: store.updated_at(),
            budget: store.current().cloned(),
        }
    }
}

/// Request body for income and expense edits
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

fn validate_amount(amount: f64) -> Result<f64, AppError> {
    if !is_valid_amount(amount) {
        return Err(AppError::bad_request(&format!(
            "Amount must be zero or more and at most {}",
            MAX_AMOUNT
        )));
    }
    Ok(amount)
}

fn parse_category(raw: &str) -> Result<Category, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::bad_request("Category must not be empty"));
    }
    Ok(Category::parse(raw))
}

const NO_BUDGET: &str = "No budget yet - set an income first";

/// GET /api/health - Liveness check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/budget - Current snapshot (budget is null before any income)
pub async fn get_budget(State(state): State<Arc<AppState>>) -> Json<BudgetResponse> {
    let session = state.session.lock().await;
    Json(BudgetResponse::from_store(session.store()))
}

/// GET /api/budget/breakdown - Derived 50/30/20 view of the snapshot
pub async fn get_breakdown(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BudgetBreakdown>, AppError> {
    let session = state.session.lock().await;
    let record = session
        .store()
        .current()
        .ok_or_else(|| AppError::not_found(NO_BUDGET))?;
    Ok(Json(derivation::breakdown(record)))
}

/// PUT /api/budget/income - Set the monthly income (creates the budget)
pub async fn set_income(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<BudgetResponse>, AppError> {
    let amount = validate_amount(body.amount)?;

    let mut session = state.session.lock().await;
    session.store_mut().set_income(amount);
    info!(income = amount, "Income updated");

    Ok(Json(BudgetResponse::from_store(session.store())))
}

/// PUT /api/budget/expenses/:category - Insert or overwrite one expense
pub async fn set_expense(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<BudgetResponse>, AppError> {
    let category = parse_category(&category)?;
    let amount = validate_amount(body.amount)?;

    let mut session = state.session.lock().await;
    session
        .store_mut()
        .set_expense(category.clone(), amount)
        .ok_or_else(|| AppError::conflict(NO_BUDGET))?;
    info!(category = %category, amount, "Expense updated");

    Ok(Json(BudgetResponse::from_store(session.store())))
}

/// DELETE /api/budget/expenses/:category - Remove one expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<BudgetResponse>, AppError> {
    let category = parse_category(&category)?;

    let mut session = state.session.lock().await;
    session
        .store_mut()
        .delete_expense(&category)
        .ok_or_else(|| AppError::conflict(NO_BUDGET))?;
    info!(category = %category, "Expense removed");

    Ok(Json(BudgetResponse::from_store(session.store())))
}

/// POST /api/budget/reset - Discard the budget
pub async fn reset_budget(State(state): State<Arc<AppState>>) -> Json<BudgetResponse> {
    let mut session = state.session.lock().await;
    session.store_mut().reset();
    info!("Budget reset");

    Json(BudgetResponse::from_store(session.store()))
}
