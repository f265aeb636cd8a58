//! Loan endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::loan::LateLoan, AppState};

/// List active loans whose return date has passed
#[utoipa::path(
    get,
    path = "/loans/late",
    tag = "loans",
    responses(
        (status = 200, description = "Late loans with customer and book names", body = Vec<LateLoan>)
    )
)]
pub async fn list_late_loans(State(state): State<AppState>) -> AppResult<Json<Vec<LateLoan>>> {
    let loans = state.services.loans.late_loans().await?;
    Ok(Json(loans))
}
