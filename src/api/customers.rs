//! Customer endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer},
    AppState,
};

use super::MessageResponse;

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.list().await?;
    Ok(Json(customers))
}

/// Register a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer added", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateCustomer>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.customers.create(request).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Customer added"))))
}
