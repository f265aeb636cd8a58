//! Loan model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan model from database
///
/// Dates are stored as text. The late-loan query compares them as strings,
/// which only orders correctly for zero-padded `YYYY-MM-DD` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub cust_id: i64,
    pub book_id: i64,
    pub loan_date: String,
    pub return_date: Option<String>,
    pub is_active: bool,
}

/// Loan insert, used by storage-level callers only
#[derive(Debug, Clone)]
pub struct CreateLoan {
    pub cust_id: i64,
    pub book_id: i64,
    pub loan_date: String,
    pub return_date: Option<String>,
    pub is_active: bool,
}

/// Late loan with customer and book names inlined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LateLoan {
    pub loan_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub book_id: i64,
    pub book_name: String,
    pub loan_date: String,
    pub return_date: Option<String>,
    pub is_active: bool,
}
