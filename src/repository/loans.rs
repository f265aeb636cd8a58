//! Loans repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, LateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "SELECT id, cust_id, book_id, loan_date, return_date, is_active FROM loans WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Insert a loan. Unknown customer or book ids fail on the foreign keys.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let row = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (cust_id, book_id, loan_date, return_date, is_active)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, cust_id, book_id, loan_date, return_date, is_active
            "#,
        )
        .bind(loan.cust_id)
        .bind(loan.book_id)
        .bind(&loan.loan_date)
        .bind(&loan.return_date)
        .bind(loan.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Mark a loan as returned on `return_date`
    pub async fn close(&self, id: i64, return_date: &str) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET is_active = 0, return_date = ?
            WHERE id = ?
            RETURNING id, cust_id, book_id, loan_date, return_date, is_active
            "#,
        )
        .bind(return_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Active loans whose return date sorts before `today` (`YYYY-MM-DD`).
    ///
    /// Dates are compared as text. A NULL return date never matches.
    pub async fn list_late(&self, today: &str) -> AppResult<Vec<LateLoan>> {
        let rows = sqlx::query_as::<_, LateLoan>(
            r#"
            SELECT l.id AS loan_id,
                   l.cust_id AS customer_id,
                   c.name AS customer_name,
                   l.book_id AS book_id,
                   b.name AS book_name,
                   l.loan_date,
                   l.return_date,
                   l.is_active
            FROM loans l
            JOIN customers c ON l.cust_id = c.id
            JOIN books b ON l.book_id = b.id
            WHERE l.return_date < ? AND l.is_active = 1
            ORDER BY l.id
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
