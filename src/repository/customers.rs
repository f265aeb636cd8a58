//! Customers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::customer::{Customer, NewCustomer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Sqlite>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all customers in insertion order
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>(
            "SELECT id, name, city, age, email, is_active FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new active customer
    pub async fn create(&self, customer: &NewCustomer) -> AppResult<Customer> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, city, age, email, is_active)
            VALUES (?, ?, ?, ?, 1)
            RETURNING id, name, city, age, email, is_active
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.city)
        .bind(customer.age)
        .bind(&customer.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// First customer registered with the given email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let row = sqlx::query_as::<_, Customer>(
            "SELECT id, name, city, age, email, is_active FROM customers WHERE email = ? ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
