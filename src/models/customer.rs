//! Customer model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Customer model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub age: i32,
    pub email: String,
    pub is_active: bool,
}

/// Create customer request
///
/// Every field is optional at the wire level so that a missing field is
/// reported through validation as a 400 instead of a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(required(message = "City is required"))]
    pub city: Option<String>,
    #[validate(required(message = "Age is required"))]
    pub age: Option<i32>,
    #[validate(required(message = "Email is required"))]
    pub email: Option<String>,
}

/// Customer fields after validation
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub city: String,
    pub age: i32,
    pub email: String,
}

impl CreateCustomer {
    /// Validate the request and take the required fields out of it
    pub fn into_new(self) -> Result<NewCustomer, validator::ValidationErrors> {
        self.validate()?;
        match (self.name, self.city, self.age, self.email) {
            (Some(name), Some(city), Some(age), Some(email)) => Ok(NewCustomer {
                name,
                city,
                age,
                email,
            }),
            // validate() rejects every combination with a None
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}
