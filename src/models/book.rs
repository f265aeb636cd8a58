//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    /// Book type code (external enumeration)
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub book_type: i32,
}

/// Create book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Author is required"))]
    pub author: Option<String>,
    #[validate(required(message = "Year published is required"))]
    pub year_published: Option<i32>,
    #[serde(rename = "type")]
    #[validate(required(message = "Type is required"))]
    pub book_type: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: i32,
}

impl CreateBook {
    /// Validate the request and take the required fields out of it
    pub fn into_new(self) -> Result<NewBook, validator::ValidationErrors> {
        self.validate()?;
        match (self.name, self.author, self.year_published, self.book_type) {
            (Some(name), Some(author), Some(year_published), Some(book_type)) => Ok(NewBook {
                name,
                author,
                year_published,
                book_type,
            }),
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}
