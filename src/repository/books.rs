//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new book
    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, author, year_published, type)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, author, year_published, type
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(book.year_published)
        .bind(book.book_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// First book with the given title
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, name, author, year_published, type FROM books WHERE name = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
