//! Book registry service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateBook) -> AppResult<Book> {
        let book = request.into_new()?;
        tracing::info!("Adding a new book: {}", book.name);
        self.repository.books.create(&book).await
    }
}
