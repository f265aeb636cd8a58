//! Business logic services

pub mod books;
pub mod customers;
pub mod loans;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub customers: customers::CustomersService,
    pub books: books::BooksService,
    pub loans: loans::LoansService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            customers: customers::CustomersService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            repository,
        }
    }

    /// Repository backing the services
    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
