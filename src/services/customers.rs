//! Customer registry service

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every registered customer
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        tracing::info!("View all customers request.");
        self.repository.customers.list().await
    }

    /// Validate and register a new customer
    pub async fn create(&self, request: CreateCustomer) -> AppResult<Customer> {
        let customer = request.into_new()?;
        tracing::info!("Adding a new customer: {}", customer.name);
        self.repository.customers.create(&customer).await
    }
}
