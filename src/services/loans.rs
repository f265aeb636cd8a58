//! Late loan tracking service

use chrono::{Local, NaiveDate};

use crate::{error::AppResult, models::loan::LateLoan, repository::Repository};

/// Format used for loan dates stored as text
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Late loans as of the local calendar date
    pub async fn late_loans(&self) -> AppResult<Vec<LateLoan>> {
        self.late_loans_as_of(Local::now().date_naive()).await
    }

    /// Active loans whose return date is before `date`
    pub async fn late_loans_as_of(&self, date: NaiveDate) -> AppResult<Vec<LateLoan>> {
        let current_date = date.format(DATE_FORMAT).to_string();
        tracing::info!("Checking for late loans as of {}.", current_date);

        let loans = self.repository.loans.list_late(&current_date).await?;

        tracing::info!("Found {} late loans.", loans.len());
        Ok(loans)
    }
}
