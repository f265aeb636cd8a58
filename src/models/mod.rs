//! Data models for the library catalog

pub mod book;
pub mod customer;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use customer::{CreateCustomer, Customer};
pub use loan::{CreateLoan, LateLoan, Loan};
