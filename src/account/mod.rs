//! Account management.
//!
//! Accounts hold a non-negative balance in minor units. Opening,
//! listing and balance lookup live here; moving funds between accounts
//! is the transfer module's job.

pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;

pub use error::AccountError;
pub use repository::PgAccountRepository;
pub use service::{
    CreateAccountInput, CreateAccountService, FindAccountBalanceService, FindAllAccountsService,
};
