//! Money transfers between accounts.
//!
//! A transfer debits the origin account and credits the destination
//! inside one database transaction, with both account rows locked for
//! the duration. Either every write lands or none does.

pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;

pub use error::TransferError;
pub use repository::PgTransferRepository;
pub use service::{CreateTransferInput, CreateTransferService, FindAllTransfersService};
