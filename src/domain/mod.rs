//! Domain layer: value types, entities and repository ports.

pub mod account;
pub mod errors;
pub mod money;
pub mod repositories;
pub mod task;
pub mod transfer;

pub use account::{Account, AccountId, InsufficientFunds};
pub use errors::StorageError;
pub use money::Money;
pub use repositories::{AccountRepository, TaskRepository, TransferRepository};
pub use task::{Task, TaskId};
pub use transfer::{Transfer, TransferId};
