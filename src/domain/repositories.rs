//! Repository trait definitions
//!
//! These traits define the contract for data access. Implementations
//! live in each bounded context; the services depend only on these.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::account::{Account, AccountId};
use super::errors::StorageError;
use super::money::Money;
use super::task::{Task, TaskId};
use super::transfer::Transfer;

/// Repository trait for Account storage
///
/// `Tx` is the transaction handle shared with [`TransferRepository`].
/// Reads taken through it must hold a row lock until the transaction
/// ends, so that concurrent debits of the same account serialize.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    type Tx: Send;

    /// Row-locked read inside an open transaction. `None` when the id
    /// is unknown.
    async fn find_by_id(
        &self,
        tx: &mut Self::Tx,
        id: AccountId,
    ) -> Result<Option<Account>, StorageError>;

    /// Persist a balance already validated by the domain entity.
    async fn update_balance(
        &self,
        tx: &mut Self::Tx,
        id: AccountId,
        balance: Money,
    ) -> Result<(), StorageError>;

    /// Persist a freshly constructed account
    async fn create(&self, account: Account) -> Result<Account, StorageError>;

    /// All accounts, newest first
    async fn find_all(&self) -> Result<Vec<Account>, StorageError>;

    /// Balance of one account, outside any transaction. `None` when the
    /// id is unknown.
    async fn find_balance(&self, id: AccountId) -> Result<Option<Money>, StorageError>;
}

/// Repository trait for Transfer storage
///
/// Owns the transactional scope: `begin` yields the handle the account
/// operations run under, `commit` makes the writes visible, and an
/// unconsumed handle rolls back when dropped. `rollback` exists for the
/// explicit abort paths.
#[async_trait]
pub trait TransferRepository: Send + Sync {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, StorageError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), StorageError>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), StorageError>;

    /// Persist a transfer record inside an open transaction
    async fn create(&self, tx: &mut Self::Tx, transfer: Transfer)
    -> Result<Transfer, StorageError>;

    /// All transfers, newest first
    async fn find_all(&self) -> Result<Vec<Transfer>, StorageError>;
}

/// Repository trait for Task storage
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task; the store assigns the id. Both timestamps
    /// start at `created_at`.
    async fn create(&self, title: &str, created_at: DateTime<Utc>)
    -> Result<Task, StorageError>;

    /// Update a task's title. `None` when the id is unknown.
    async fn update(
        &self,
        id: TaskId,
        title: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Task>, StorageError>;

    /// All tasks in insertion order
    async fn find_all(&self) -> Result<Vec<Task>, StorageError>;
}
