//! Transfer use cases.
//!
//! `CreateTransferService` is the transactional heart of the system: it
//! debits the origin, credits the destination and records the transfer
//! inside one database transaction, with row locks held on both account
//! rows until commit. The service returns typed errors and never logs;
//! the handler layer decides status codes and logging.

use std::time::Duration;

use chrono::Utc;

use super::error::TransferError;
use crate::domain::{AccountId, AccountRepository, Money, Transfer, TransferId, TransferRepository};

/// Input for a transfer creation, already validated at the boundary
#[derive(Debug, Clone, Copy)]
pub struct CreateTransferInput {
    pub origin_account_id: AccountId,
    pub destination_account_id: AccountId,
    pub amount: Money,
}

/// Atomically move funds between two accounts
pub struct CreateTransferService<AR, TR> {
    accounts: AR,
    transfers: TR,
    timeout: Duration,
}

impl<AR, TR> CreateTransferService<AR, TR>
where
    AR: AccountRepository,
    TR: TransferRepository<Tx = AR::Tx>,
{
    pub fn new(accounts: AR, transfers: TR, timeout: Duration) -> Self {
        Self {
            accounts,
            transfers,
            timeout,
        }
    }

    /// Run the transfer under the configured timeout. On expiry the
    /// in-flight transaction handle is dropped, which rolls it back.
    pub async fn execute(&self, input: CreateTransferInput) -> Result<Transfer, TransferError> {
        tokio::time::timeout(self.timeout, self.process(input))
            .await
            .map_err(|_| TransferError::Timeout)?
    }

    async fn process(&self, input: CreateTransferInput) -> Result<Transfer, TransferError> {
        let mut tx = self.transfers.begin().await?;

        match self.transfer_in_tx(&mut tx, &input).await {
            Ok(transfer) => {
                self.transfers.commit(tx).await?;
                Ok(transfer)
            }
            Err(err) => {
                // The rollback result must not mask the original error.
                let _ = self.transfers.rollback(tx).await;
                Err(err)
            }
        }
    }

    /// The transfer state machine. Origin is always read and debited
    /// before destination is read and credited; both reads hold row
    /// locks, so a conflicting transfer waits at its own step 1.
    async fn transfer_in_tx(
        &self,
        tx: &mut AR::Tx,
        input: &CreateTransferInput,
    ) -> Result<Transfer, TransferError> {
        let mut origin = self
            .accounts
            .find_by_id(tx, input.origin_account_id)
            .await?
            .ok_or(TransferError::AccountOriginNotFound)?;

        origin.withdraw(input.amount)?;

        let mut destination = self
            .accounts
            .find_by_id(tx, input.destination_account_id)
            .await?
            .ok_or(TransferError::AccountDestinationNotFound)?;

        destination.deposit(input.amount);

        self.accounts
            .update_balance(tx, origin.id(), origin.balance())
            .await?;
        self.accounts
            .update_balance(tx, destination.id(), destination.balance())
            .await?;

        let transfer = Transfer::new(
            TransferId::new(),
            input.origin_account_id,
            input.destination_account_id,
            input.amount,
            Utc::now(),
        );
        let transfer = self.transfers.create(tx, transfer).await?;

        Ok(transfer)
    }
}

/// List all transfer records, newest first
pub struct FindAllTransfersService<TR> {
    transfers: TR,
    timeout: Duration,
}

impl<TR: TransferRepository> FindAllTransfersService<TR> {
    pub fn new(transfers: TR, timeout: Duration) -> Self {
        Self { transfers, timeout }
    }

    pub async fn execute(&self) -> Result<Vec<Transfer>, TransferError> {
        let transfers = tokio::time::timeout(self.timeout, self.transfers.find_all())
            .await
            .map_err(|_| TransferError::Timeout)??;
        Ok(transfers)
    }
}
