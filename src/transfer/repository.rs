//! PostgreSQL transfer repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::domain::{AccountId, Money, StorageError, Transfer, TransferId, TransferRepository};

/// sqlx-backed transfer store. Also the owner of the transaction
/// handle the whole transfer operation runs under.
#[derive(Clone)]
pub struct PgTransferRepository {
    pool: PgPool,
}

impl PgTransferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn transfer_from_row(row: &sqlx::postgres::PgRow) -> Result<Transfer, sqlx::Error> {
        Ok(Transfer::new(
            TransferId::from(row.try_get::<Uuid, _>("id")?),
            AccountId::from(row.try_get::<Uuid, _>("origin_account_id")?),
            AccountId::from(row.try_get::<Uuid, _>("destination_account_id")?),
            Money::new(row.try_get("amount")?),
            row.try_get("created_at")?,
        ))
    }
}

#[async_trait]
impl TransferRepository for PgTransferRepository {
    type Tx = Transaction<'static, Postgres>;

    async fn begin(&self) -> Result<Self::Tx, StorageError> {
        Ok(self.pool.begin().await?)
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), StorageError> {
        Ok(tx.commit().await?)
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), StorageError> {
        Ok(tx.rollback().await?)
    }

    async fn create(
        &self,
        tx: &mut Self::Tx,
        transfer: Transfer,
    ) -> Result<Transfer, StorageError> {
        sqlx::query(
            "INSERT INTO transfers (id, origin_account_id, destination_account_id, amount, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(transfer.id().inner())
        .bind(transfer.origin_account_id().inner())
        .bind(transfer.destination_account_id().inner())
        .bind(transfer.amount().cents())
        .bind(transfer.created_at())
        .execute(&mut **tx)
        .await?;

        Ok(transfer)
    }

    async fn find_all(&self) -> Result<Vec<Transfer>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, origin_account_id, destination_account_id, amount, created_at
             FROM transfers
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let transfers = rows
            .iter()
            .map(Self::transfer_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(transfers)
    }
}
