//! PostgreSQL persistence for accounts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::domain::{Account, AccountId, AccountRepository, Money, StorageError};

/// Account store backed by the `accounts` table.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, sqlx::Error> {
    let id = row.try_get::<Uuid, _>("id")?;
    let name = row.try_get::<String, _>("name")?;
    let tax_id = row.try_get::<String, _>("tax_id")?;
    let balance = row.try_get::<i64, _>("balance")?;
    let created_at = row.try_get::<DateTime<Utc>, _>("created_at")?;

    Ok(Account::new(
        AccountId::from(id),
        name,
        tax_id,
        Money::new(balance),
        created_at,
    ))
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    type Tx = Transaction<'static, Postgres>;

    /// Loads an account and locks its row until the transaction ends.
    async fn find_by_id(
        &self,
        tx: &mut Self::Tx,
        id: AccountId,
    ) -> Result<Option<Account>, StorageError> {
        let row = sqlx::query(
            r#"SELECT id, name, tax_id, balance, created_at
               FROM accounts WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id.inner())
        .fetch_optional(&mut **tx)
        .await?;

        row.as_ref().map(account_from_row).transpose().map_err(StorageError::from)
    }

    async fn update_balance(
        &self,
        tx: &mut Self::Tx,
        id: AccountId,
        balance: Money,
    ) -> Result<(), StorageError> {
        sqlx::query(r#"UPDATE accounts SET balance = $2 WHERE id = $1"#)
            .bind(id.inner())
            .bind(balance.cents())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    async fn create(&self, account: Account) -> Result<Account, StorageError> {
        sqlx::query(
            r#"INSERT INTO accounts (id, name, tax_id, balance, created_at)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(account.id().inner())
        .bind(account.name())
        .bind(account.tax_id())
        .bind(account.balance().cents())
        .bind(account.created_at())
        .execute(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<Account>, StorageError> {
        let rows = sqlx::query(
            r#"SELECT id, name, tax_id, balance, created_at
               FROM accounts ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(account_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::from)
    }

    async fn find_balance(&self, id: AccountId) -> Result<Option<Money>, StorageError> {
        let balance = sqlx::query_scalar::<_, i64>(r#"SELECT balance FROM accounts WHERE id = $1"#)
            .bind(id.inner())
            .fetch_optional(&self.pool)
            .await?;

        Ok(balance.map(Money::new))
    }
}
