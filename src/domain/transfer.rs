//! Transfer entity.
//!
//! A transfer is the immutable record of a completed movement of funds:
//! created exactly once per successful transfer operation, never updated
//! or deleted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::account::AccountId;
use super::money::Money;

/// Transfer ID - UUID v4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferId(Uuid);

impl TransferId {
    /// Generate a new unique TransferId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TransferId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransferId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Immutable record of funds moved from one account to another
#[derive(Debug, Clone)]
pub struct Transfer {
    id: TransferId,
    origin_account_id: AccountId,
    destination_account_id: AccountId,
    amount: Money,
    created_at: DateTime<Utc>,
}

impl Transfer {
    pub fn new(
        id: TransferId,
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            origin_account_id,
            destination_account_id,
            amount,
            created_at,
        }
    }

    pub fn id(&self) -> TransferId {
        self.id
    }

    pub fn origin_account_id(&self) -> AccountId {
        self.origin_account_id
    }

    pub fn destination_account_id(&self) -> AccountId {
        self.destination_account_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer[{}] {} -> {} amount={}",
            self.id, self.origin_account_id, self.destination_account_id, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_id_roundtrip() {
        let id = TransferId::new();
        let parsed: TransferId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_transfer_carries_its_fields() {
        let id = TransferId::new();
        let origin = AccountId::new();
        let destination = AccountId::new();
        let now = Utc::now();
        let transfer = Transfer::new(id, origin, destination, Money::new(300), now);

        assert_eq!(transfer.id(), id);
        assert_eq!(transfer.origin_account_id(), origin);
        assert_eq!(transfer.destination_account_id(), destination);
        assert_eq!(transfer.amount(), Money::new(300));
        assert_eq!(transfer.created_at(), now);
    }
}
