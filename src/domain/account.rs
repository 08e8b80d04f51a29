//! Account entity and the balance invariant.
//!
//! Balances are mutated only through [`Account::withdraw`] and
//! [`Account::deposit`], both operating on the in-memory copy. Whoever
//! loaded the account persists the resulting balance; a committed
//! balance is never negative.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::money::Money;

/// Account ID - UUID v4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new unique AccountId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Withdrawal larger than the current balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("account does not have sufficient funds")]
pub struct InsufficientFunds;

/// Account entity
///
/// The balance field is private on purpose: the only mutation paths are
/// `withdraw` and `deposit`, which keep the invariant checkable in one
/// place.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    name: String,
    tax_id: String,
    balance: Money,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: AccountId,
        name: String,
        tax_id: String,
        balance: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            tax_id,
            balance,
            created_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Debit the in-memory balance. Fails without mutating when the
    /// balance would go negative. Persisting the result is the caller's
    /// job.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), InsufficientFunds> {
        let next = self.balance.subtract(amount);
        if next.is_negative() {
            return Err(InsufficientFunds);
        }
        self.balance = next;
        Ok(())
    }

    /// Credit the in-memory balance. Always succeeds.
    pub fn deposit(&mut self, amount: Money) {
        self.balance = self.balance.add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with_balance(cents: i64) -> Account {
        Account::new(
            AccountId::new(),
            "Ada Lovelace".to_string(),
            "47298817029".to_string(),
            Money::new(cents),
            Utc::now(),
        )
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = account_with_balance(1000);
        account.withdraw(Money::new(300)).unwrap();
        assert_eq!(account.balance(), Money::new(700));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account_with_balance(1000);
        account.withdraw(Money::new(1000)).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn test_withdraw_beyond_balance_fails_unchanged() {
        let mut account = account_with_balance(100);
        let err = account.withdraw(Money::new(300)).unwrap_err();
        assert_eq!(err, InsufficientFunds);
        assert_eq!(account.balance(), Money::new(100));
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        let mut account = account_with_balance(500);
        account.deposit(Money::new(300));
        assert_eq!(account.balance(), Money::new(800));
    }

    #[test]
    fn test_account_id_roundtrip() {
        let id = AccountId::new();
        let parsed: AccountId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_account_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<AccountId>().is_err());
    }
}
