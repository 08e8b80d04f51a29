//! Account use cases.

use std::time::Duration;

use chrono::Utc;

use super::error::AccountError;
use crate::domain::{Account, AccountId, AccountRepository, Money};

/// Input for opening an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub name: String,
    pub tax_id: String,
    pub initial_balance: Money,
}

/// Opens a new account with an opening balance.
pub struct CreateAccountService<R> {
    accounts: R,
    timeout: Duration,
}

impl<R> CreateAccountService<R>
where
    R: AccountRepository,
{
    pub fn new(accounts: R, timeout: Duration) -> Self {
        Self { accounts, timeout }
    }

    pub async fn execute(&self, input: CreateAccountInput) -> Result<Account, AccountError> {
        tokio::time::timeout(self.timeout, self.process(input))
            .await
            .map_err(|_| AccountError::Timeout)?
    }

    async fn process(&self, input: CreateAccountInput) -> Result<Account, AccountError> {
        let account = Account::new(
            AccountId::new(),
            input.name,
            input.tax_id,
            input.initial_balance,
            Utc::now(),
        );
        Ok(self.accounts.create(account).await?)
    }
}

/// Lists every account, newest first.
pub struct FindAllAccountsService<R> {
    accounts: R,
    timeout: Duration,
}

impl<R> FindAllAccountsService<R>
where
    R: AccountRepository,
{
    pub fn new(accounts: R, timeout: Duration) -> Self {
        Self { accounts, timeout }
    }

    pub async fn execute(&self) -> Result<Vec<Account>, AccountError> {
        let accounts = tokio::time::timeout(self.timeout, self.accounts.find_all())
            .await
            .map_err(|_| AccountError::Timeout)??;
        Ok(accounts)
    }
}

/// Reads one account's current balance.
pub struct FindAccountBalanceService<R> {
    accounts: R,
    timeout: Duration,
}

impl<R> FindAccountBalanceService<R>
where
    R: AccountRepository,
{
    pub fn new(accounts: R, timeout: Duration) -> Self {
        Self { accounts, timeout }
    }

    pub async fn execute(&self, id: AccountId) -> Result<Money, AccountError> {
        let balance = tokio::time::timeout(self.timeout, self.accounts.find_balance(id))
            .await
            .map_err(|_| AccountError::Timeout)??;
        balance.ok_or(AccountError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::domain::StorageError;

    #[derive(Default)]
    struct MockState {
        accounts: HashMap<AccountId, Account>,
        fail_create: bool,
        balance_delay: Option<Duration>,
    }

    #[derive(Clone, Default)]
    struct MockAccounts {
        state: Arc<Mutex<MockState>>,
    }

    impl MockAccounts {
        fn add_account(&self, cents: i64) -> AccountId {
            let account = Account::new(
                AccountId::new(),
                "Grace Hopper".to_string(),
                "83094127044".to_string(),
                Money::new(cents),
                Utc::now(),
            );
            let id = account.id();
            self.state.lock().unwrap().accounts.insert(id, account);
            id
        }

        fn set_fail_create(&self) {
            self.state.lock().unwrap().fail_create = true;
        }

        fn set_balance_delay(&self, delay: Duration) {
            self.state.lock().unwrap().balance_delay = Some(delay);
        }

        fn len(&self) -> usize {
            self.state.lock().unwrap().accounts.len()
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccounts {
        type Tx = ();

        async fn find_by_id(
            &self,
            _tx: &mut Self::Tx,
            id: AccountId,
        ) -> Result<Option<Account>, StorageError> {
            Ok(self.state.lock().unwrap().accounts.get(&id).cloned())
        }

        async fn update_balance(
            &self,
            _tx: &mut Self::Tx,
            id: AccountId,
            balance: Money,
        ) -> Result<(), StorageError> {
            let mut state = self.state.lock().unwrap();
            if let Some(account) = state.accounts.get(&id).cloned() {
                let updated = Account::new(
                    account.id(),
                    account.name().to_string(),
                    account.tax_id().to_string(),
                    balance,
                    account.created_at(),
                );
                state.accounts.insert(id, updated);
            }
            Ok(())
        }

        async fn create(&self, account: Account) -> Result<Account, StorageError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_create {
                return Err(StorageError("insert failed".to_string()));
            }
            state.accounts.insert(account.id(), account.clone());
            Ok(account)
        }

        async fn find_all(&self) -> Result<Vec<Account>, StorageError> {
            let mut accounts: Vec<Account> = self
                .state
                .lock()
                .unwrap()
                .accounts
                .values()
                .cloned()
                .collect();
            accounts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
            Ok(accounts)
        }

        async fn find_balance(&self, id: AccountId) -> Result<Option<Money>, StorageError> {
            let delay = self.state.lock().unwrap().balance_delay;
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self
                .state
                .lock()
                .unwrap()
                .accounts
                .get(&id)
                .map(|a| a.balance()))
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn test_create_account_persists() {
        let store = MockAccounts::default();
        let service = CreateAccountService::new(store.clone(), TIMEOUT);

        let account = service
            .execute(CreateAccountInput {
                name: "Ada Lovelace".to_string(),
                tax_id: "47298817029".to_string(),
                initial_balance: Money::new(10050),
            })
            .await
            .unwrap();

        assert_eq!(account.name(), "Ada Lovelace");
        assert_eq!(account.balance(), Money::new(10050));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_account_storage_failure_surfaces() {
        let store = MockAccounts::default();
        store.set_fail_create();
        let service = CreateAccountService::new(store.clone(), TIMEOUT);

        let err = service
            .execute(CreateAccountInput {
                name: "Ada Lovelace".to_string(),
                tax_id: "47298817029".to_string(),
                initial_balance: Money::ZERO,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Storage(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_find_all_returns_every_account() {
        let store = MockAccounts::default();
        store.add_account(100);
        store.add_account(200);
        let service = FindAllAccountsService::new(store, TIMEOUT);

        let accounts = service.execute().await.unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_find_balance_of_known_account() {
        let store = MockAccounts::default();
        let id = store.add_account(3500);
        let service = FindAccountBalanceService::new(store, TIMEOUT);

        let balance = service.execute(id).await.unwrap();
        assert_eq!(balance, Money::new(3500));
    }

    #[tokio::test]
    async fn test_find_balance_of_unknown_account() {
        let store = MockAccounts::default();
        store.add_account(3500);
        let service = FindAccountBalanceService::new(store, TIMEOUT);

        let err = service.execute(AccountId::new()).await.unwrap_err();
        assert_eq!(err, AccountError::NotFound);
    }

    #[tokio::test]
    async fn test_find_balance_times_out() {
        let store = MockAccounts::default();
        let id = store.add_account(3500);
        store.set_balance_delay(Duration::from_millis(200));
        let service = FindAccountBalanceService::new(store, Duration::from_millis(10));

        let err = service.execute(id).await.unwrap_err();
        assert_eq!(err, AccountError::Timeout);
    }
}
