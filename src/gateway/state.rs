//! Shared gateway state.

use std::time::Duration;

use crate::account::repository::PgAccountRepository;
use crate::account::service::{
    CreateAccountService, FindAccountBalanceService, FindAllAccountsService,
};
use crate::db::Database;
use crate::task::repository::PgTaskRepository;
use crate::task::service::{CreateTaskService, FindAllTasksService, UpdateTaskService};
use crate::transfer::repository::PgTransferRepository;
use crate::transfer::service::{CreateTransferService, FindAllTransfersService};

/// Application state shared by all handlers
pub struct AppState {
    pub db: Database,
    pub create_transfer: CreateTransferService<PgAccountRepository, PgTransferRepository>,
    pub find_all_transfers: FindAllTransfersService<PgTransferRepository>,
    pub create_account: CreateAccountService<PgAccountRepository>,
    pub find_all_accounts: FindAllAccountsService<PgAccountRepository>,
    pub find_account_balance: FindAccountBalanceService<PgAccountRepository>,
    pub create_task: CreateTaskService<PgTaskRepository>,
    pub update_task: UpdateTaskService<PgTaskRepository>,
    pub find_all_tasks: FindAllTasksService<PgTaskRepository>,
}

impl AppState {
    /// Wire the repositories into services around one connection pool.
    /// Every use case runs under the same configured timeout.
    pub fn new(db: Database, timeout: Duration) -> Self {
        let accounts = PgAccountRepository::new(db.pool().clone());
        let transfers = PgTransferRepository::new(db.pool().clone());
        let tasks = PgTaskRepository::new(db.pool().clone());

        Self {
            create_transfer: CreateTransferService::new(
                accounts.clone(),
                transfers.clone(),
                timeout,
            ),
            find_all_transfers: FindAllTransfersService::new(transfers, timeout),
            create_account: CreateAccountService::new(accounts.clone(), timeout),
            find_all_accounts: FindAllAccountsService::new(accounts.clone(), timeout),
            find_account_balance: FindAccountBalanceService::new(accounts, timeout),
            create_task: CreateTaskService::new(tasks.clone(), timeout),
            update_task: UpdateTaskService::new(tasks.clone(), timeout),
            find_all_tasks: FindAllTasksService::new(tasks, timeout),
            db,
        }
    }
}
