//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the Transfer API.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

// Import handler types for schema registration
use crate::account::handlers::{AccountData, BalanceData, CreateAccountRequest};
use crate::gateway::health::HealthData;
use crate::task::handlers::{CreateTaskData, TaskSummaryData, TaskTitleRequest, UpdateTaskData};
use crate::transfer::handlers::{CreateTransferRequest, TransferData};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Transfer API",
        version = "1.0.0",
        description = "Money transfers between accounts, with account opening and a small task tracker, on PostgreSQL.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::health::health_check,
        // Transfers
        crate::transfer::handlers::create_transfer,
        crate::transfer::handlers::find_all_transfers,
        // Accounts
        crate::account::handlers::create_account,
        crate::account::handlers::find_all_accounts,
        crate::account::handlers::find_account_balance,
        // Tasks
        crate::task::handlers::create_task,
        crate::task::handlers::update_task,
        crate::task::handlers::find_all_tasks,
    ),
    components(
        schemas(
            HealthData,
            CreateTransferRequest,
            TransferData,
            CreateAccountRequest,
            AccountData,
            BalanceData,
            TaskTitleRequest,
            CreateTaskData,
            UpdateTaskData,
            TaskSummaryData,
        )
    ),
    tags(
        (name = "Transfers", description = "Fund movement between accounts"),
        (name = "Accounts", description = "Account opening and balance queries"),
        (name = "Tasks", description = "Task tracking"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Transfer API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        let json_str = json.unwrap();
        assert!(json_str.contains("Transfer API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/transfers"));
        assert!(paths.paths.contains_key("/api/v1/accounts"));
        assert!(
            paths
                .paths
                .contains_key("/api/v1/accounts/{account_id}/balance")
        );
        assert!(paths.paths.contains_key("/api/v1/tasks/{task_id}"));
    }
}
