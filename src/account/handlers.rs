//! Account HTTP handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::error::AccountError;
use super::service::CreateAccountInput;
use crate::domain::{Account, Money};
use crate::gateway::helpers::{invalid_parameter, validate_uuid4, validation_message};
use crate::gateway::response::ApiResponse;
use crate::gateway::state::AppState;

/// Account creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    /// Account holder name
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Tax payer id
    #[validate(length(min = 1, max = 32))]
    #[schema(example = "47298817029")]
    pub cpf: String,
    /// Opening balance in minor units (cents)
    #[validate(range(min = 0))]
    #[schema(example = 100000)]
    pub balance: i64,
}

/// Account response data
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountData {
    pub id: String,
    pub name: String,
    pub cpf: String,
    /// Balance as display value
    #[schema(example = 1000.0)]
    pub balance: f64,
    /// RFC3339 creation time
    pub created_at: String,
}

impl From<Account> for AccountData {
    fn from(account: Account) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_string(),
            cpf: account.tax_id().to_string(),
            balance: account.balance().to_display(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// Balance response data
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceData {
    /// Balance as display value
    #[schema(example = 250.5)]
    pub balance: f64,
}

/// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account opened", body = AccountData),
        (status = 400, description = "Invalid input")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountData>>), (StatusCode, Json<ApiResponse<()>>)> {
    req.validate()
        .map_err(|errs| invalid_parameter(validation_message(&errs)))?;

    let account = state
        .create_account
        .execute(CreateAccountInput {
            name: req.name,
            tax_id: req.cpf,
            initial_balance: Money::new(req.balance),
        })
        .await
        .map_err(|err| error_response("create_account", err))?;

    tracing::info!(id = %account.id(), "account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AccountData::from(account))),
    ))
}

/// GET /api/v1/accounts
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses(
        (status = 200, description = "All accounts, newest first", body = [AccountData])
    ),
    tag = "Accounts"
)]
pub async fn find_all_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<AccountData>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let accounts = state
        .find_all_accounts
        .execute()
        .await
        .map_err(|err| error_response("find_all_accounts", err))?;

    let data = accounts.into_iter().map(AccountData::from).collect();
    Ok(Json(ApiResponse::success(data)))
}

/// GET /api/v1/accounts/{account_id}/balance
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}/balance",
    params(
        ("account_id" = String, Path, description = "Account id (UUID v4)")
    ),
    responses(
        (status = 200, description = "Current balance", body = BalanceData),
        (status = 400, description = "Malformed account id"),
        (status = 404, description = "Account unknown")
    ),
    tag = "Accounts"
)]
pub async fn find_account_balance(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<ApiResponse<BalanceData>>, (StatusCode, Json<ApiResponse<()>>)> {
    validate_uuid4(&account_id)
        .map_err(|_| invalid_parameter("account_id: must be a version-4 UUID"))?;
    let id = account_id
        .parse()
        .map_err(|_| invalid_parameter("account_id: must be a version-4 UUID"))?;

    let balance = state
        .find_account_balance
        .execute(id)
        .await
        .map_err(|err| error_response("find_account_balance", err))?;

    Ok(Json(ApiResponse::success(BalanceData {
        balance: balance.to_display(),
    })))
}

/// Map a use-case failure onto the envelope. Server-side faults log at
/// error, domain rejections at warn.
fn error_response(key: &str, err: AccountError) -> (StatusCode, Json<ApiResponse<()>>) {
    match &err {
        AccountError::Storage(_) | AccountError::Timeout => {
            tracing::error!(key, error = %err, "request failed")
        }
        _ => tracing::warn!(key, error = %err, "request rejected"),
    }
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::<()>::error(err.code(), err.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::AccountId;

    #[test]
    fn test_valid_request_passes() {
        let req = CreateAccountRequest {
            name: "Ada Lovelace".to_string(),
            cpf: "47298817029".to_string(),
            balance: 100000,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_name_and_cpf() {
        let req = CreateAccountRequest {
            name: String::new(),
            cpf: String::new(),
            balance: 0,
        };
        let errs = req.validate().unwrap_err();
        let msg = validation_message(&errs);
        assert!(msg.contains("name"));
        assert!(msg.contains("cpf"));
    }

    #[test]
    fn test_rejects_negative_opening_balance() {
        let req = CreateAccountRequest {
            name: "Ada Lovelace".to_string(),
            cpf: "47298817029".to_string(),
            balance: -1,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_account_data_formatting() {
        let account = Account::new(
            AccountId::new(),
            "Ada Lovelace".to_string(),
            "47298817029".to_string(),
            Money::new(100050),
            Utc::now(),
        );
        let data = AccountData::from(account.clone());
        assert_eq!(data.id, account.id().to_string());
        assert_eq!(data.balance, 1000.5);
        assert_eq!(data.cpf, "47298817029");
    }
}
