//! Transfer HTTP handlers.
//!
//! Requests are validated here, before any use case runs; responses
//! carry ids as strings, amounts as display values and RFC3339 times.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::error::TransferError;
use super::service::CreateTransferInput;
use crate::domain::{Money, Transfer};
use crate::gateway::helpers::{invalid_parameter, validate_uuid4, validation_message};
use crate::gateway::response::ApiResponse;
use crate::gateway::state::AppState;

/// Transfer creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validate_distinct_accounts))]
pub struct CreateTransferRequest {
    /// Origin account id (UUID v4)
    #[validate(custom(function = validate_uuid4))]
    #[schema(example = "3c096a40-ccba-4b58-93ed-57379ab04679")]
    pub account_origin_id: String,
    /// Destination account id (UUID v4)
    #[validate(custom(function = validate_uuid4))]
    #[schema(example = "7d4fbd21-81d5-4421-a5a1-a714cb21c739")]
    pub account_destination_id: String,
    /// Amount in minor units (cents), strictly positive
    #[validate(range(min = 1))]
    #[schema(example = 10000)]
    pub amount: i64,
}

fn validate_distinct_accounts(
    req: &CreateTransferRequest,
) -> Result<(), validator::ValidationError> {
    if req.account_origin_id == req.account_destination_id {
        let mut err = validator::ValidationError::new("distinct_accounts");
        err.message = Some("origin and destination accounts must differ".into());
        return Err(err);
    }
    Ok(())
}

/// Transfer response data
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferData {
    pub id: String,
    pub account_origin_id: String,
    pub account_destination_id: String,
    /// Amount as display value
    #[schema(example = 100.0)]
    pub amount: f64,
    /// RFC3339 creation time
    pub created_at: String,
}

impl From<Transfer> for TransferData {
    fn from(transfer: Transfer) -> Self {
        Self {
            id: transfer.id().to_string(),
            account_origin_id: transfer.origin_account_id().to_string(),
            account_destination_id: transfer.destination_account_id().to_string(),
            amount: transfer.amount().to_display(),
            created_at: transfer.created_at().to_rfc3339(),
        }
    }
}

/// POST /api/v1/transfers
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer applied", body = TransferData),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Origin or destination account unknown"),
        (status = 422, description = "Insufficient funds"),
        (status = 504, description = "Operation timed out")
    ),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransferRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransferData>>), (StatusCode, Json<ApiResponse<()>>)> {
    req.validate()
        .map_err(|errs| invalid_parameter(validation_message(&errs)))?;

    let input = CreateTransferInput {
        origin_account_id: req
            .account_origin_id
            .parse()
            .map_err(|_| invalid_parameter("account_origin_id: must be a version-4 UUID"))?,
        destination_account_id: req
            .account_destination_id
            .parse()
            .map_err(|_| invalid_parameter("account_destination_id: must be a version-4 UUID"))?,
        amount: Money::new(req.amount),
    };

    let transfer = state
        .create_transfer
        .execute(input)
        .await
        .map_err(|err| error_response("create_transfer", err))?;

    tracing::info!(id = %transfer.id(), amount = transfer.amount().cents(), "transfer created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(TransferData::from(transfer))),
    ))
}

/// GET /api/v1/transfers
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    responses(
        (status = 200, description = "All transfers, newest first", body = [TransferData])
    ),
    tag = "Transfers"
)]
pub async fn find_all_transfers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TransferData>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let transfers = state
        .find_all_transfers
        .execute()
        .await
        .map_err(|err| error_response("find_all_transfers", err))?;

    let data = transfers.into_iter().map(TransferData::from).collect();
    Ok(Json(ApiResponse::success(data)))
}

/// Map a use-case failure onto the envelope. Server-side faults log at
/// error, domain rejections at warn.
fn error_response(key: &str, err: TransferError) -> (StatusCode, Json<ApiResponse<()>>) {
    match &err {
        TransferError::Storage(_) | TransferError::Timeout => {
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
    use uuid::Uuid;

    fn valid_request() -> CreateTransferRequest {
        CreateTransferRequest {
            account_origin_id: Uuid::new_v4().to_string(),
            account_destination_id: Uuid::new_v4().to_string(),
            amount: 10000,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_uuid_ids() {
        let mut req = valid_request();
        req.account_origin_id = "abc".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let mut req = valid_request();
        req.amount = 0;
        assert!(req.validate().is_err());
        req.amount = -5;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_equal_origin_and_destination() {
        let mut req = valid_request();
        req.account_destination_id = req.account_origin_id.clone();
        let errs = req.validate().unwrap_err();
        assert!(validation_message(&errs).contains("must differ"));
    }

    #[test]
    fn test_transfer_data_formatting() {
        let transfer = Transfer::new(
            crate::domain::TransferId::new(),
            crate::domain::AccountId::new(),
            crate::domain::AccountId::new(),
            Money::new(12345),
            chrono::Utc::now(),
        );
        let data = TransferData::from(transfer.clone());
        assert_eq!(data.id, transfer.id().to_string());
        assert_eq!(data.amount, 123.45);
        assert!(data.created_at.contains('T'));
    }
}
