//! Handler helper functions
//!
//! Shared utilities used by the handlers of every bounded context.

use axum::{Json, http::StatusCode};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use super::response::{ApiResponse, error_codes};

/// Field validator: well-formed version-4 UUID
pub fn validate_uuid4(value: &str) -> Result<(), ValidationError> {
    let parsed = Uuid::parse_str(value).map_err(|_| uuid4_error())?;
    if parsed.get_version_num() != 4 {
        return Err(uuid4_error());
    }
    Ok(())
}

fn uuid4_error() -> ValidationError {
    let mut err = ValidationError::new("uuid4");
    err.message = Some("must be a version-4 UUID".into());
    err
}

/// Flatten validator output into a single envelope message
pub fn validation_message(errs: &ValidationErrors) -> String {
    let mut msgs: Vec<String> = errs
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| match &err.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect();
    msgs.sort();
    msgs.join("; ")
}

/// 400 response for request validation failures
pub fn invalid_parameter(msg: impl Into<String>) -> (StatusCode, Json<ApiResponse<()>>) {
    let msg = msg.into();
    tracing::warn!(error = %msg, "invalid parameter");
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(
            error_codes::INVALID_PARAMETER,
            msg,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid4_accepts_v4() {
        let id = Uuid::new_v4().to_string();
        assert!(validate_uuid4(&id).is_ok());
    }

    #[test]
    fn test_validate_uuid4_rejects_other_versions() {
        // Version-1 style UUID (time-based)
        assert!(validate_uuid4("c232ab00-9414-11ec-b3c8-9f68deced846").is_err());
        assert!(validate_uuid4("not-a-uuid").is_err());
        assert!(validate_uuid4("").is_err());
    }
}
