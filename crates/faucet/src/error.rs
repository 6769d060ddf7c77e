//! HTTP mapping for faucet service errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use drip_common::error::{AdminError, ClaimError, DripError, LedgerError};
use serde_json::json;

/// Wrapper so `DripError` can be returned straight from axum handlers.
pub struct ApiError(pub DripError);

impl From<DripError> for ApiError {
    fn from(err: DripError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DripError::Claim(ClaimError::TooSoon { .. }) => {
                (StatusCode::TOO_MANY_REQUESTS, "CLAIM_TOO_SOON")
            }
            DripError::Claim(ClaimError::DailyCapExceeded) => {
                (StatusCode::TOO_MANY_REQUESTS, "DAILY_CAP_EXCEEDED")
            }
            DripError::Claim(ClaimError::InsufficientFaucetFunds) => {
                (StatusCode::SERVICE_UNAVAILABLE, "INSUFFICIENT_FUNDS")
            }
            DripError::Claim(ClaimError::ProgrammaticCallerRejected) => {
                (StatusCode::FORBIDDEN, "PROGRAMMATIC_CALLER")
            }
            DripError::Claim(ClaimError::InvalidAccount(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ACCOUNT")
            }
            DripError::Ledger(LedgerError::SystemPaused) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SYSTEM_PAUSED")
            }
            DripError::Ledger(_) => (StatusCode::BAD_REQUEST, "LEDGER_ERROR"),
            DripError::Admin(AdminError::CannotRecoverNativeAsset) => {
                (StatusCode::BAD_REQUEST, "CANNOT_RECOVER_NATIVE_ASSET")
            }
            DripError::Admin(AdminError::InvalidAsset(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ASSET")
            }
            DripError::Admin(_) => (StatusCode::BAD_REQUEST, "INVALID_CONFIG"),
            DripError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "UNAUTHORIZED"),
            DripError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "error": error_code,
            "message": self.0.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(DripError, StatusCode)> = vec![
            (
                ClaimError::TooSoon {
                    seconds_remaining: 1,
                }
                .into(),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                ClaimError::InsufficientFaucetFunds.into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                LedgerError::SystemPaused.into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AdminError::ZeroClaimAmount.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DripError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
