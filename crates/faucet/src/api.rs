//! HTTP API for the faucet service
//!
//! Caller identity comes from the request body at this boundary; every
//! request is classified as an external (non-programmatic) caller.

use crate::config::FaucetConfig;
use crate::error::{ApiError, ApiResult};
use crate::service::{CallerKind, FaucetService, FaucetStatus};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use drip_common::error::{ClaimError, DripError};
use drip_common::types::{Address, Amount, AssetId, Timestamp};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Claim request
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub address: String,
}

/// Admin request carrying the caller identity
#[derive(Debug, Deserialize)]
pub struct ConfigureRequest {
    pub caller: String,
    pub claim_amount: String,
    pub claim_interval_secs: u64,
    pub daily_limit: String,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub caller: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct RecoverRequest {
    pub caller: String,
    pub asset: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct CreditRequest {
    pub caller: String,
    pub asset: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct PauseRequest {
    pub caller: String,
}

/// Claim response (amounts as strings for JSON safety)
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub address: String,
    pub amount: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct CanClaimResponse {
    pub eligible: bool,
    pub seconds_until_eligible: u64,
}

/// Success response envelope
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub data: T,
    pub timestamp: String,
}

impl<T> SuccessResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn now() -> Timestamp {
    chrono::Utc::now().timestamp().max(0) as Timestamp
}

fn parse_address(s: &str) -> Result<Address, ApiError> {
    Address::from_hex(s)
        .ok_or_else(|| ApiError(ClaimError::InvalidAccount(Address::ZERO).into()))
}

fn parse_amount(s: &str) -> Result<Amount, ApiError> {
    s.parse::<Amount>()
        .map_err(|_| ApiError(DripError::Internal(format!("Invalid amount: {}", s))))
}

/// Claim handler
pub async fn claim_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<ClaimRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Claim request: address={}", request.address);
    let address = parse_address(&request.address)?;

    match service.claim(address, CallerKind::External, now()).await {
        Ok(receipt) => Ok(Json(SuccessResponse::new(ClaimResponse {
            address: receipt.account.to_string(),
            amount: receipt.amount.to_string(),
            timestamp: receipt.timestamp,
        }))),
        Err(e) => {
            error!("Claim failed: {}", e);
            Err(e.into())
        }
    }
}

/// Eligibility polling handler
pub async fn can_claim_handler(
    State(service): State<Arc<FaucetService>>,
    Path(address): Path<String>,
) -> ApiResult<Json<SuccessResponse<CanClaimResponse>>> {
    let address = parse_address(&address)?;
    let (eligible, seconds_until_eligible) = service.can_claim(address, now()).await?;

    Ok(Json(SuccessResponse::new(CanClaimResponse {
        eligible,
        seconds_until_eligible,
    })))
}

/// Status handler
pub async fn status_handler(
    State(service): State<Arc<FaucetService>>,
) -> Json<SuccessResponse<FaucetStatus>> {
    Json(SuccessResponse::new(service.status(now()).await))
}

/// Reconfiguration handler (Admin)
pub async fn configure_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<ConfigureRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    let config = FaucetConfig {
        claim_amount: parse_amount(&request.claim_amount)?,
        claim_interval_secs: request.claim_interval_secs,
        daily_limit: parse_amount(&request.daily_limit)?,
    };

    service.configure(caller, config).await?;
    Ok(Json(SuccessResponse::new("configured")))
}

/// Withdrawal handler (Admin)
pub async fn withdraw_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<WithdrawRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    let amount = parse_amount(&request.amount)?;

    service.withdraw(caller, amount).await?;
    Ok(Json(SuccessResponse::new("withdrawn")))
}

/// Foreign-fund recovery handler (SuperAdmin)
pub async fn recover_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<RecoverRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    let asset = AssetId::from_hex(&request.asset)
        .ok_or_else(|| ApiError(DripError::Internal("Invalid asset id".to_string())))?;
    let amount = parse_amount(&request.amount)?;

    service.recover_foreign_funds(caller, asset, amount).await?;
    Ok(Json(SuccessResponse::new("recovered")))
}

/// Foreign-fund credit handler (Admin). Reports assets that arrived at
/// the holding account out of band so they become recoverable.
pub async fn credit_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<CreditRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    let asset = AssetId::from_hex(&request.asset)
        .ok_or_else(|| ApiError(DripError::Internal("Invalid asset id".to_string())))?;
    let amount = parse_amount(&request.amount)?;

    service.credit_foreign_funds(caller, asset, amount).await?;
    Ok(Json(SuccessResponse::new("credited")))
}

/// Pause handler (Pauser)
pub async fn pause_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<PauseRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    service.pause(caller).await?;
    Ok(Json(SuccessResponse::new("paused")))
}

/// Unpause handler (Pauser)
pub async fn unpause_handler(
    State(service): State<Arc<FaucetService>>,
    Json(request): Json<PauseRequest>,
) -> ApiResult<Json<SuccessResponse<&'static str>>> {
    let caller = parse_address(&request.caller)?;
    service.unpause(caller).await?;
    Ok(Json(SuccessResponse::new("unpaused")))
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Root handler with info
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Drip Faucet",
        "version": "0.1.0",
        "description": "Rate-limited token distribution faucet",
        "endpoints": {
            "POST /api/claim": "Request tokens",
            "GET /api/can_claim/:address": "Check eligibility",
            "GET /api/status": "Get faucet status",
            "POST /api/admin/configure": "Change claim policy (Admin)",
            "POST /api/admin/withdraw": "Withdraw funds (Admin)",
            "POST /api/admin/credit": "Report arrived foreign assets (Admin)",
            "POST /api/admin/recover": "Recover foreign assets (SuperAdmin)",
            "POST /api/admin/pause": "Pause the system (Pauser)",
            "POST /api/admin/unpause": "Unpause the system (Pauser)",
            "GET /health": "Health check"
        }
    }))
}
