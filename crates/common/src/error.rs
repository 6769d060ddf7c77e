use crate::access::Role;
use crate::types::{Address, Amount, AssetId};
use thiserror::Error;

/// Common error types for the drip faucet
#[derive(Error, Debug)]
pub enum DripError {
    /// Ledger (balance/supply) errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Claim eligibility errors
    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),

    /// Administrative validation errors
    #[error("Admin error: {0}")]
    Admin(#[from] AdminError),

    /// Missing role for a gated operation
    #[error("Account {account} is missing the {role} role")]
    Unauthorized { account: Address, role: Role },

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Ledger specific errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(Address),

    #[error("Supply cap exceeded: supply {supply} + {amount} > cap {cap}")]
    SupplyCapExceeded {
        supply: Amount,
        amount: Amount,
        cap: Amount,
    },

    #[error("Insufficient balance: have {available}, need {required}")]
    InsufficientBalance {
        available: Amount,
        required: Amount,
    },

    #[error("Allowance exceeded: allowed {allowed}, need {required}")]
    AllowanceExceeded { allowed: Amount, required: Amount },

    #[error("System is paused")]
    SystemPaused,
}

/// Claim eligibility errors; all are terminal for the single call
/// and leave every invariant intact.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Programmatic callers may not claim")]
    ProgrammaticCallerRejected,

    #[error("Claim too soon: try again in {seconds_remaining} seconds")]
    TooSoon { seconds_remaining: u64 },

    #[error("Daily distribution cap exceeded")]
    DailyCapExceeded,

    #[error("Insufficient faucet funds")]
    InsufficientFaucetFunds,

    #[error("Invalid account: {0}")]
    InvalidAccount(Address),
}

/// Administrative validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdminError {
    #[error("Claim amount must be greater than zero")]
    ZeroClaimAmount,

    #[error("Claim interval must be greater than zero")]
    ZeroClaimInterval,

    #[error("Daily limit {limit} is below the claim amount {amount}")]
    DailyLimitBelowClaimAmount { limit: Amount, amount: Amount },

    #[error("Cannot recover the faucet's own distributed asset")]
    CannotRecoverNativeAsset,

    #[error("Invalid asset: {0}")]
    InvalidAsset(AssetId),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DripError>;

impl From<serde_json::Error> for DripError {
    fn from(err: serde_json::Error) -> Self {
        DripError::Internal(err.to_string())
    }
}
