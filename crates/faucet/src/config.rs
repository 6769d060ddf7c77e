//! Faucet configuration

use drip_common::error::AdminError;
use drip_common::types::{Address, Amount, AssetId};
use std::time::Duration;

/// Claim policy. Admin-mutable at runtime; every change is validated
/// as a whole before any field is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaucetConfig {
    /// Amount distributed per successful claim (in base units)
    pub claim_amount: Amount,

    /// Minimum seconds an account must wait between claims
    pub claim_interval_secs: u64,

    /// Maximum total amount distributed within one day-index window
    pub daily_limit: Amount,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            claim_amount: 1_000_000_000_000_000_000_000, // 1000 tokens
            claim_interval_secs: 86_400,                 // 24 hours
            daily_limit: 100_000_000_000_000_000_000_000, // 100k tokens
        }
    }
}

impl FaucetConfig {
    /// Validate the constraints that must hold after every change:
    /// `claim_amount > 0`, `claim_interval > 0`,
    /// `daily_limit >= claim_amount`.
    pub fn validate(&self) -> Result<(), AdminError> {
        if self.claim_amount == 0 {
            return Err(AdminError::ZeroClaimAmount);
        }
        if self.claim_interval_secs == 0 {
            return Err(AdminError::ZeroClaimInterval);
        }
        if self.daily_limit < self.claim_amount {
            return Err(AdminError::DailyLimitBelowClaimAmount {
                limit: self.daily_limit,
                amount: self.claim_amount,
            });
        }
        Ok(())
    }

    pub fn claim_interval(&self) -> Duration {
        Duration::from_secs(self.claim_interval_secs)
    }
}

/// Service-level settings: server, accounts, funding
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Server address
    pub server_addr: String,

    /// Immutable supply ceiling; minted in full to the treasury at start
    pub max_supply: Amount,

    /// Amount moved from the treasury into the faucet holding account
    /// at startup
    pub initial_funding: Amount,

    /// Account receiving the initial mint; holds the undistributed reserve
    pub treasury: Address,

    /// Account the faucet draws claims from
    pub holding_account: Address,

    /// The ledger's own account (never a valid mint recipient)
    pub ledger_account: Address,

    /// Id of the asset the faucet distributes
    pub native_asset: AssetId,

    /// Account granted Admin, SuperAdmin, and Pauser at startup
    pub admin: Address,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Claim policy
    pub faucet: FaucetConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            max_supply: 1_000_000_000_000_000_000_000_000_000, // 1B tokens
            initial_funding: 1_000_000_000_000_000_000_000_000, // 1M tokens
            treasury: Address::from([0x01u8; 20]),
            holding_account: Address::from([0x02u8; 20]),
            ledger_account: Address::from([0xfeu8; 20]),
            native_asset: AssetId([0x01u8; 20]),
            admin: Address::from([0x0au8; 20]),
            cors_enabled: true,
            faucet: FaucetConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("DRIP_SERVER_ADDR") {
            config.server_addr = addr;
        }

        if let Ok(supply) = std::env::var("DRIP_MAX_SUPPLY") {
            config.max_supply = supply.parse().unwrap_or(config.max_supply);
        }

        if let Ok(funding) = std::env::var("DRIP_INITIAL_FUNDING") {
            config.initial_funding = funding.parse().unwrap_or(config.initial_funding);
        }

        if let Ok(amount) = std::env::var("DRIP_CLAIM_AMOUNT") {
            config.faucet.claim_amount = amount.parse().unwrap_or(config.faucet.claim_amount);
        }

        if let Ok(interval) = std::env::var("DRIP_CLAIM_INTERVAL") {
            config.faucet.claim_interval_secs =
                interval.parse().unwrap_or(config.faucet.claim_interval_secs);
        }

        if let Ok(limit) = std::env::var("DRIP_DAILY_LIMIT") {
            config.faucet.daily_limit = limit.parse().unwrap_or(config.faucet.daily_limit);
        }

        if let Ok(treasury) = std::env::var("DRIP_TREASURY") {
            if let Some(addr) = Address::from_hex(&treasury) {
                config.treasury = addr;
            }
        }

        if let Ok(holding) = std::env::var("DRIP_HOLDING_ACCOUNT") {
            if let Some(addr) = Address::from_hex(&holding) {
                config.holding_account = addr;
            }
        }

        if let Ok(admin) = std::env::var("DRIP_ADMIN") {
            if let Some(addr) = Address::from_hex(&admin) {
                config.admin = addr;
            }
        }

        if let Ok(enabled) = std::env::var("DRIP_CORS_ENABLED") {
            config.cors_enabled = enabled.to_lowercase() == "true";
        }

        config
    }
}
