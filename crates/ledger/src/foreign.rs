//! Vault for foreign assets misdirected to the faucet holding account.
//!
//! Only the recovery path in AdminOps touches this. The faucet's own
//! distributed asset can never leave through here.

use drip_common::error::{AdminError, LedgerError};
use drip_common::types::{Amount, AssetId};
use drip_common::{DripError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

pub struct ForeignVault {
    /// Id of the asset the faucet exists to distribute.
    native_asset: AssetId,
    holdings: HashMap<AssetId, Amount>,
}

impl ForeignVault {
    pub fn new(native_asset: AssetId) -> Self {
        Self {
            native_asset,
            holdings: HashMap::new(),
        }
    }

    pub fn native_asset(&self) -> AssetId {
        self.native_asset
    }

    pub fn balance(&self, asset: &AssetId) -> Amount {
        self.holdings.get(asset).copied().unwrap_or(0)
    }

    /// Record foreign funds arriving at the faucet holding account.
    pub fn credit(&mut self, asset: AssetId, amount: Amount) -> Result<()> {
        if asset == self.native_asset {
            return Err(AdminError::InvalidAsset(asset).into());
        }
        if amount == 0 {
            return Err(LedgerError::ZeroAmount.into());
        }
        *self.holdings.entry(asset).or_insert(0) += amount;
        debug!("Credited {} of foreign asset {}", amount, asset);
        Ok(())
    }

    /// Release `amount` of a foreign asset back out of the vault.
    pub fn recover(&mut self, asset: AssetId, amount: Amount) -> Result<()> {
        if asset == self.native_asset {
            return Err(AdminError::CannotRecoverNativeAsset.into());
        }
        if amount == 0 {
            return Err(LedgerError::ZeroAmount.into());
        }

        let held = match self.holdings.get(&asset) {
            Some(held) => *held,
            None => return Err(AdminError::InvalidAsset(asset).into()),
        };
        if held < amount {
            return Err(DripError::Ledger(LedgerError::InsufficientBalance {
                available: held,
                required: amount,
            }));
        }

        self.holdings.insert(asset, held - amount);
        info!("Recovered {} of foreign asset {}", amount, asset);
        Ok(())
    }
}
