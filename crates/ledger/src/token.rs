//! Conserved-quantity balance store with a hard supply cap.

use drip_common::access::PauseSwitch;
use drip_common::error::LedgerError;
use drip_common::types::{Address, Amount};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Fungible token ledger.
///
/// Invariants: `total_supply == sum(balances)` and
/// `total_supply <= max_supply` hold in every reachable state.
/// Every mutating operation checks the shared pause flag before any
/// other validation.
pub struct TokenLedger {
    /// The ledger's own account. Never a valid mint recipient.
    ledger_account: Address,
    max_supply: Amount,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    pause: Arc<PauseSwitch>,
}

impl TokenLedger {
    /// Create the ledger and perform the single initial mint of
    /// `max_supply` to the treasury account.
    pub fn new(
        max_supply: Amount,
        treasury: Address,
        ledger_account: Address,
        pause: Arc<PauseSwitch>,
    ) -> Result<Self, LedgerError> {
        if treasury.is_zero() || treasury == ledger_account {
            return Err(LedgerError::InvalidRecipient(treasury));
        }

        let mut balances = HashMap::new();
        balances.insert(treasury, max_supply);

        info!(
            "Ledger initialized: max supply {} minted to treasury {}",
            max_supply, treasury
        );

        Ok(Self {
            ledger_account,
            max_supply,
            total_supply: max_supply,
            balances,
            allowances: HashMap::new(),
            pause,
        })
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn max_supply(&self) -> Amount {
        self.max_supply
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    fn ensure_not_paused(&self) -> Result<(), LedgerError> {
        if self.pause.is_paused() {
            return Err(LedgerError::SystemPaused);
        }
        Ok(())
    }

    /// Mint new supply to `to`, bounded by the supply cap.
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if to.is_zero() || to == self.ledger_account {
            return Err(LedgerError::InvalidRecipient(to));
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .filter(|s| *s <= self.max_supply)
            .ok_or(LedgerError::SupplyCapExceeded {
                supply: self.total_supply,
                amount,
                cap: self.max_supply,
            })?;

        *self.balances.entry(to).or_insert(0) += amount;
        self.total_supply = new_supply;

        debug!("Minted {} to {}, supply now {}", amount, to, new_supply);
        Ok(())
    }

    /// Burn supply held by `from`.
    pub fn burn(&mut self, from: Address, amount: Amount) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        self.debit(from, amount)?;
        self.total_supply -= amount;

        debug!("Burned {} from {}, supply now {}", amount, from, self.total_supply);
        Ok(())
    }

    /// Burn from `owner` on behalf of `spender`, consuming allowance.
    pub fn burn_from(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }

        let allowed = self.allowance(&owner, &spender);
        if allowed < amount {
            return Err(LedgerError::AllowanceExceeded {
                allowed,
                required: amount,
            });
        }

        self.debit(owner, amount)?;
        self.total_supply -= amount;
        self.allowances.insert((owner, spender), allowed - amount);

        debug!(
            "Burned {} from {} via {}, supply now {}",
            amount, owner, spender, self.total_supply
        );
        Ok(())
    }

    /// Grant `spender` an allowance over the caller's balance.
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.allowances.insert((owner, spender), amount);
        Ok(())
    }

    /// Move `amount` between accounts; total supply unchanged.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        self.debit(from, amount)?;
        *self.balances.entry(to).or_insert(0) += amount;

        debug!("Transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    fn debit(&mut self, from: Address, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(&from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        self.balances.insert(from, available - amount);
        Ok(())
    }

    #[cfg(test)]
    fn sum_of_balances(&self) -> Amount {
        self.balances.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_SUPPLY: Amount = 1_000_000;

    fn treasury() -> Address {
        Address::from([1u8; 20])
    }

    fn ledger_account() -> Address {
        Address::from([0xffu8; 20])
    }

    fn new_ledger() -> (TokenLedger, Arc<PauseSwitch>) {
        let pause = Arc::new(PauseSwitch::new());
        let ledger =
            TokenLedger::new(MAX_SUPPLY, treasury(), ledger_account(), pause.clone()).unwrap();
        (ledger, pause)
    }

    #[test]
    fn test_initial_mint() {
        let (ledger, _) = new_ledger();
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
        assert_eq!(ledger.balance_of(&treasury()), MAX_SUPPLY);
        assert_eq!(ledger.sum_of_balances(), ledger.total_supply());
    }

    #[test]
    fn test_invalid_treasury_rejected() {
        let pause = Arc::new(PauseSwitch::new());
        assert!(TokenLedger::new(100, Address::ZERO, ledger_account(), pause.clone()).is_err());
        assert!(TokenLedger::new(100, ledger_account(), ledger_account(), pause).is_err());
    }

    #[test]
    fn test_mint_bounded_by_cap() {
        let (mut ledger, _) = new_ledger();
        let user = Address::from([2u8; 20]);

        // Supply already at cap
        assert_eq!(
            ledger.mint(user, 1),
            Err(LedgerError::SupplyCapExceeded {
                supply: MAX_SUPPLY,
                amount: 1,
                cap: MAX_SUPPLY
            })
        );

        // Burning frees headroom for re-minting
        ledger.burn(treasury(), 500).unwrap();
        ledger.mint(user, 500).unwrap();
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
        assert_eq!(ledger.balance_of(&user), 500);
        assert_eq!(ledger.sum_of_balances(), ledger.total_supply());
    }

    #[test]
    fn test_mint_validation() {
        let (mut ledger, _) = new_ledger();
        ledger.burn(treasury(), 100).unwrap();

        assert_eq!(ledger.mint(treasury(), 0), Err(LedgerError::ZeroAmount));
        assert_eq!(
            ledger.mint(Address::ZERO, 10),
            Err(LedgerError::InvalidRecipient(Address::ZERO))
        );
        assert_eq!(
            ledger.mint(ledger_account(), 10),
            Err(LedgerError::InvalidRecipient(ledger_account()))
        );
    }

    #[test]
    fn test_burn() {
        let (mut ledger, _) = new_ledger();

        assert_eq!(ledger.burn(treasury(), 0), Err(LedgerError::ZeroAmount));

        ledger.burn(treasury(), 1000).unwrap();
        assert_eq!(ledger.total_supply(), MAX_SUPPLY - 1000);
        assert_eq!(ledger.balance_of(&treasury()), MAX_SUPPLY - 1000);

        let poor = Address::from([3u8; 20]);
        assert_eq!(
            ledger.burn(poor, 1),
            Err(LedgerError::InsufficientBalance {
                available: 0,
                required: 1
            })
        );
    }

    #[test]
    fn test_burn_from_requires_allowance() {
        let (mut ledger, _) = new_ledger();
        let spender = Address::from([4u8; 20]);

        assert_eq!(
            ledger.burn_from(treasury(), spender, 100),
            Err(LedgerError::AllowanceExceeded {
                allowed: 0,
                required: 100
            })
        );

        ledger.approve(treasury(), spender, 150).unwrap();
        ledger.burn_from(treasury(), spender, 100).unwrap();

        assert_eq!(ledger.total_supply(), MAX_SUPPLY - 100);
        assert_eq!(ledger.allowance(&treasury(), &spender), 50);

        // Remaining allowance is not enough
        assert_eq!(
            ledger.burn_from(treasury(), spender, 51),
            Err(LedgerError::AllowanceExceeded {
                allowed: 50,
                required: 51
            })
        );
    }

    #[test]
    fn test_transfer_conserves_supply() {
        let (mut ledger, _) = new_ledger();
        let user = Address::from([5u8; 20]);

        ledger.transfer(treasury(), user, 2500).unwrap();
        assert_eq!(ledger.balance_of(&user), 2500);
        assert_eq!(ledger.balance_of(&treasury()), MAX_SUPPLY - 2500);
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
        assert_eq!(ledger.sum_of_balances(), ledger.total_supply());

        assert_eq!(
            ledger.transfer(user, treasury(), 2501),
            Err(LedgerError::InsufficientBalance {
                available: 2500,
                required: 2501
            })
        );
    }

    #[test]
    fn test_pause_blocks_mutations_first() {
        let (mut ledger, pause) = new_ledger();
        let user = Address::from([6u8; 20]);
        pause.set_paused(true);

        // Paused wins over every other validation, including zero amounts
        assert_eq!(ledger.mint(user, 0), Err(LedgerError::SystemPaused));
        assert_eq!(ledger.burn(treasury(), 0), Err(LedgerError::SystemPaused));
        assert_eq!(
            ledger.burn_from(treasury(), user, 0),
            Err(LedgerError::SystemPaused)
        );
        assert_eq!(
            ledger.transfer(treasury(), user, 1),
            Err(LedgerError::SystemPaused)
        );
        assert_eq!(
            ledger.approve(treasury(), user, 1),
            Err(LedgerError::SystemPaused)
        );

        // Reads still work
        assert_eq!(ledger.balance_of(&treasury()), MAX_SUPPLY);

        pause.set_paused(false);
        ledger.transfer(treasury(), user, 1).unwrap();
        assert_eq!(ledger.balance_of(&user), 1);
    }
}
