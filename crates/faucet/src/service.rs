//! Faucet service core logic
//!
//! Single entry point for claims plus the role-gated admin surface.
//! All mutation of ledger + limiter + config runs under one write lock,
//! so every operation executes as a single serialized transaction:
//! either the whole claim commits or nothing is mutated.

use crate::config::{FaucetConfig, ServiceConfig};
use crate::events::{EventPublisher, EventSubscriber, FaucetEvent};
use crate::rate_limiter::ClaimLimiter;
use drip_common::access::{PauseSwitch, Role, RoleRegistry};
use drip_common::error::{ClaimError, LedgerError};
use drip_common::types::{day_index, Address, Amount, AssetId, DayIndex, Timestamp};
use drip_common::{DripError, Result};
use drip_ledger::{ForeignVault, TokenLedger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// How the execution environment classified the caller.
///
/// Best-effort anti-automation signal, not a security boundary: there
/// is no bytecode to inspect outside a chain, so whatever front end
/// receives the request decides (the HTTP boundary always passes
/// `External`; a captcha or IP-scoring layer could feed this instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerKind {
    /// A plain externally-controlled account
    External,
    /// A contract, proxy, or other programmatic caller
    Programmatic,
}

/// State guarded by the single service lock.
struct FaucetState {
    ledger: TokenLedger,
    limiter: ClaimLimiter,
    config: FaucetConfig,
    vault: ForeignVault,
}

/// Faucet service
pub struct FaucetService {
    state: RwLock<FaucetState>,
    roles: RwLock<RoleRegistry>,
    pause: Arc<PauseSwitch>,
    events: EventPublisher,
    treasury: Address,
    holding: Address,
}

impl FaucetService {
    /// Create the service: mint the full supply to the treasury, move
    /// the initial funding into the holding account, and grant the
    /// configured admin every role.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        config.faucet.validate().map_err(DripError::Admin)?;

        let pause = Arc::new(PauseSwitch::new());
        let mut ledger = TokenLedger::new(
            config.max_supply,
            config.treasury,
            config.ledger_account,
            pause.clone(),
        )
        .map_err(DripError::Ledger)?;

        if config.initial_funding > 0 {
            ledger
                .transfer(config.treasury, config.holding_account, config.initial_funding)
                .map_err(DripError::Ledger)?;
        }

        let mut roles = RoleRegistry::new();
        roles.grant(Role::Admin, config.admin);
        roles.grant(Role::SuperAdmin, config.admin);
        roles.grant(Role::Pauser, config.admin);

        info!(
            "Faucet service initialized: holding {} funded with {}",
            config.holding_account, config.initial_funding
        );

        Ok(Self {
            state: RwLock::new(FaucetState {
                ledger,
                limiter: ClaimLimiter::new(),
                config: config.faucet.clone(),
                vault: ForeignVault::new(config.native_asset),
            }),
            roles: RwLock::new(roles),
            pause: pause.clone(),
            events: EventPublisher::default(),
            treasury: config.treasury,
            holding: config.holding_account,
        })
    }

    pub fn subscribe(&self) -> EventSubscriber {
        self.events.subscribe()
    }

    pub fn holding_account(&self) -> Address {
        self.holding
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    async fn require_role(&self, account: &Address, role: Role) -> Result<()> {
        if self.roles.read().await.has_permission(account, role) {
            Ok(())
        } else {
            warn!("Account {} denied: missing {} role", account, role);
            Err(DripError::Unauthorized {
                account: *account,
                role,
            })
        }
    }

    /// Process a claim request.
    ///
    /// Each step is a hard precondition; the first failure aborts with
    /// nothing mutated. On success the transfer and the limiter update
    /// commit together under the write lock.
    pub async fn claim(
        &self,
        caller: Address,
        kind: CallerKind,
        now: Timestamp,
    ) -> Result<ClaimReceipt> {
        info!("Claim request from {} at t={}", caller, now);

        let mut state = self.state.write().await;

        // 1. Paused systems reject before touching any limiter state
        if self.pause.is_paused() {
            return Err(LedgerError::SystemPaused.into());
        }

        // 2. Best-effort anti-bot control
        if kind == CallerKind::Programmatic {
            warn!("Rejected programmatic caller {}", caller);
            return Err(ClaimError::ProgrammaticCallerRejected.into());
        }

        // 3. Per-account cooldown
        let interval = state.config.claim_interval_secs;
        if !state.limiter.is_eligible(&caller, now, interval) {
            let seconds_remaining = state.limiter.time_until_eligible(&caller, now, interval);
            debug!("Claim too soon for {}: {}s remaining", caller, seconds_remaining);
            return Err(ClaimError::TooSoon { seconds_remaining }.into());
        }

        // 4. Daily aggregate cap
        let amount = state.config.claim_amount;
        if state.limiter.daily_remaining(now, state.config.daily_limit) < amount {
            warn!("Daily cap reached, rejecting claim from {}", caller);
            return Err(ClaimError::DailyCapExceeded.into());
        }

        // 5. Faucet funds
        if state.ledger.balance_of(&self.holding) < amount {
            warn!(
                "Faucet underfunded: balance {} < claim amount {}",
                state.ledger.balance_of(&self.holding),
                amount
            );
            return Err(ClaimError::InsufficientFaucetFunds.into());
        }

        // 6. Commit: transfer first (it cannot fail after the checks
        // above, but if it ever did the limiter stays untouched), then
        // record the claim.
        state
            .ledger
            .transfer(self.holding, caller, amount)
            .map_err(DripError::Ledger)?;
        state.limiter.record_claim(caller, amount, now);

        let cap_reached = state.limiter.distributed_today(now) == state.config.daily_limit;
        let day = state.limiter.current_day();
        let total_today = state.limiter.distributed_today(now);
        drop(state);

        self.events.publish(FaucetEvent::ClaimCompleted {
            account: caller,
            amount,
            timestamp: now,
        });
        if cap_reached {
            info!("Daily cap reached on day {}", day);
            self.events.publish(FaucetEvent::CapReached {
                day,
                total: total_today,
            });
        }

        info!("Claim committed: {} -> {}", amount, caller);
        Ok(ClaimReceipt {
            account: caller,
            amount,
            timestamp: now,
        })
    }

    /// Pure read mirroring the claim eligibility checks (cooldown,
    /// daily cap, faucet funds) for status polling. Does not consider
    /// pause state or the caller classification.
    pub async fn can_claim(&self, account: Address, now: Timestamp) -> Result<(bool, u64)> {
        if account.is_zero() {
            return Err(ClaimError::InvalidAccount(account).into());
        }

        let state = self.state.read().await;
        let interval = state.config.claim_interval_secs;
        let amount = state.config.claim_amount;

        let seconds_until = state.limiter.time_until_eligible(&account, now, interval);
        let eligible = seconds_until == 0
            && state.limiter.daily_remaining(now, state.config.daily_limit) >= amount
            && state.ledger.balance_of(&self.holding) >= amount;

        Ok((eligible, seconds_until))
    }

    // --- Admin operations (role-gated; the check runs before any
    // domain logic) ---

    /// Replace the claim policy. Validated as a whole before any field
    /// is written; takes effect for the next claim evaluated.
    pub async fn configure(&self, caller: Address, new_config: FaucetConfig) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;
        new_config.validate().map_err(DripError::Admin)?;

        let mut state = self.state.write().await;
        state.config = new_config.clone();
        drop(state);

        info!(
            "Configuration changed by {}: amount={} interval={}s limit={}",
            caller, new_config.claim_amount, new_config.claim_interval_secs, new_config.daily_limit
        );
        self.events.publish(FaucetEvent::ConfigChanged {
            claim_amount: new_config.claim_amount,
            claim_interval_secs: new_config.claim_interval_secs,
            daily_limit: new_config.daily_limit,
        });
        Ok(())
    }

    /// Withdraw faucet funds to the calling administrator.
    pub async fn withdraw(&self, caller: Address, amount: Amount) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;

        if amount == 0 {
            return Err(LedgerError::ZeroAmount.into());
        }

        let mut state = self.state.write().await;
        if state.ledger.balance_of(&self.holding) < amount {
            return Err(ClaimError::InsufficientFaucetFunds.into());
        }
        state
            .ledger
            .transfer(self.holding, caller, amount)
            .map_err(DripError::Ledger)?;
        drop(state);

        info!("Withdrawal: {} to {}", amount, caller);
        self.events.publish(FaucetEvent::Withdrawal {
            admin: caller,
            amount,
        });
        Ok(())
    }

    /// Move funds from the treasury into the holding account.
    pub async fn fund_holding(&self, caller: Address, amount: Amount) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;

        if amount == 0 {
            return Err(LedgerError::ZeroAmount.into());
        }

        let mut state = self.state.write().await;
        state
            .ledger
            .transfer(self.treasury, self.holding, amount)
            .map_err(DripError::Ledger)?;

        info!("Holding account topped up with {}", amount);
        Ok(())
    }

    /// Recover a misdirected foreign asset to the calling super-admin.
    /// The faucet's own distributed asset is never recoverable here.
    pub async fn recover_foreign_funds(
        &self,
        caller: Address,
        asset: AssetId,
        amount: Amount,
    ) -> Result<()> {
        self.require_role(&caller, Role::SuperAdmin).await?;

        let mut state = self.state.write().await;
        state.vault.recover(asset, amount)?;
        drop(state);

        info!("Recovered {} of foreign asset {} to {}", amount, asset, caller);
        Ok(())
    }

    /// Record foreign funds observed at the holding account. Arrival of
    /// foreign assets happens out of band, so an administrator reports
    /// them here before they become recoverable.
    pub async fn credit_foreign_funds(
        &self,
        caller: Address,
        asset: AssetId,
        amount: Amount,
    ) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;

        let mut state = self.state.write().await;
        state.vault.credit(asset, amount)?;
        drop(state);

        info!("Credited {} of foreign asset {}", amount, asset);
        Ok(())
    }

    pub async fn pause(&self, caller: Address) -> Result<()> {
        self.require_role(&caller, Role::Pauser).await?;
        self.pause.set_paused(true);
        warn!("System paused by {}", caller);
        Ok(())
    }

    pub async fn unpause(&self, caller: Address) -> Result<()> {
        self.require_role(&caller, Role::Pauser).await?;
        self.pause.set_paused(false);
        info!("System unpaused by {}", caller);
        Ok(())
    }

    pub async fn grant_role(&self, caller: Address, role: Role, account: Address) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;
        self.roles.write().await.grant(role, account);
        info!("Granted {} to {}", role, account);
        Ok(())
    }

    pub async fn revoke_role(&self, caller: Address, role: Role, account: Address) -> Result<()> {
        self.require_role(&caller, Role::Admin).await?;
        self.roles.write().await.revoke(role, &account);
        info!("Revoked {} from {}", role, account);
        Ok(())
    }

    // --- Status reads (consistent snapshot under the read lock) ---

    pub async fn faucet_balance(&self) -> Amount {
        self.state.read().await.ledger.balance_of(&self.holding)
    }

    pub async fn total_distributed(&self) -> Amount {
        self.state.read().await.limiter.total_distributed()
    }

    pub async fn last_claim_time(&self, account: &Address) -> Timestamp {
        self.state.read().await.limiter.last_claim_time(account)
    }

    pub async fn daily_status(&self, now: Timestamp) -> DailyStatus {
        let state = self.state.read().await;
        let distributed = state.limiter.distributed_today(now);
        DailyStatus {
            distributed_today: distributed,
            remaining_today: state.config.daily_limit.saturating_sub(distributed),
            day_index: day_index(now),
        }
    }

    /// Aggregate status snapshot for the API.
    pub async fn status(&self, now: Timestamp) -> FaucetStatus {
        let state = self.state.read().await;
        let distributed = state.limiter.distributed_today(now);

        FaucetStatus {
            holding_account: self.holding.to_string(),
            balance: state.ledger.balance_of(&self.holding).to_string(),
            total_supply: state.ledger.total_supply().to_string(),
            claim_amount: state.config.claim_amount.to_string(),
            claim_interval_secs: state.config.claim_interval_secs,
            daily_limit: state.config.daily_limit.to_string(),
            distributed_today: distributed.to_string(),
            remaining_today: state.config.daily_limit.saturating_sub(distributed).to_string(),
            day_index: day_index(now),
            total_distributed: state.limiter.total_distributed().to_string(),
            paused: self.pause.is_paused(),
        }
    }
}

/// Receipt for a committed claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub account: Address,
    pub amount: Amount,
    pub timestamp: Timestamp,
}

/// Daily distribution snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStatus {
    pub distributed_today: Amount,
    pub remaining_today: Amount,
    pub day_index: DayIndex,
}

/// Faucet status (amounts as strings for JSON safety)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaucetStatus {
    pub holding_account: String,
    pub balance: String,
    pub total_supply: String,
    pub claim_amount: String,
    pub claim_interval_secs: u64,
    pub daily_limit: String,
    pub distributed_today: String,
    pub remaining_today: String,
    pub day_index: DayIndex,
    pub total_distributed: String,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_common::error::AdminError;
    use drip_common::types::SECONDS_PER_DAY;

    const CLAIM: Amount = 1000;
    const DAILY: Amount = 100_000;

    fn admin() -> Address {
        Address::from([0x0au8; 20])
    }

    // Offset test accounts away from the configured treasury/holding/admin
    // addresses.
    fn account(n: u8) -> Address {
        Address::from([n | 0x80; 20])
    }

    fn wide_account(hi: u8, lo: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[0] = hi;
        bytes[19] = lo;
        Address::from(bytes)
    }

    fn test_config() -> ServiceConfig {
        ServiceConfig {
            max_supply: 10_000_000,
            initial_funding: 1_000_000,
            faucet: FaucetConfig {
                claim_amount: CLAIM,
                claim_interval_secs: SECONDS_PER_DAY,
                daily_limit: DAILY,
            },
            ..ServiceConfig::default()
        }
    }

    fn new_service() -> FaucetService {
        FaucetService::new(&test_config()).unwrap()
    }

    #[tokio::test]
    async fn test_claim_cooldown_scenario() {
        // claim_amount=1000, interval=86400s, dailyLimit=100000,
        // faucet funded with 1,000,000
        let service = new_service();
        let a = account(1);

        let receipt = service.claim(a, CallerKind::External, 0).await.unwrap();
        assert_eq!(receipt.amount, CLAIM);
        assert_eq!(service.last_claim_time(&a).await, 0);

        // t=1000: too soon
        let err = service.claim(a, CallerKind::External, 1000).await.unwrap_err();
        assert!(matches!(
            err,
            DripError::Claim(ClaimError::TooSoon {
                seconds_remaining: 85_400
            })
        ));

        // t=86400: eligible again
        service
            .claim(a, CallerKind::External, SECONDS_PER_DAY)
            .await
            .unwrap();
        assert_eq!(service.total_distributed().await, 2 * CLAIM);
    }

    #[tokio::test]
    async fn test_daily_cap_and_rollover() {
        // 100 distinct accounts exhaust the 100k cap at t=0
        let service = new_service();

        for i in 0..100u8 {
            service
                .claim(wide_account(1, i), CallerKind::External, 0)
                .await
                .unwrap();
        }

        let status = service.daily_status(0).await;
        assert_eq!(status.distributed_today, DAILY);
        assert_eq!(status.remaining_today, 0);

        // The 101st account hits the cap
        let extra = wide_account(2, 0);
        let err = service.claim(extra, CallerKind::External, 0).await.unwrap_err();
        assert!(matches!(err, DripError::Claim(ClaimError::DailyCapExceeded)));

        // Next day the counter resets and the same account succeeds
        service
            .claim(extra, CallerKind::External, SECONDS_PER_DAY)
            .await
            .unwrap();
        let status = service.daily_status(SECONDS_PER_DAY).await;
        assert_eq!(status.distributed_today, CLAIM);
        assert_eq!(status.day_index, 1);
    }

    #[tokio::test]
    async fn test_cap_reached_event() {
        let mut config = test_config();
        config.faucet.daily_limit = CLAIM; // one claim fills the day
        let service = FaucetService::new(&config).unwrap();
        let mut sub = service.subscribe();

        service.claim(account(1), CallerKind::External, 0).await.unwrap();

        assert!(matches!(
            sub.try_recv(),
            Some(FaucetEvent::ClaimCompleted { amount: CLAIM, .. })
        ));
        assert!(matches!(
            sub.try_recv(),
            Some(FaucetEvent::CapReached { day: 0, total: CLAIM })
        ));
    }

    #[tokio::test]
    async fn test_insufficient_funds_then_top_up() {
        let mut config = test_config();
        config.initial_funding = 500; // below one claim
        let service = FaucetService::new(&config).unwrap();
        let a = account(1);

        let err = service.claim(a, CallerKind::External, 0).await.unwrap_err();
        assert!(matches!(
            err,
            DripError::Claim(ClaimError::InsufficientFaucetFunds)
        ));

        service.fund_holding(admin(), 10_000).await.unwrap();
        service.claim(a, CallerKind::External, 0).await.unwrap();
        assert_eq!(service.faucet_balance().await, 500 + 10_000 - CLAIM);
    }

    #[tokio::test]
    async fn test_failed_claim_mutates_nothing() {
        let service = new_service();
        let a = account(1);
        service.claim(a, CallerKind::External, 0).await.unwrap();

        let balance_before = service.faucet_balance().await;
        let total_before = service.total_distributed().await;

        let _ = service.claim(a, CallerKind::External, 10).await.unwrap_err();

        assert_eq!(service.faucet_balance().await, balance_before);
        assert_eq!(service.total_distributed().await, total_before);
        assert_eq!(service.last_claim_time(&a).await, 0);
    }

    #[tokio::test]
    async fn test_programmatic_caller_rejected() {
        let service = new_service();
        let err = service
            .claim(account(1), CallerKind::Programmatic, 0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DripError::Claim(ClaimError::ProgrammaticCallerRejected)
        ));
    }

    #[tokio::test]
    async fn test_pause_blocks_claims() {
        let service = new_service();
        service.pause(admin()).await.unwrap();

        let err = service.claim(account(1), CallerKind::External, 0).await.unwrap_err();
        assert!(matches!(err, DripError::Ledger(LedgerError::SystemPaused)));

        service.unpause(admin()).await.unwrap();
        service.claim(account(1), CallerKind::External, 0).await.unwrap();
    }

    #[tokio::test]
    async fn test_pause_requires_pauser_role() {
        let service = new_service();
        let intruder = account(9);
        assert!(matches!(
            service.pause(intruder).await.unwrap_err(),
            DripError::Unauthorized {
                role: Role::Pauser,
                ..
            }
        ));
        assert!(!service.is_paused());
    }

    #[tokio::test]
    async fn test_can_claim_mirrors_checks() {
        let service = new_service();
        let a = account(1);

        assert_eq!(service.can_claim(a, 0).await.unwrap(), (true, 0));

        service.claim(a, CallerKind::External, 0).await.unwrap();
        assert_eq!(
            service.can_claim(a, 1000).await.unwrap(),
            (false, SECONDS_PER_DAY - 1000)
        );
        assert_eq!(
            service.can_claim(a, SECONDS_PER_DAY).await.unwrap(),
            (true, 0)
        );

        // Null account is rejected
        assert!(matches!(
            service.can_claim(Address::ZERO, 0).await.unwrap_err(),
            DripError::Claim(ClaimError::InvalidAccount(_))
        ));
    }

    #[tokio::test]
    async fn test_configure_validates_before_write() {
        let service = new_service();
        let mut sub = service.subscribe();

        // configure(0, 86400, 100000) fails and leaves config unchanged
        let err = service
            .configure(
                admin(),
                FaucetConfig {
                    claim_amount: 0,
                    claim_interval_secs: SECONDS_PER_DAY,
                    daily_limit: DAILY,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DripError::Admin(AdminError::ZeroClaimAmount)));

        let status = service.status(0).await;
        assert_eq!(status.claim_amount, CLAIM.to_string());
        assert!(sub.try_recv().is_none());

        // A valid change takes effect for the next claim and is announced
        service
            .configure(
                admin(),
                FaucetConfig {
                    claim_amount: 2000,
                    claim_interval_secs: 60,
                    daily_limit: DAILY,
                },
            )
            .await
            .unwrap();
        assert!(matches!(
            sub.try_recv(),
            Some(FaucetEvent::ConfigChanged {
                claim_amount: 2000,
                claim_interval_secs: 60,
                daily_limit: DAILY,
            })
        ));
        let receipt = service.claim(account(1), CallerKind::External, 0).await.unwrap();
        assert_eq!(receipt.amount, 2000);
    }

    #[tokio::test]
    async fn test_configure_requires_admin() {
        let service = new_service();
        assert!(matches!(
            service
                .configure(account(7), FaucetConfig::default())
                .await
                .unwrap_err(),
            DripError::Unauthorized {
                role: Role::Admin,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_withdraw() {
        let service = new_service();
        let mut sub = service.subscribe();

        assert!(matches!(
            service.withdraw(admin(), 0).await.unwrap_err(),
            DripError::Ledger(LedgerError::ZeroAmount)
        ));
        assert!(matches!(
            service.withdraw(admin(), 2_000_000).await.unwrap_err(),
            DripError::Claim(ClaimError::InsufficientFaucetFunds)
        ));

        service.withdraw(admin(), 250_000).await.unwrap();
        assert_eq!(service.faucet_balance().await, 750_000);
        assert!(matches!(
            sub.try_recv(),
            Some(FaucetEvent::Withdrawal { amount: 250_000, .. })
        ));
    }

    #[tokio::test]
    async fn test_recover_foreign_funds() {
        let config = test_config();
        let service = FaucetService::new(&config).unwrap();
        let foreign = AssetId([0x33u8; 20]);

        // Crediting is Admin-gated
        assert!(matches!(
            service
                .credit_foreign_funds(account(5), foreign, 500)
                .await
                .unwrap_err(),
            DripError::Unauthorized {
                role: Role::Admin,
                ..
            }
        ));
        service.credit_foreign_funds(admin(), foreign, 500).await.unwrap();

        // The native asset is refused regardless of amount or balance
        assert!(matches!(
            service
                .recover_foreign_funds(admin(), config.native_asset, 100)
                .await
                .unwrap_err(),
            DripError::Admin(AdminError::CannotRecoverNativeAsset)
        ));

        // SuperAdmin gate
        assert!(matches!(
            service
                .recover_foreign_funds(account(5), foreign, 100)
                .await
                .unwrap_err(),
            DripError::Unauthorized {
                role: Role::SuperAdmin,
                ..
            }
        ));

        service
            .recover_foreign_funds(admin(), foreign, 500)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_role_grant_and_revoke() {
        let service = new_service();
        let operator = account(6);

        service
            .grant_role(admin(), Role::Pauser, operator)
            .await
            .unwrap();
        service.pause(operator).await.unwrap();
        service.unpause(operator).await.unwrap();

        service
            .revoke_role(admin(), Role::Pauser, operator)
            .await
            .unwrap();
        assert!(service.pause(operator).await.is_err());
    }

    #[tokio::test]
    async fn test_status_snapshot() {
        let service = new_service();
        service.claim(account(1), CallerKind::External, 100).await.unwrap();

        let status = service.status(100).await;
        assert_eq!(status.balance, (1_000_000 - CLAIM).to_string());
        assert_eq!(status.total_supply, 10_000_000.to_string());
        assert_eq!(status.distributed_today, CLAIM.to_string());
        assert_eq!(status.remaining_today, (DAILY - CLAIM).to_string());
        assert_eq!(status.total_distributed, CLAIM.to_string());
        assert_eq!(status.day_index, 0);
        assert!(!status.paused);
    }
}
