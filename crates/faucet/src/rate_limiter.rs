//! Per-account cooldown tracking and the daily aggregate cap.
//!
//! Reads are pure: they report the logical current-day distribution
//! (zero once the day index has moved past `current_day`) without
//! persisting anything. `record_claim` is the single mutator and
//! performs the real day rollover before adding the new amount.

use drip_common::types::{day_index, Address, Amount, DayIndex, Timestamp};
use std::collections::HashMap;
use tracing::{debug, info};

/// Derived per-account claim state. No account ever reaches a
/// terminal state; `Cooling` always decays back to `Eligible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimState {
    NeverClaimed,
    Cooling,
    Eligible,
}

#[derive(Debug, Default)]
pub struct ClaimLimiter {
    last_claim: HashMap<Address, Timestamp>,
    current_day: DayIndex,
    distributed_today: Amount,
    /// Sum of all successful claim amounts ever recorded. Never decreases.
    total_distributed: Amount,
}

impl ClaimLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successful claim timestamp, or 0 for an account that has
    /// never claimed.
    pub fn last_claim_time(&self, account: &Address) -> Timestamp {
        self.last_claim.get(account).copied().unwrap_or(0)
    }

    pub fn state_of(&self, account: &Address, now: Timestamp, interval: u64) -> ClaimState {
        match self.last_claim.get(account) {
            None => ClaimState::NeverClaimed,
            Some(&last) if now.saturating_sub(last) >= interval => ClaimState::Eligible,
            Some(_) => ClaimState::Cooling,
        }
    }

    /// An account that has never claimed is always eligible by interval.
    pub fn is_eligible(&self, account: &Address, now: Timestamp, interval: u64) -> bool {
        !matches!(self.state_of(account, now, interval), ClaimState::Cooling)
    }

    /// Seconds until the account's cooldown expires; 0 when eligible.
    pub fn time_until_eligible(&self, account: &Address, now: Timestamp, interval: u64) -> u64 {
        match self.last_claim.get(account) {
            None => 0,
            Some(&last) => interval.saturating_sub(now.saturating_sub(last)),
        }
    }

    /// Logical distribution within the day containing `now`. Zero once
    /// the day index has moved on, even before any rollover is committed.
    pub fn distributed_today(&self, now: Timestamp) -> Amount {
        if day_index(now) > self.current_day {
            0
        } else {
            self.distributed_today
        }
    }

    /// Room left under the daily cap at time `now`.
    pub fn daily_remaining(&self, now: Timestamp, daily_limit: Amount) -> Amount {
        daily_limit.saturating_sub(self.distributed_today(now))
    }

    pub fn current_day(&self) -> DayIndex {
        self.current_day
    }

    pub fn total_distributed(&self) -> Amount {
        self.total_distributed
    }

    /// Commit a successful claim. Must only be called after every
    /// eligibility check has passed.
    ///
    /// Rolls the day counter forward first when `now` has crossed a
    /// day boundary; a stale clock (day index below `current_day`)
    /// never rolls it back.
    pub fn record_claim(&mut self, account: Address, amount: Amount, now: Timestamp) {
        let today = day_index(now);
        if today > self.current_day {
            debug!(
                "Day rollover: {} -> {}, resetting daily counter ({} distributed)",
                self.current_day, today, self.distributed_today
            );
            self.current_day = today;
            self.distributed_today = 0;
        }

        self.last_claim.insert(account, now);
        self.distributed_today += amount;
        self.total_distributed += amount;

        info!(
            "Recorded claim: {} -> {} (day {} total {})",
            amount, account, self.current_day, self.distributed_today
        );
    }
}
