//! Rate-limited token distribution faucet for the drip ledger
//!
//! This service provides bounded token distribution with:
//! - Per-account cooldown periods
//! - A global daily distribution cap with lazy day rollover
//! - Role-gated administration (reconfigure, withdraw, recover, pause)
//! - Event notifications
//! - Web interface

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod rate_limiter;
pub mod service;

pub use config::{FaucetConfig, ServiceConfig};
pub use events::{EventPublisher, EventSubscriber, FaucetEvent};
pub use rate_limiter::{ClaimLimiter, ClaimState};
pub use service::{CallerKind, ClaimReceipt, DailyStatus, FaucetService, FaucetStatus};
