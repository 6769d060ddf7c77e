//! Shared types, errors, and capability primitives for the drip faucet.

pub mod access;
pub mod error;
pub mod types;
pub mod utils;

pub use error::{DripError, Result};
pub use types::{Address, Amount, AssetId, DayIndex, Timestamp, SECONDS_PER_DAY};
