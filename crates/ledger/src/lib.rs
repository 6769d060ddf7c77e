//! Fungible token ledger with a hard supply ceiling, plus the
//! foreign-asset vault backing emergency recovery.

pub mod foreign;
pub mod token;

pub use foreign::ForeignVault;
pub use token::TokenLedger;
