//! Access control and pause capabilities.
//!
//! The faucet core treats permission checks and the global pause flag as
//! external collaborators. These are the in-process implementations the
//! service wires in; gated operations consult them before any domain logic.

use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Roles recognized by gated operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May reconfigure limits and withdraw faucet funds
    Admin,
    /// May recover misdirected foreign assets
    SuperAdmin,
    /// May pause and unpause the system
    Pauser,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::SuperAdmin => write!(f, "SuperAdmin"),
            Role::Pauser => write!(f, "Pauser"),
        }
    }
}

/// Role grants per account
#[derive(Debug, Default)]
pub struct RoleRegistry {
    grants: HashMap<Role, HashSet<Address>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_permission(&self, account: &Address, role: Role) -> bool {
        self.grants
            .get(&role)
            .map(|accounts| accounts.contains(account))
            .unwrap_or(false)
    }

    pub fn grant(&mut self, role: Role, account: Address) {
        self.grants.entry(role).or_default().insert(account);
    }

    /// Returns true if the account actually held the role.
    pub fn revoke(&mut self, role: Role, account: &Address) -> bool {
        self.grants
            .get_mut(&role)
            .map(|accounts| accounts.remove(account))
            .unwrap_or(false)
    }
}

/// Global pause flag shared across the ledger and the faucet service.
///
/// Checked first by every mutating ledger operation.
#[derive(Debug, Default)]
pub struct PauseSwitch {
    paused: AtomicBool,
}

impl PauseSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_revoke() {
        let mut registry = RoleRegistry::new();
        let admin = Address::from([1u8; 20]);

        assert!(!registry.has_permission(&admin, Role::Admin));

        registry.grant(Role::Admin, admin);
        assert!(registry.has_permission(&admin, Role::Admin));
        // Grants are per role
        assert!(!registry.has_permission(&admin, Role::SuperAdmin));

        assert!(registry.revoke(Role::Admin, &admin));
        assert!(!registry.has_permission(&admin, Role::Admin));
        // Revoking again is a no-op
        assert!(!registry.revoke(Role::Admin, &admin));
    }

    #[test]
    fn test_pause_switch() {
        let pause = PauseSwitch::new();
        assert!(!pause.is_paused());

        pause.set_paused(true);
        assert!(pause.is_paused());

        pause.set_paused(false);
        assert!(!pause.is_paused());
    }
}
