use delegable_state::{Address, Selector};

/// A delegation record as read from the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegationInfo {
    pub holder: Address,
    pub delegate: Address,
    pub selector: Selector,

    /// Unix timestamp; 0 when there is no record
    pub expiry: u64,
}

impl DelegationInfo {
    /// Check if a record exists, active or not
    pub fn exists(&self) -> bool {
        self.expiry != 0
    }

    /// Check if the delegate may act at `now`
    pub fn is_active(&self, now: u64) -> bool {
        self.expiry > now
    }
}

/// Ledger position of an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountPosition {
    /// Collateral held by the vault for the account
    pub posted: u128,

    /// Debt outstanding against the account
    pub minted: u128,
}
