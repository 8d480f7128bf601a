//! Posted collateral and minted debt per account.

use std::collections::HashMap;

use delegable_state::Address;

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    posted: HashMap<Address, u128>,
    minted: HashMap<Address, u128>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posted(&self, account: &Address) -> u128 {
        self.posted.get(account).copied().unwrap_or(0)
    }

    pub fn minted(&self, account: &Address) -> u128 {
        self.minted.get(account).copied().unwrap_or(0)
    }

    pub(crate) fn set_posted(&mut self, account: &Address, amount: u128) {
        self.posted.insert(*account, amount);
    }

    pub(crate) fn set_minted(&mut self, account: &Address, amount: u128) {
        self.minted.insert(*account, amount);
    }
}
