//! Vault clock.

use delegable_assertions::check_condition;

use crate::error::{VaultError, VaultResult};

/// Current time of the vault in unix seconds. Never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    pub unix_timestamp: u64,
}

impl Clock {
    pub fn new(unix_timestamp: u64) -> Self {
        Self { unix_timestamp }
    }

    pub fn warp_to(&mut self, unix_timestamp: u64) -> VaultResult {
        check_condition(
            unix_timestamp >= self.unix_timestamp,
            VaultError::ClockWentBackwards,
        )?;
        self.unix_timestamp = unix_timestamp;
        Ok(())
    }

    pub fn advance(&mut self, seconds: u64) -> VaultResult {
        let target = self
            .unix_timestamp
            .checked_add(seconds)
            .ok_or(VaultError::Overflow)?;
        self.warp_to(target)
    }
}
