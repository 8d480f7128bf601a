//! In-memory mintable token.

use std::collections::HashMap;

use delegable_assertions::{check_no_overflow, check_sufficient};
use delegable_state::Address;
use tracing::trace;

use crate::{TokenError, TokenInterface};

#[derive(Debug, Clone, Default)]
pub struct MintableToken {
    name: String,
    symbol: String,
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    total_supply: u128,
}

impl MintableToken {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Allowance left after `spender` moves `amount` of `owner`'s tokens.
    /// Owners moving their own tokens need no allowance.
    fn remaining_allowance(
        &self,
        spender: &Address,
        owner: &Address,
        amount: u128,
    ) -> Result<Option<u128>, TokenError> {
        if spender == owner {
            return Ok(None);
        }
        let remaining = check_sufficient(
            self.allowance(owner, spender),
            amount,
            TokenError::InsufficientAllowance,
        )?;
        Ok(Some(remaining))
    }

    fn move_balance(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), TokenError> {
        let from_balance =
            check_sufficient(self.balance_of(from), amount, TokenError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = check_no_overflow(self.balance_of(to), amount, TokenError::Overflow)?;
        self.balances.insert(*from, from_balance);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

impl TokenInterface for MintableToken {
    fn balance_of(&self, account: &Address) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u128 {
        self.total_supply
    }

    fn approve(&mut self, owner: &Address, spender: &Address, amount: u128) {
        trace!("{}: {} approves {} for {}", self.symbol, owner, spender, amount);
        self.allowances.insert((*owner, *spender), amount);
    }

    fn transfer(&mut self, sender: &Address, to: &Address, amount: u128) -> Result<(), TokenError> {
        self.move_balance(sender, to, amount)?;
        trace!("{}: {} -> {} {}", self.symbol, sender, to, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), TokenError> {
        let remaining = self.remaining_allowance(spender, from, amount)?;
        self.move_balance(from, to, amount)?;
        if let Some(remaining) = remaining {
            self.allowances.insert((*from, *spender), remaining);
        }
        trace!("{}: {} moved {} -> {} {}", self.symbol, spender, from, to, amount);
        Ok(())
    }

    fn mint(&mut self, to: &Address, amount: u128) -> Result<(), TokenError> {
        let supply = check_no_overflow(self.total_supply, amount, TokenError::Overflow)?;
        let balance = check_no_overflow(self.balance_of(to), amount, TokenError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        trace!("{}: minted {} to {}", self.symbol, amount, to);
        Ok(())
    }

    fn burn(&mut self, from: &Address, amount: u128) -> Result<(), TokenError> {
        let balance =
            check_sufficient(self.balance_of(from), amount, TokenError::InsufficientBalance)?;
        // Supply is never below any single balance.
        self.total_supply -= amount;
        self.balances.insert(*from, balance);
        trace!("{}: burned {} from {}", self.symbol, amount, from);
        Ok(())
    }

    fn burn_from(&mut self, spender: &Address, from: &Address, amount: u128) -> Result<(), TokenError> {
        let remaining = self.remaining_allowance(spender, from, amount)?;
        self.burn(from, amount)?;
        if let Some(remaining) = remaining {
            self.allowances.insert((*from, *spender), remaining);
        }
        Ok(())
    }
}
