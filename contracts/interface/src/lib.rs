//! Delegable Token Interface
//!
//! This crate defines the interface the vault uses to move collateral and to
//! issue and destroy debt tokens. Any fungible-token ledger can back the
//! vault by implementing [`TokenInterface`]; [`MintableToken`] is the
//! in-memory reference implementation.

pub mod mintable;

pub use mintable::MintableToken;

use delegable_state::Address;
use thiserror::Error;

/// Base offset of token error codes.
const TOKEN_ERROR_BASE: u32 = 4000;

/// Error codes for token operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The debited account holds less than the amount
    #[error("Token: insufficient-balance")]
    InsufficientBalance,
    /// The spender's allowance is less than the amount
    #[error("Token: insufficient-allowance")]
    InsufficientAllowance,
    /// A balance or the supply would exceed its range
    #[error("Token: overflow")]
    Overflow,
}

impl TokenError {
    pub fn code(&self) -> u32 {
        TOKEN_ERROR_BASE + *self as u32
    }
}

/// Fungible-token operations the vault relies on.
///
/// Every mutating call is all-or-nothing: on error no balance, allowance or
/// supply has changed. The acting account (`sender`, `owner`, `spender`) is
/// passed explicitly.
pub trait TokenInterface {
    fn balance_of(&self, account: &Address) -> u128;

    fn allowance(&self, owner: &Address, spender: &Address) -> u128;

    fn total_supply(&self) -> u128;

    /// Sets the amount `spender` may move out of `owner`'s balance.
    fn approve(&mut self, owner: &Address, spender: &Address, amount: u128);

    fn transfer(&mut self, sender: &Address, to: &Address, amount: u128) -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to`, spending `spender`'s allowance
    /// unless `spender == from`.
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), TokenError>;

    fn mint(&mut self, to: &Address, amount: u128) -> Result<(), TokenError>;

    fn burn(&mut self, from: &Address, amount: u128) -> Result<(), TokenError>;

    /// Destroys `amount` of `from`'s tokens, spending `spender`'s allowance
    /// unless `spender == from`.
    fn burn_from(&mut self, spender: &Address, from: &Address, amount: u128) -> Result<(), TokenError>;
}
