//! Raw instruction data for each vault instruction.

use delegable_state::{Address, Selector, Signature};
use delegable_vault::VaultInstruction;

use crate::error::Result;

pub fn add_delegate(
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
    expiry: u64,
) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::AddDelegate {
        holder: *holder,
        delegate: *delegate,
        selector: *selector,
        expiry,
    };
    Ok(instruction.pack()?)
}

pub fn revoke_delegate(holder: &Address, delegate: &Address, selector: &Selector) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::RevokeDelegate {
        holder: *holder,
        delegate: *delegate,
        selector: *selector,
    };
    Ok(instruction.pack()?)
}

pub fn add_delegate_by_permit(
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
    expiry: u64,
    signature: &Signature,
) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::AddDelegateByPermit {
        holder: *holder,
        delegate: *delegate,
        selector: *selector,
        expiry,
        signature: *signature,
    };
    Ok(instruction.pack()?)
}

pub fn post(account: &Address, caller: &Address, amount: u128) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::Post {
        account: *account,
        caller: *caller,
        amount,
    };
    Ok(instruction.pack()?)
}

pub fn withdraw(account: &Address, caller: &Address, amount: u128) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::Withdraw {
        account: *account,
        caller: *caller,
        amount,
    };
    Ok(instruction.pack()?)
}

pub fn mint(account: &Address, caller: &Address, amount: u128) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::Mint {
        account: *account,
        caller: *caller,
        amount,
    };
    Ok(instruction.pack()?)
}

pub fn burn(account: &Address, caller: &Address, amount: u128) -> Result<Vec<u8>> {
    let instruction = VaultInstruction::Burn {
        account: *account,
        caller: *caller,
        amount,
    };
    Ok(instruction.pack()?)
}
