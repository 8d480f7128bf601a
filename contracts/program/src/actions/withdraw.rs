//! Withdraw instruction handler

use delegable_assertions::check_sufficient;
use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::debug;

use crate::actions::{require_access, require_signer};
use crate::error::{VaultError, VaultResult};
use crate::vault::Vault;

pub fn process_withdraw<C: TokenInterface, D: TokenInterface>(
    vault: &mut Vault<C, D>,
    signer: &Address,
    account: &Address,
    caller: &Address,
    amount: u128,
) -> VaultResult {
    require_signer(signer, caller)?;
    require_access(
        &vault.registry,
        vault.clock,
        account,
        caller,
        &Selector::WITHDRAW,
        VaultError::WithdrawAccessDenied,
    )?;

    let remaining = check_sufficient(
        vault.ledger.posted(account),
        amount,
        VaultError::InsufficientCollateral,
    )?;

    let vault_address = vault.address;
    vault.collateral.transfer(&vault_address, caller, amount)?;
    vault.ledger.set_posted(account, remaining);

    debug!("{} withdrew {} from {}", caller, amount, account);
    Ok(())
}
