//! Post instruction handler

use delegable_assertions::check_no_overflow;
use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::debug;

use crate::actions::{require_access, require_signer};
use crate::error::{VaultError, VaultResult};
use crate::vault::Vault;

/// Pulls `amount` of collateral from `caller` and credits it to `account`.
/// `caller` must have approved the vault on the collateral token.
pub fn process_post<C: TokenInterface, D: TokenInterface>(
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
        &Selector::POST,
        VaultError::PostAccessDenied,
    )?;

    let posted = check_no_overflow(vault.ledger.posted(account), amount, VaultError::Overflow)?;

    let vault_address = vault.address;
    vault
        .collateral
        .transfer_from(&vault_address, caller, &vault_address, amount)?;
    vault.ledger.set_posted(account, posted);

    debug!("{} posted {} for {}", caller, amount, account);
    Ok(())
}
