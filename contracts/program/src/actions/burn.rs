//! Burn instruction handler

use delegable_assertions::check_sufficient;
use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::debug;

use crate::actions::{require_access, require_signer};
use crate::error::{VaultError, VaultResult};
use crate::vault::Vault;

/// Burns `amount` of `caller`'s debt tokens and reduces `account`'s debt.
/// `caller` must have approved the vault on the debt token.
pub fn process_burn<C: TokenInterface, D: TokenInterface>(
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
        &Selector::BURN,
        VaultError::BurnAccessDenied,
    )?;

    let remaining = check_sufficient(vault.ledger.minted(account), amount, VaultError::InsufficientDebt)?;

    let vault_address = vault.address;
    vault.debt.burn_from(&vault_address, caller, amount)?;
    vault.ledger.set_minted(account, remaining);

    debug!("{} burned {} for {}", caller, amount, account);
    Ok(())
}
