//! Mint instruction handler

use delegable_assertions::check_no_overflow;
use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::debug;

use crate::actions::{require_access, require_signer};
use crate::error::{VaultError, VaultResult};
use crate::vault::Vault;

/// Records `amount` of debt against `account` and mints it to `caller`.
pub fn process_mint<C: TokenInterface, D: TokenInterface>(
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
        &Selector::MINT,
        VaultError::MintAccessDenied,
    )?;

    let minted = check_no_overflow(vault.ledger.minted(account), amount, VaultError::Overflow)?;

    vault.debt.mint(caller, amount)?;
    vault.ledger.set_minted(account, minted);

    debug!("{} minted {} against {}", caller, amount, account);
    Ok(())
}
