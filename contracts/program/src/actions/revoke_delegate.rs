//! RevokeDelegate instruction handler

use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::{debug, warn};

use crate::error::VaultResult;
use crate::vault::Vault;

pub fn process_revoke_delegate<C: TokenInterface, D: TokenInterface>(
    vault: &mut Vault<C, D>,
    signer: &Address,
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
) -> VaultResult {
    vault
        .registry
        .revoke_delegate(signer, holder, delegate, selector)
        .map_err(|e| {
            warn!("RevokeDelegate rejected: {}", e);
            e
        })?;

    debug!("Holder {} revoked {} from {}", holder, selector, delegate);
    Ok(())
}
