//! AddDelegate instruction handler

use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use tracing::{debug, warn};

use crate::error::VaultResult;
use crate::vault::Vault;

pub fn process_add_delegate<C: TokenInterface, D: TokenInterface>(
    vault: &mut Vault<C, D>,
    signer: &Address,
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
    expiry: u64,
) -> VaultResult {
    vault
        .registry
        .add_delegate(signer, holder, delegate, selector, expiry)
        .map_err(|e| {
            warn!("AddDelegate rejected: {}", e);
            e
        })?;

    debug!(
        "Holder {} delegated {} to {} until {}",
        holder, selector, delegate, expiry
    );
    Ok(())
}
