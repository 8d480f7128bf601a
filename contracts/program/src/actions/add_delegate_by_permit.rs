//! AddDelegateByPermit instruction handler

use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector, Signature};
use tracing::{debug, warn};

use crate::error::VaultResult;
use crate::vault::Vault;

/// `signer` is only the relayer; authority comes from the holder's signature.
pub fn process_add_delegate_by_permit<C: TokenInterface, D: TokenInterface>(
    vault: &mut Vault<C, D>,
    signer: &Address,
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
    expiry: u64,
    signature: &Signature,
) -> VaultResult {
    let count = vault.registry.count(holder);
    vault
        .registry
        .add_delegate_by_permit(&vault.domain, holder, delegate, selector, expiry, signature)
        .map_err(|e| {
            warn!("Permit {} of {} rejected: {}", count, holder, e);
            e
        })?;

    debug!(
        "Relayer {} applied permit {} of {}: {} -> {} until {}",
        signer, count, holder, selector, delegate, expiry
    );
    Ok(())
}
