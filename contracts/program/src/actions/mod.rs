pub mod add_delegate;
pub mod add_delegate_by_permit;
pub mod burn;
pub mod mint;
pub mod post;
pub mod revoke_delegate;
pub mod withdraw;

pub use add_delegate::*;
pub use add_delegate_by_permit::*;
pub use burn::*;
pub use mint::*;
pub use post::*;
pub use revoke_delegate::*;
pub use withdraw::*;

use delegable_state::{AccessGate, Address, Selector};
use tracing::warn;

use crate::clock::Clock;
use crate::error::{VaultError, VaultResult};

/// Vault operations move funds on behalf of `caller`, so `caller` must be
/// the one who signed.
pub fn require_signer(signer: &Address, caller: &Address) -> VaultResult {
    if signer != caller {
        warn!("Signer {} is not caller {}", signer, caller);
        return Err(VaultError::MissingRequiredSignature);
    }
    Ok(())
}

pub fn require_access(
    gate: &impl AccessGate,
    clock: Clock,
    account: &Address,
    caller: &Address,
    selector: &Selector,
    denied: VaultError,
) -> VaultResult {
    if !gate.authorize(account, caller, selector, clock.unix_timestamp) {
        warn!(
            "{} may not call {} for {} at {}",
            caller, selector, account, clock.unix_timestamp
        );
        return Err(denied);
    }
    Ok(())
}
