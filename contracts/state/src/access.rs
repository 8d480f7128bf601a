//! Access gate consulted by every gated operation.

use delegable_assertions::check_not_expired;

use crate::{Address, DelegationRegistry, Selector};

/// Resolves whether `caller` may act as `account` for one operation.
///
/// Implementors only provide the read-only expiry lookup; the decision rule
/// is shared.
pub trait AccessGate {
    /// Stored expiry for (holder, delegate, selector), 0 if absent.
    fn expiry_of(&self, holder: &Address, delegate: &Address, selector: &Selector) -> u64;

    /// Self-action is always allowed. Otherwise a delegation must exist and
    /// expire strictly after `now`. Expired records stay in place.
    fn authorize(&self, account: &Address, caller: &Address, selector: &Selector, now: u64) -> bool {
        if account == caller {
            return true;
        }
        let expiry = self.expiry_of(account, caller, selector);
        check_not_expired(expiry, now, ()).is_ok()
    }
}

impl AccessGate for DelegationRegistry {
    fn expiry_of(&self, holder: &Address, delegate: &Address, selector: &Selector) -> u64 {
        self.delegates(holder, delegate, selector)
    }
}
