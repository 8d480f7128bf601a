//! Delegation registry.
//!
//! Maps (holder, delegate, selector) to an expiry timestamp and keeps one
//! permit counter per holder. An expiry of zero means "no record": storing
//! zero removes the entry, and lookups of missing entries read back zero.

use std::collections::HashMap;

use delegable_assertions::{check_bytes_match, check_condition, check_increment};
use tracing::trace;

use crate::domain::TypedDataDomain;
use crate::signature::{recover, Signature};
use crate::{Address, DelegableError, PermitMessage, Selector};

/// Key of one delegation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelegationKey {
    pub holder: Address,
    pub delegate: Address,
    pub selector: Selector,
}

impl DelegationKey {
    pub fn new(holder: Address, delegate: Address, selector: Selector) -> Self {
        Self {
            holder,
            delegate,
            selector,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DelegationRegistry {
    delegations: HashMap<DelegationKey, u64>,
    counts: HashMap<Address, u64>,
}

impl DelegationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored expiry of a delegation, 0 if there is none.
    pub fn delegates(&self, holder: &Address, delegate: &Address, selector: &Selector) -> u64 {
        self.delegations
            .get(&DelegationKey::new(*holder, *delegate, *selector))
            .copied()
            .unwrap_or(0)
    }

    /// Current permit counter of `holder`; the next valid permit must carry it.
    pub fn count(&self, holder: &Address) -> u64 {
        self.counts.get(holder).copied().unwrap_or(0)
    }

    /// Grants `delegate` the right to call `selector` for `holder` until
    /// `expiry`. Rejects any existing record for the triple, expired or not.
    pub fn add_delegate(
        &mut self,
        caller: &Address,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
    ) -> Result<(), DelegableError> {
        check_condition(caller == holder, DelegableError::HolderMismatch)?;
        check_condition(
            self.delegates(holder, delegate, selector) == 0,
            DelegableError::AlreadyDelegated,
        )?;

        self.upsert(DelegationKey::new(*holder, *delegate, *selector), expiry);
        Ok(())
    }

    /// Removes a delegation. Fails if there is nothing to remove.
    pub fn revoke_delegate(
        &mut self,
        caller: &Address,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
    ) -> Result<(), DelegableError> {
        check_condition(caller == holder, DelegableError::HolderMismatch)?;
        check_condition(
            self.delegates(holder, delegate, selector) != 0,
            DelegableError::NotDelegated,
        )?;

        self.upsert(DelegationKey::new(*holder, *delegate, *selector), 0);
        Ok(())
    }

    /// Grants a delegation authorized by the holder's signature over the
    /// permit for their current counter. Anybody may submit it.
    ///
    /// Unlike [`Self::add_delegate`], an existing record is overwritten.
    pub fn add_delegate_by_permit(
        &mut self,
        domain: &TypedDataDomain,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
        signature: &Signature,
    ) -> Result<(), DelegableError> {
        let count = self.count(holder);
        let message = PermitMessage {
            holder: *holder,
            delegate: *delegate,
            selector: *selector,
            expiry,
            count,
        };
        let signer = recover(&message.digest(domain), signature)?;
        check_bytes_match(
            signer.as_bytes(),
            holder.as_bytes(),
            Address::LEN,
            DelegableError::InvalidSignature,
        )?;

        let next = check_increment(count, DelegableError::CounterOverflow)?;
        self.counts.insert(*holder, next);
        trace!("Permit {} consumed for {}", count, holder);

        self.upsert(DelegationKey::new(*holder, *delegate, *selector), expiry);
        Ok(())
    }

    fn upsert(&mut self, key: DelegationKey, expiry: u64) {
        trace!(
            "Delegation {} -> {} for {} set to expire at {}",
            key.holder,
            key.delegate,
            key.selector,
            expiry
        );
        if expiry == 0 {
            self.delegations.remove(&key);
        } else {
            self.delegations.insert(key, expiry);
        }
    }
}
