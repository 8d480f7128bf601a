//! Permit messages.
//!
//! A permit is the typed-data message a holder signs off-chain to grant a
//! delegation. It carries the holder's current counter, so each signature is
//! consumable exactly once.

use crate::domain::{u64_word, TypedDataDomain};
use crate::hash::{keccak256, keccak256_concat};
use crate::{Address, Selector};

/// Type string of the permit struct. The selector field keeps the name
/// `signature` used by deployed signing tools.
pub const PERMIT_TYPE: &str =
    "Permit(address holder,address delegate,bytes4 signature,uint256 expiry,uint256 count)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitMessage {
    pub holder: Address,
    pub delegate: Address,
    pub selector: Selector,
    /// Encoded as a uint256 word but held as `u64`. A permit signed elsewhere
    /// with an expiry above `u64::MAX` can't be submitted here; use
    /// `u64::MAX` for a delegation that never lapses.
    pub expiry: u64,
    /// Holder's permit counter, same encoding and limit as `expiry`.
    pub count: u64,
}

impl PermitMessage {
    pub fn typehash() -> [u8; 32] {
        keccak256(PERMIT_TYPE.as_bytes())
    }

    pub fn struct_hash(&self) -> [u8; 32] {
        keccak256_concat(&[
            &Self::typehash(),
            &self.holder.to_word(),
            &self.delegate.to_word(),
            &self.selector.to_word(),
            &u64_word(self.expiry),
            &u64_word(self.count),
        ])
    }

    /// Digest the holder signs.
    pub fn digest(&self, domain: &TypedDataDomain) -> [u8; 32] {
        domain.hash_typed_data(&self.struct_hash())
    }
}
