//! Secp256k1 signature recovery.
//!
//! Recovers the address that signed a 32-byte digest. Every malformed input
//! is reported as [`DelegableError::InvalidSignature`], the same error the
//! registry returns when the recovered signer is not the expected one.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{Address, DelegableError};

/// Signature triple as produced by Ethereum tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Signature {
    /// Recovery id, either 27/28 or 0/1
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl Signature {
    pub fn new(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { v, r, s }
    }

    /// Splits a 65-byte `r || s || v` signature.
    pub fn from_rsv(bytes: &[u8; 65]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self { v: bytes[64], r, s }
    }

    pub fn to_rsv(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    fn recovery_id(&self) -> Result<libsecp256k1::RecoveryId, DelegableError> {
        let id = match self.v {
            27 | 28 => self.v - 27,
            0 | 1 => self.v,
            _ => return Err(DelegableError::InvalidSignature),
        };
        libsecp256k1::RecoveryId::parse(id).map_err(|_| DelegableError::InvalidSignature)
    }
}

/// Recovers the signer of `digest`.
pub fn recover(digest: &[u8; 32], signature: &Signature) -> Result<Address, DelegableError> {
    let recovery_id = signature.recovery_id()?;

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&signature.r);
    compact[32..].copy_from_slice(&signature.s);
    let parsed = libsecp256k1::Signature::parse_standard(&compact)
        .map_err(|_| DelegableError::InvalidSignature)?;

    // Reject zero scalars and the malleable high-s form.
    if parsed.r.is_zero() || parsed.s.is_zero() || parsed.s.is_high() {
        return Err(DelegableError::InvalidSignature);
    }

    let message = libsecp256k1::Message::parse(digest);
    let public_key = libsecp256k1::recover(&message, &parsed, &recovery_id)
        .map_err(|_| DelegableError::InvalidSignature)?;

    Ok(Address::from_public_key(&public_key))
}
