use async_trait::async_trait;
use delegable_state::{Address, Signature};

use crate::error::{DelegableSdkError, Result};

/// Abstraction for an entity that can sign typed-data digests.
/// This allows the SDK to work with:
/// 1. Local secret keys (Backend/CLI)
/// 2. External wallets that only expose a signing call
#[async_trait]
pub trait DelegableSigner: Send + Sync {
    fn address(&self) -> Address;

    /// Sign a 32-byte digest, returning `(v, r, s)` with `v` in {27, 28}.
    async fn sign_digest(&self, digest: &[u8; 32]) -> std::result::Result<Signature, String>;
}

pub struct LocalSigner {
    secret: libsecp256k1::SecretKey,
    address: Address,
}

impl LocalSigner {
    pub fn new(secret: libsecp256k1::SecretKey) -> Self {
        let public = libsecp256k1::PublicKey::from_secret_key(&secret);
        Self {
            secret,
            address: Address::from_public_key(&public),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let secret = libsecp256k1::SecretKey::parse_slice(bytes)
            .map_err(|e| DelegableSdkError::Signer(format!("Invalid secret key: {:?}", e)))?;
        Ok(Self::new(secret))
    }

    pub fn from_hex(secret: &str) -> Result<Self> {
        let bytes = hex::decode(secret.trim_start_matches("0x"))
            .map_err(|e| DelegableSdkError::Signer(format!("Invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn random() -> Self {
        loop {
            if let Ok(signer) = Self::from_bytes(&rand::random::<[u8; 32]>()) {
                return signer;
            }
        }
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DelegableSigner for LocalSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_digest(&self, digest: &[u8; 32]) -> std::result::Result<Signature, String> {
        let message = libsecp256k1::Message::parse(digest);
        let (signature, recovery_id) = libsecp256k1::sign(&message, &self.secret);
        let mut rsv = [0u8; 65];
        rsv[..64].copy_from_slice(&signature.serialize());
        rsv[64] = 27 + recovery_id.serialize();
        Ok(Signature::from_rsv(&rsv))
    }
}
