//! EIP-712 signing domain.
//!
//! The domain separator binds a permit to one protocol name, version, chain
//! and contract instance, so a signature made for one deployment cannot be
//! replayed against another.

use serde::{Deserialize, Serialize};

use crate::hash::{keccak256, keccak256_concat};
use crate::Address;

/// Type string of the EIP-712 domain.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Version literal used when none is configured.
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// Prefix of every EIP-712 digest (`0x19 0x01`).
const EIP712_PREFIX: [u8; 2] = [0x19, 0x01];

/// Identity of the signing domain, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Protocol name, e.g. "Delegable"
    pub name: String,
    /// Version string, "1" unless configured otherwise
    #[serde(default = "default_version")]
    pub version: String,
    /// Chain identifier
    pub chain_id: u64,
    /// Address of the contract instance verifying permits
    pub verifying_contract: Address,
}

fn default_version() -> String {
    DEFAULT_DOMAIN_VERSION.to_string()
}

impl DomainConfig {
    pub fn new(name: impl Into<String>, chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            chain_id,
            verifying_contract,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// A signing domain with its separator computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDataDomain {
    config: DomainConfig,
    separator: [u8; 32],
}

impl TypedDataDomain {
    pub fn new(config: DomainConfig) -> Self {
        let separator = domain_separator(&config);
        Self { config, separator }
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    pub fn separator(&self) -> &[u8; 32] {
        &self.separator
    }

    /// Final digest of a struct hash: `keccak256(0x1901 || separator || struct_hash)`.
    pub fn hash_typed_data(&self, struct_hash: &[u8; 32]) -> [u8; 32] {
        keccak256_concat(&[&EIP712_PREFIX, &self.separator, struct_hash])
    }
}

/// ABI word encoding of an unsigned integer.
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn domain_separator(config: &DomainConfig) -> [u8; 32] {
    keccak256_concat(&[
        &keccak256(DOMAIN_TYPE.as_bytes()),
        &keccak256(config.name.as_bytes()),
        &keccak256(config.version.as_bytes()),
        &u64_word(config.chain_id),
        &config.verifying_contract.to_word(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_domain() -> TypedDataDomain {
        let contract: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
        TypedDataDomain::new(DomainConfig::new("Delegable", 31337, contract))
    }

    #[test]
    fn test_domain_typehash() {
        assert_eq!(
            hex::encode(keccak256(DOMAIN_TYPE.as_bytes())),
            "8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f"
        );
    }

    #[test]
    fn test_known_separator() {
        assert_eq!(
            hex::encode(local_domain().separator()),
            "b71f1cc680c177732c356790e0b8b54710e4e488316123dff61bfb869acad6f0"
        );
    }

    #[test]
    fn test_separator_binds_chain_and_contract() {
        let base = local_domain();
        let other_chain = TypedDataDomain::new(DomainConfig {
            chain_id: 1,
            ..base.config().clone()
        });
        let other_contract = TypedDataDomain::new(DomainConfig {
            verifying_contract: Address([1u8; 20]),
            ..base.config().clone()
        });
        let other_version = TypedDataDomain::new(base.config().clone().with_version("2"));

        assert_ne!(base.separator(), other_chain.separator());
        assert_ne!(base.separator(), other_contract.separator());
        assert_ne!(base.separator(), other_version.separator());
    }

    #[test]
    fn test_u64_word() {
        let word = u64_word(31337);
        assert_eq!(&word[..24], &[0u8; 24]);
        assert_eq!(&word[24..], &31337u64.to_be_bytes());
    }
}
