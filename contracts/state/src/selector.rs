//! Operation selectors.
//!
//! A selector names the single operation a delegation applies to. It is the
//! first four bytes of the keccak hash of the operation's signature string,
//! so wallets and off-chain tooling can derive it independently.

use core::fmt;
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::keccak256;

#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    /// `post(address,address,uint256)`
    pub const POST: Selector = Selector([0x62, 0x4b, 0x99, 0x64]);
    /// `withdraw(address,address,uint256)`
    pub const WITHDRAW: Selector = Selector([0xd9, 0xca, 0xed, 0x12]);
    /// `mint(address,address,uint256)`
    pub const MINT: Selector = Selector([0xc6, 0xc3, 0xbb, 0xe6]);
    /// `burn(address,address,uint256)`
    pub const BURN: Selector = Selector([0xf6, 0xb9, 0x11, 0xbc]);

    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Derives the selector of a signature string such as
    /// `"mint(address,uint256)"`.
    pub fn from_signature(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        Self([hash[0], hash[1], hash[2], hash[3]])
    }

    /// ABI word encoding of a `bytes4`: right padded to 32 bytes.
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[..4].copy_from_slice(&self.0);
        word
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Selector {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 4];
        hex::decode_to_slice(s.strip_prefix("0x").unwrap_or(s), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({self})")
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_selectors_match_signatures() {
        assert_eq!(Selector::from_signature("post(address,address,uint256)"), Selector::POST);
        assert_eq!(
            Selector::from_signature("withdraw(address,address,uint256)"),
            Selector::WITHDRAW
        );
        assert_eq!(Selector::from_signature("mint(address,address,uint256)"), Selector::MINT);
        assert_eq!(Selector::from_signature("burn(address,address,uint256)"), Selector::BURN);
    }

    #[test]
    fn test_well_known_selectors() {
        assert_eq!(
            Selector::from_signature("transfer(address,uint256)").to_string(),
            "0xa9059cbb"
        );
        assert_eq!(Selector::from_signature("mint(address,uint256)").to_string(), "0x40c10f19");
    }

    #[test]
    fn test_parse_round_trip_and_word() {
        let selector: Selector = "0x40c10f19".parse().unwrap();
        assert_eq!(selector.0, [0x40, 0xc1, 0x0f, 0x19]);
        let word = selector.to_word();
        assert_eq!(&word[..4], &selector.0);
        assert_eq!(&word[4..], &[0u8; 28]);
        assert!("0x40c10f".parse::<Selector>().is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Selector::MINT).unwrap();
        assert_eq!(json, "\"0xc6c3bbe6\"");
        assert_eq!(serde_json::from_str::<Selector>(&json).unwrap(), Selector::MINT);

        assert!(serde_json::from_str::<Selector>("\"0xc6c3bb\"").is_err());
    }
}
