//! Keccak-256 helpers.

use sha3::{Digest, Keccak256};

/// Hashes a single byte string.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    keccak256_concat(&[data])
}

/// Hashes the concatenation of several byte strings without copying them
/// into one buffer first.
pub fn keccak256_concat(segments: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for segment in segments {
        hasher.update(segment);
    }
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_concat_matches_single_buffer() {
        assert_eq!(
            keccak256_concat(&[b"transfer(", b"address,uint256)"]),
            keccak256(b"transfer(address,uint256)")
        );
    }
}
