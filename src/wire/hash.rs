//! Chain hash type and the hash functions used by Decred.

use blake_hash::Blake256;
use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Both crates export their own `Digest` trait (different digest versions).
use blake_hash::Digest as _;
use ripemd::Digest as _;

/// Number of bytes in a hash.
pub const HASH_SIZE: usize = 32;

/// Maximum length of a hash string (two hex characters per byte).
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HashParseError {
    #[error("max hash string length is {max} bytes, got {got}")]
    TooLong { max: usize, got: usize },

    #[error("{0}")]
    Hex(#[from] hex::FromHexError),
}

/// 32-byte identifier of a transaction or block.
///
/// The string form is the hex encoding of the bytes in reverse order, which
/// is how node RPCs and block explorers present identifiers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Hash of `data` with BLAKE-256.
    pub fn blake256(data: &[u8]) -> Self {
        Self(blake256(data))
    }
}

impl FromStr for Hash {
    type Err = HashParseError;

    /// Decodes a reversed-byte-order hex string. Short strings are treated
    /// as if they had leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_HASH_STRING_SIZE {
            return Err(HashParseError::TooLong {
                max: MAX_HASH_STRING_SIZE,
                got: s.len(),
            });
        }

        let decoded = if s.len() % 2 == 0 {
            hex::decode(s)?
        } else {
            hex::decode(format!("0{s}"))?
        };

        let mut reversed = [0u8; HASH_SIZE];
        reversed[HASH_SIZE - decoded.len()..].copy_from_slice(&decoded);
        reversed.reverse();
        Ok(Self(reversed))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// 14-round BLAKE-256 digest.
pub fn blake256(data: &[u8]) -> [u8; 32] {
    let digest = Blake256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// RIPEMD-160 of the BLAKE-256 digest, used for address payloads.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let digest = Ripemd160::digest(blake256(data));
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    out
}
