//! Block hash used for genesis constants

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Hash size in bytes
pub const HASH_SIZE: usize = 32;

/// Maximum length of a hash hex string
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// Double SHA-256 hash in internal byte order
///
/// The textual form is byte-reversed, matching how block explorers and
/// node RPCs print block hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Wrap raw bytes (internal order)
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes (internal order)
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Parse a byte-reversed hex string
    ///
    /// Strings shorter than 64 characters are treated as having leading
    /// zeros; an odd length gets a single leading zero nibble.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() > MAX_HASH_STRING_SIZE {
            return Err(Error::InvalidHash(format!(
                "max hash string length is {} bytes, got {}",
                MAX_HASH_STRING_SIZE,
                s.len()
            )));
        }

        let padded = if s.len() % 2 == 1 {
            format!("0{}", s)
        } else {
            s.to_string()
        };
        let decoded = hex::decode(&padded).map_err(|e| Error::InvalidHash(e.to_string()))?;

        let mut bytes = [0u8; HASH_SIZE];
        for (dst, src) in bytes.iter_mut().zip(decoded.iter().rev()) {
            *dst = *src;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl std::str::FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a hash for a compile-time constant.
///
/// Only for the built-in parameter sets: a malformed string is a
/// programming error, so this panics rather than returning an error.
pub fn new_hash_from_str(s: &str) -> Hash {
    match Hash::from_hex(s) {
        Ok(hash) => hash,
        Err(e) => panic!("invalid hash constant {:?}: {}", s, e),
    }
}
