use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::combine::{HashValue, hash_combine};
use crate::dispatch::GetHash;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DigestError {
    #[error("expected 16 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, DigestError>;

/// A printable, parseable combined hash, e.g. for cache keys written to logs
/// or disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest(HashValue);

impl Digest {
    pub const fn new(value: HashValue) -> Self {
        Self(value)
    }

    pub fn of<T: GetHash + ?Sized>(value: &T) -> Self {
        Self(value.get_hash())
    }

    pub const fn value(self) -> HashValue {
        self.0
    }

    /// Mixes `other` into `self`.
    pub const fn combine(self, other: Digest) -> Self {
        Self(hash_combine(self.0, other.0))
    }
}

impl From<HashValue> for Digest {
    fn from(value: HashValue) -> Self {
        Self(value)
    }
}

impl From<Digest> for HashValue {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl GetHash for Digest {
    #[inline]
    fn get_hash(&self) -> HashValue {
        self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 16 {
            return Err(DigestError::InvalidLength(digits.len()));
        }
        let mut bytes = [0u8; 8];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(u64::from_be_bytes(bytes)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
