//! Hash-keyed lookup keys
//!
//! A [`HashKey`] pairs a value with its combined hash, computed once on
//! construction. Lookups in a [`HashKeyMap`] then only compare the cached
//! hashes until two keys land on the same one, and fall back to value
//! equality to tell real matches from collisions.
//!
//! This is how compound cache keys (kernel signatures, shape/dtype/device
//! tuples) are used without rehashing every field on every lookup.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use hashmix_core::{BuildCombineHasher, Digest, GetHash, HashValue};

/// A value with its precomputed combined hash.
#[derive(Clone)]
pub struct HashKey<T> {
    hash: HashValue,
    value: T,
}

/// `HashMap` keyed by [`HashKey`], hashing only the cached value.
pub type HashKeyMap<K, V> = HashMap<HashKey<K>, V, BuildCombineHasher>;

/// `HashSet` of [`HashKey`], hashing only the cached value.
pub type HashKeySet<K> = HashSet<HashKey<K>, BuildCombineHasher>;

impl<T: GetHash> HashKey<T> {
    pub fn new(value: T) -> Self {
        Self {
            hash: value.get_hash(),
            value,
        }
    }
}

impl<T> HashKey<T> {
    pub fn hash_value(&self) -> HashValue {
        self.hash
    }

    pub fn digest(&self) -> Digest {
        Digest::new(self.hash)
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: GetHash> From<T> for HashKey<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for HashKey<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Hash for HashKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T> GetHash for HashKey<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        self.hash
    }
}

impl<T: PartialEq> PartialEq for HashKey<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash {
            return false;
        }
        let equal = self.value == other.value;
        if !equal {
            log::trace!("hash collision on {}", self.digest());
        }
        equal
    }
}

impl<T: Eq> Eq for HashKey<T> {}

impl<T: fmt::Debug> fmt::Debug for HashKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashKey")
            .field("hash", &self.digest().to_string())
            .field("value", &self.value)
            .finish()
    }
}
