//! Ordered sequences hash as a zero-seeded left fold of their element hashes.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::combine::{HashValue, hash_combine};
use crate::dispatch::GetHash;

/// Folds the hashes of `items`, in order, starting from zero.
pub fn hash_seq<I>(items: I) -> HashValue
where
    I: IntoIterator,
    I::Item: GetHash,
{
    items
        .into_iter()
        .fold(0, |seed, item| hash_combine(seed, item.get_hash()))
}

impl<T: GetHash> GetHash for [T] {
    #[inline]
    fn get_hash(&self) -> HashValue {
        hash_seq(self)
    }
}

impl<T: GetHash> GetHash for Vec<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        self.as_slice().get_hash()
    }
}

impl<T: GetHash, const N: usize> GetHash for [T; N] {
    #[inline]
    fn get_hash(&self) -> HashValue {
        self.as_slice().get_hash()
    }
}

impl<T: GetHash> GetHash for VecDeque<T> {
    fn get_hash(&self) -> HashValue {
        hash_seq(self)
    }
}

impl<T: GetHash> GetHash for BTreeSet<T> {
    fn get_hash(&self) -> HashValue {
        hash_seq(self)
    }
}

impl<K: GetHash, V: GetHash> GetHash for BTreeMap<K, V> {
    fn get_hash(&self) -> HashValue {
        hash_seq(self.iter())
    }
}

/// A sequence of zero or one element: `None` is `0`.
impl<T: GetHash> GetHash for Option<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        hash_seq(self)
    }
}
