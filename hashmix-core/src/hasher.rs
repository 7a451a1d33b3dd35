use std::hash::{BuildHasher, Hasher};

use crate::combine::{HashValue, hash_combine};

/// A [`Hasher`] that folds every written word with [`hash_combine`].
///
/// Writing a single precomputed hash through `write_u64` yields
/// `hash_combine(0, hash)`, which makes this the natural hasher for maps keyed
/// by values that already carry their hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineHasher {
    state: HashValue,
}

impl CombineHasher {
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    pub const fn with_seed(seed: HashValue) -> Self {
        Self { state: seed }
    }
}

impl Hasher for CombineHasher {
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            self.write_u64(u64::from_le_bytes(word));
        }
        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut word = [0u8; 8];
            word[..tail.len()].copy_from_slice(tail);
            self.write_u64(u64::from_le_bytes(word));
        }
        self.write_u64(bytes.len() as u64);
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state = hash_combine(self.state, i);
    }

    fn write_u128(&mut self, i: u128) {
        self.write_u64(i as u64);
        self.write_u64((i >> 64) as u64);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Builds [`CombineHasher`]s for std collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildCombineHasher;

impl BuildHasher for BuildCombineHasher {
    type Hasher = CombineHasher;

    fn build_hasher(&self) -> CombineHasher {
        CombineHasher::new()
    }
}
