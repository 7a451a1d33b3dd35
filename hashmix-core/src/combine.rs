/// A combined hash. Always 64 bits wide so digests agree across targets.
pub type HashValue = u64;

/// 32-bit golden ratio constant of the boost mixer.
pub const GOLDEN_RATIO: HashValue = 0x9e37_79b9;

/// Mixes `value` into `seed`.
///
/// This is the boost `hash_combine` formula with wrapping arithmetic. The
/// result depends on argument order: `hash_combine(a, b)` and
/// `hash_combine(b, a)` generally differ.
#[inline]
pub const fn hash_combine(seed: HashValue, value: HashValue) -> HashValue {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Zero-seeded left fold of [`hash_combine`] over precomputed hashes.
pub fn combine_iter<I>(hashes: I) -> HashValue
where
    I: IntoIterator<Item = HashValue>,
{
    hashes.into_iter().fold(0, hash_combine)
}
