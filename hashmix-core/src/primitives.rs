use std::cmp::Ordering;
use std::time::Duration;

use crate::combine::HashValue;
use crate::dispatch::{GetHash, std_hash};

crate::impl_std_hash!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
    Duration, Ordering,
);

// Floats hash their bits; `-0.0 == 0.0` so both must land on the same hash.
impl GetHash for f32 {
    #[inline]
    fn get_hash(&self) -> HashValue {
        let v = if *self == 0.0 { 0.0f32 } else { *self };
        std_hash(&v.to_bits())
    }
}

impl GetHash for f64 {
    #[inline]
    fn get_hash(&self) -> HashValue {
        let v = if *self == 0.0 { 0.0f64 } else { *self };
        std_hash(&v.to_bits())
    }
}
