//! Combined hashing for compound values.
//!
//! [`GetHash`] gives every hashable type exactly one strategy, chosen when the
//! crate is built: the built-in [`std::hash::Hash`], the integer behind a
//! field-less enum, or the type's own implementation (usually derived).
//! Sequences and tuples fold their element hashes with [`hash_combine`], and
//! [`hash_all!`] hashes several values in one call.
//!
//! ```
//! use hashmix::{GetHash, hash_all, hash_of};
//!
//! #[derive(Clone, Copy, GetHash)]
//! #[repr(u8)]
//! enum Dtype {
//!     F32 = 0,
//!     F16 = 1,
//! }
//!
//! #[derive(GetHash)]
//! struct KernelKey {
//!     op: String,
//!     dtype: Dtype,
//!     shape: Vec<usize>,
//! }
//!
//! let key = KernelKey { op: "matmul".into(), dtype: Dtype::F16, shape: vec![64, 64] };
//! assert_eq!(hash_of(&key), hash_all!(key.op, 1u8, key.shape));
//! ```

// Lets derived code name `::hashmix` from inside this crate too.
extern crate self as hashmix;

pub use hashmix_core::{combine, digest, dispatch, hasher, seq, tuple};
pub use hashmix_core::{
    BuildCombineHasher, ByStdHash, CombineHasher, Digest, DigestError, Enumerated, GetHash,
    HashValue, combine_iter, enum_hash, hash_combine, hash_of, hash_seq, std_hash,
};
pub use hashmix_core::{hash_all, impl_enum_hash, impl_std_hash};
pub use hashmix_derive::GetHash;

pub mod key;
pub use key::{HashKey, HashKeyMap, HashKeySet};
