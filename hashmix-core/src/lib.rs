pub mod combine;
pub mod digest;
pub mod dispatch;
pub mod hasher;
mod primitives;
pub mod seq;
pub mod tuple;

pub use combine::{HashValue, combine_iter, hash_combine};
pub use digest::{Digest, DigestError};
pub use dispatch::{ByStdHash, Enumerated, GetHash, enum_hash, hash_of, std_hash};
pub use hasher::{BuildCombineHasher, CombineHasher};
pub use seq::hash_seq;
