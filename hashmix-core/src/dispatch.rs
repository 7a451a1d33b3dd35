//! Per-type hashing strategy.
//!
//! Every hashable type implements [`GetHash`] exactly once, through one of
//! three strategies:
//!
//! - **built-in**: the type already implements [`std::hash::Hash`] and is
//!   registered with [`impl_std_hash!`](crate::impl_std_hash), wrapped in
//!   [`ByStdHash`], or derives `GetHash` with `#[get_hash(std)]`.
//! - **enumerated**: the type is a field-less enum implementing
//!   [`Enumerated`]; it hashes as its integer representation.
//! - **own hash**: the type implements [`GetHash`] itself, usually by folding
//!   its fields with [`hash_all!`](crate::hash_all).
//!
//! Coherence forbids two implementations for one type, so the strategy is
//! fixed when the crate is built. A type with no implementation is rejected
//! by the compiler:
//!
//! ```compile_fail
//! struct Opaque;
//! let _ = hashmix_core::hash_of(&Opaque);
//! ```

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use siphasher::sip::SipHasher13;

use crate::combine::HashValue;

/// Hash of a value, resolved per type at compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no hashing strategy",
    label = "`{Self}` does not implement `GetHash`",
    note = "register it with `impl_std_hash!`, wrap it in `ByStdHash`, implement `Enumerated`, or implement/derive `GetHash`"
)]
pub trait GetHash {
    fn get_hash(&self) -> HashValue;
}

/// Hashes any value with a hashing strategy.
#[inline]
pub fn hash_of<T: GetHash + ?Sized>(value: &T) -> HashValue {
    value.get_hash()
}

/// Built-in strategy: feeds `value` through [`Hash`] into SipHash-1-3 keyed at
/// zero. Unlike `DefaultHasher`, the output does not change between
/// toolchains.
pub fn std_hash<T: Hash + ?Sized>(value: &T) -> HashValue {
    let mut hasher = SipHasher13::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Opts any `T: Hash` into the built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ByStdHash<T>(pub T);

impl<T> ByStdHash<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> GetHash for ByStdHash<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        std_hash(&self.0)
    }
}

/// A field-less enum backed by an integer.
pub trait Enumerated {
    type Repr: GetHash;

    fn to_repr(&self) -> Self::Repr;
}

/// Enumerated strategy: hashes the integer representation.
#[inline]
pub fn enum_hash<T: Enumerated + ?Sized>(value: &T) -> HashValue {
    value.to_repr().get_hash()
}

/// Registers types that implement [`Hash`] with the built-in strategy.
///
/// ```
/// #[derive(Hash)]
/// struct Name(String);
/// hashmix_core::impl_std_hash!(Name);
/// ```
#[macro_export]
macro_rules! impl_std_hash {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dispatch::GetHash for $ty {
                #[inline]
                fn get_hash(&self) -> $crate::combine::HashValue {
                    $crate::dispatch::std_hash(self)
                }
            }
        )+
    };
}

/// Registers `Copy` field-less enums with the enumerated strategy.
///
/// ```
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Device { Cpu = 0, Cuda = 1 }
/// hashmix_core::impl_enum_hash!(Device as u8);
/// assert_eq!(hashmix_core::hash_of(&Device::Cuda), hashmix_core::hash_of(&1u8));
/// ```
#[macro_export]
macro_rules! impl_enum_hash {
    ($($ty:ty as $repr:ty),+ $(,)?) => {
        $(
            impl $crate::dispatch::Enumerated for $ty {
                type Repr = $repr;

                #[inline]
                fn to_repr(&self) -> $repr {
                    *self as $repr
                }
            }

            impl $crate::dispatch::GetHash for $ty {
                #[inline]
                fn get_hash(&self) -> $crate::combine::HashValue {
                    $crate::dispatch::enum_hash(self)
                }
            }
        )+
    };
}

impl<T: GetHash + ?Sized> GetHash for &T {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

impl<T: GetHash + ?Sized> GetHash for &mut T {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

impl<T: GetHash + ?Sized> GetHash for Box<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

impl<T: GetHash + ?Sized> GetHash for Rc<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

impl<T: GetHash + ?Sized> GetHash for Arc<T> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

impl<B: GetHash + ToOwned + ?Sized> GetHash for Cow<'_, B> {
    #[inline]
    fn get_hash(&self) -> HashValue {
        (**self).get_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[repr(i32)]
    enum Layout {
        Strided = 0,
        Sparse = 1,
        Mkldnn = 7,
    }

    crate::impl_enum_hash!(Layout as i32);

    #[derive(Hash)]
    struct Label(&'static str);

    crate::impl_std_hash!(Label);

    struct Shape {
        dims: Vec<i64>,
        contiguous: bool,
    }

    impl GetHash for Shape {
        fn get_hash(&self) -> HashValue {
            crate::hash_all!(self.dims, self.contiguous)
        }
    }

    #[test]
    fn test_enum_hashes_as_repr() {
        assert_eq!(hash_of(&Layout::Strided), hash_of(&0i32));
        assert_eq!(hash_of(&Layout::Sparse), hash_of(&1i32));
        assert_eq!(hash_of(&Layout::Mkldnn), hash_of(&7i32));
        assert_ne!(hash_of(&Layout::Sparse), hash_of(&1i64));
    }

    #[test]
    fn test_std_strategy_matches_std_hash() {
        assert_eq!(hash_of(&Label("conv")), std_hash(&Label("conv")));
        assert_eq!(hash_of(&Label("conv")), std_hash(&"conv"));
        assert_eq!(hash_of(&ByStdHash("conv")), std_hash("conv"));
    }

    #[test]
    fn test_std_hash_is_stable() {
        // SipHash-1-3 with zero keys over the bytes of 42u64.
        assert_eq!(std_hash(&42u64), std_hash(&42u64));
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        hasher.write_u64(42);
        assert_eq!(std_hash(&42u64), hasher.finish());
    }

    #[test]
    fn test_own_hash_strategy() {
        let shape = Shape {
            dims: vec![2, 3],
            contiguous: true,
        };
        assert_eq!(
            hash_of(&shape),
            hash_of(&(vec![2i64, 3], true)),
            "own hash folds its fields like a tuple"
        );
    }

    #[test]
    fn test_pointers_delegate() {
        let value = 5u32;
        let expected = hash_of(&value);
        assert_eq!(hash_of(&&value), expected);
        assert_eq!(hash_of(&Box::new(value)), expected);
        assert_eq!(hash_of(&Rc::new(value)), expected);
        assert_eq!(hash_of(&Arc::new(value)), expected);
        let borrowed: Cow<'_, str> = Cow::Borrowed("relu");
        let owned: Cow<'_, str> = Cow::Owned("relu".to_string());
        assert_eq!(hash_of(&borrowed), hash_of("relu"));
        assert_eq!(hash_of(&owned), hash_of("relu"));
    }
}
