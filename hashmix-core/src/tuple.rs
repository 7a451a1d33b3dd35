//! Tuples fold their element hashes in order.
//!
//! The accumulator starts at the first element's hash, and every following
//! element is mixed in as `hash_combine(element, accumulator)`. A one-element
//! tuple therefore hashes exactly like its element, and `()` hashes to `0`.

use crate::combine::{HashValue, hash_combine};
use crate::dispatch::GetHash;

fn fold_tuple(hashes: &[HashValue]) -> HashValue {
    match hashes.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, h| hash_combine(*h, acc)),
        None => 0,
    }
}

impl GetHash for () {
    #[inline]
    fn get_hash(&self) -> HashValue {
        0
    }
}

macro_rules! tuple_impls {
    ($( ($($name:ident . $idx:tt),+) )+) => {
        $(
            impl<$($name: GetHash),+> GetHash for ($($name,)+) {
                #[inline]
                fn get_hash(&self) -> HashValue {
                    fold_tuple(&[$(self.$idx.get_hash()),+])
                }
            }
        )+
    };
}

tuple_impls! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
    (A.0, B.1, C.2, D.3, E.4)
    (A.0, B.1, C.2, D.3, E.4, F.5)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11)
}

/// Folds its arguments the way tuples do, without the tuple arity limit.
///
/// `hash_all!(a, b, c)` equals `hash_of(&(a, b, c))`. Meant for writing an own-hash implementation in one line:
///
/// ```
/// use hashmix_core::{GetHash, HashValue, hash_all, hash_of};
///
/// struct Conv {
///     kernel: Vec<usize>,
///     stride: usize,
///     bias: bool,
/// }
///
/// impl GetHash for Conv {
///     fn get_hash(&self) -> HashValue {
///         hash_all!(self.kernel, self.stride, self.bias)
///     }
/// }
///
/// let conv = Conv { kernel: vec![3, 3], stride: 1, bias: true };
/// assert_eq!(hash_of(&conv), hash_of(&(vec![3usize, 3], 1usize, true)));
/// ```
#[macro_export]
macro_rules! hash_all {
    () => {
        0 as $crate::combine::HashValue
    };
    (@fold $first:expr $(, $rest:expr)*) => {{
        let hash = $crate::dispatch::GetHash::get_hash(&$first);
        $(
            let hash = $crate::combine::hash_combine(
                $crate::dispatch::GetHash::get_hash(&$rest),
                hash,
            );
        )*
        hash
    }};
    ($($arg:expr),+ $(,)?) => {
        $crate::hash_all!(@fold $($arg),+)
    };
}
