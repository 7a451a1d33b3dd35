use std::hash::Hash;

use hashmix::{Enumerated, GetHash, HashValue, hash_all, hash_combine, hash_of, std_hash};

#[derive(Debug, Clone, Copy, PartialEq, Eq, GetHash)]
#[repr(i16)]
enum ScalarType {
    Float = 6,
    Half = 5,
    Bool = 11,
}

#[derive(Debug, Clone, Copy, GetHash)]
enum DefaultRepr {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, GetHash)]
#[repr(C)]
enum CRepr {
    Low = 1,
    High = 200,
}

#[derive(GetHash)]
struct TensorMeta {
    dtype: ScalarType,
    sizes: Vec<i64>,
    strides: Vec<i64>,
    requires_grad: bool,
}

#[derive(GetHash)]
struct CachedKernel {
    name: String,
    #[get_hash(skip)]
    #[allow(dead_code)]
    hits: u64,
}

#[derive(GetHash)]
struct Pair(u32, &'static str);

#[derive(GetHash)]
struct Marker;

#[derive(GetHash)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Hash, GetHash)]
#[get_hash(std)]
struct Interned {
    id: u32,
}

#[derive(GetHash)]
enum Node {
    Leaf,
    Input(u32),
    Binary { op: &'static str, lhs: u32, rhs: u32 },
    Annotated(u32, #[get_hash(skip)] &'static str),
}

#[derive(GetHash)]
enum Shadowed {
    Named { __hash: u32, x: u32 },
    Positional(u32, u32),
}

#[derive(GetHash)]
struct ShadowedStruct {
    __hash: u32,
    __field0: u32,
}

#[derive(GetHash)]
struct Wide {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    f: u8,
    g: u8,
    h: u8,
    i: u8,
    j: u8,
    k: u8,
    l: u8,
    m: u8,
}

#[test]
fn test_field_less_enum_uses_repr() {
    assert_eq!(hash_of(&ScalarType::Float), hash_of(&6i16));
    assert_eq!(hash_of(&ScalarType::Half), hash_of(&5i16));
    assert_eq!(hash_of(&ScalarType::Bool), hash_of(&11i16));
    assert_eq!(ScalarType::Bool.to_repr(), 11i16);
}

#[test]
fn test_enum_without_repr_defaults_to_isize() {
    assert_eq!(hash_of(&DefaultRepr::First), hash_of(&0isize));
    assert_eq!(hash_of(&DefaultRepr::Second), hash_of(&1isize));
}

#[test]
fn test_enum_repr_ignores_non_integer_hints() {
    assert_eq!(hash_of(&CRepr::Low), hash_of(&1isize));
    assert_eq!(hash_of(&CRepr::High), hash_of(&200isize));
}

#[test]
fn test_struct_hashes_fields_as_tuple() {
    let meta = TensorMeta {
        dtype: ScalarType::Float,
        sizes: vec![2, 3],
        strides: vec![3, 1],
        requires_grad: false,
    };
    assert_eq!(
        hash_of(&meta),
        hash_all!(meta.dtype, meta.sizes, meta.strides, meta.requires_grad)
    );
    assert_eq!(
        hash_of(&meta),
        hash_of(&(6i16, vec![2i64, 3], vec![3i64, 1], false))
    );
}

#[test]
fn test_field_order_matters() {
    let a = TensorMeta {
        dtype: ScalarType::Float,
        sizes: vec![3, 1],
        strides: vec![2, 3],
        requires_grad: false,
    };
    let b = TensorMeta {
        dtype: ScalarType::Float,
        sizes: vec![2, 3],
        strides: vec![3, 1],
        requires_grad: false,
    };
    assert_ne!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_skipped_fields_do_not_contribute() {
    let a = CachedKernel {
        name: "add".into(),
        hits: 1,
    };
    let b = CachedKernel {
        name: "add".into(),
        hits: 900,
    };
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of("add"));
}

#[test]
fn test_tuple_and_unit_structs() {
    assert_eq!(hash_of(&Pair(3, "x")), hash_of(&(3u32, "x")));
    assert_eq!(hash_of(&Marker), 0);
}

#[test]
fn test_generic_struct() {
    let w = Wrapper {
        inner: vec![1u8, 2, 3],
    };
    assert_eq!(hash_of(&w), hash_of(&vec![1u8, 2, 3]));
    let nested = Wrapper { inner: Wrapper { inner: 9u64 } };
    assert_eq!(hash_of(&nested), hash_of(&9u64));
}

#[test]
fn test_std_strategy() {
    let value = Interned { id: 4 };
    assert_eq!(hash_of(&value), std_hash(&value));
    assert_eq!(hash_of(&value), std_hash(&4u32));
}

#[test]
fn test_data_enum_leads_with_variant_index() {
    assert_eq!(hash_of(&Node::Leaf), hash_of(&0u64));
    assert_eq!(hash_of(&Node::Input(7)), hash_of(&(1u64, 7u32)));
    assert_eq!(
        hash_of(&Node::Binary {
            op: "add",
            lhs: 1,
            rhs: 2
        }),
        hash_of(&(2u64, "add", 1u32, 2u32))
    );
    assert_eq!(
        hash_of(&Node::Annotated(5, "ignored")),
        hash_of(&Node::Annotated(5, "also ignored"))
    );
    assert_ne!(hash_of(&Node::Input(1)), hash_of(&Node::Annotated(1, "")));
}

#[test]
fn test_fields_beyond_tuple_arity() {
    let w = Wide {
        a: 1,
        b: 2,
        c: 3,
        d: 4,
        e: 5,
        f: 6,
        g: 7,
        h: 8,
        i: 9,
        j: 10,
        k: 11,
        l: 12,
        m: 13,
    };
    let expected: HashValue = (1u8..=13)
        .map(|v| hash_of(&v))
        .reduce(|acc, h| hash_combine(h, acc))
        .unwrap_or(0);
    assert_eq!(hash_of(&w), expected);
}

#[test]
fn test_field_names_cannot_shadow_generated_locals() {
    assert_eq!(
        hash_of(&Shadowed::Named { __hash: 5, x: 9 }),
        hash_of(&(0u64, 5u32, 9u32))
    );
    assert_eq!(
        hash_of(&Shadowed::Positional(5, 9)),
        hash_of(&(1u64, 5u32, 9u32))
    );
    assert_eq!(
        hash_of(&ShadowedStruct {
            __hash: 5,
            __field0: 9
        }),
        hash_of(&(5u32, 9u32))
    );
}

fn assert_hashable<T: GetHash + Hash>() {}

#[test]
fn test_std_derive_keeps_hash() {
    assert_hashable::<Interned>();
}
