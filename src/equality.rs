//! Equality used by the equality-based conditions.
//!
//! [`eq`] tries, in order: native identity, the nil rule, then the
//! cross-kind comparison of untyped constants. Nothing else is
//! considered equal.

use std::sync::Arc;

use crate::untyped::ApproximatelyEquals;
use crate::value::Value;

fn same_handle<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Native identity: same variant and same value for comparable kinds,
/// same declared type and same handle for reference kinds.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::I8(a), Value::I8(b)) => a == b,
        (Value::I16(a), Value::I16(b)) => a == b,
        (Value::I32(a), Value::I32(b)) => a == b,
        (Value::I64(a), Value::I64(b)) => a == b,
        (Value::Isize(a), Value::Isize(b)) => a == b,
        (Value::U8(a), Value::U8(b)) => a == b,
        (Value::U16(a), Value::U16(b)) => a == b,
        (Value::U32(a), Value::U32(b)) => a == b,
        (Value::U64(a), Value::U64(b)) => a == b,
        (Value::Usize(a), Value::Usize(b)) => a == b,
        (Value::F32(a), Value::F32(b)) => a == b,
        (Value::F64(a), Value::F64(b)) => a == b,
        (Value::C64(a), Value::C64(b)) => a == b,
        (Value::C128(a), Value::C128(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (
            Value::Slice {
                elem: ea,
                items: ia,
            },
            Value::Slice {
                elem: eb,
                items: ib,
            },
        ) => ea == eb && same_handle(ia, ib),
        (
            Value::Map {
                key: ka,
                value: va,
                entries: ea,
            },
            Value::Map {
                key: kb,
                value: vb,
                entries: eb,
            },
        ) => ka == kb && va == vb && same_handle(ea, eb),
        (
            Value::Pointer {
                pointee: pa,
                addr: aa,
            },
            Value::Pointer {
                pointee: pb,
                addr: ab,
            },
        ) => pa == pb && aa == ab,
        (Value::RawPointer(a), Value::RawPointer(b)) => a == b,
        (Value::Func(a), Value::Func(b)) => {
            a.as_ref().map(|f| f.addr()) == b.as_ref().map(|f| f.addr())
        }
        (
            Value::Chan {
                elem: ea,
                handle: ha,
            },
            Value::Chan {
                elem: eb,
                handle: hb,
            },
        ) => ea == eb && ha == hb,
        (
            Value::Interface {
                name: na,
                inner: ia,
            },
            Value::Interface {
                name: nb,
                inner: ib,
            },
        ) => {
            na == nb
                && match (ia, ib) {
                    (None, None) => true,
                    (Some(a), Some(b)) => identical(a, b),
                    _ => false,
                }
        }
        (
            Value::Struct {
                name: na,
                fields: fa,
            },
            Value::Struct {
                name: nb,
                fields: fb,
            },
        ) => {
            na == nb
                && fa.len() == fb.len()
                && fa
                    .iter()
                    .zip(fb.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && identical(va, vb))
        }
        (Value::Untyped(a), Value::Untyped(b)) => a == b,
        _ => false,
    }
}

/// True if `v` is the nil literal or the nil sentinel of a nilable kind.
pub fn equals_nil(v: &Value) -> bool {
    v.is_nil()
}

/// The equality relation of [`Equals`](crate::conditions::Equals) and
/// [`NotEquals`](crate::conditions::NotEquals).
///
/// The nil literal equals every nil sentinel, so
/// `eq(&Value::Nil, &Value::nil_pointer::<i32>())` holds while two nil
/// pointers to different types stay unequal. Interfaces are compared by
/// the value they hold.
pub fn eq(a: &Value, b: &Value) -> bool {
    let (a, b) = (a.dynamic(), b.dynamic());
    if identical(a, b) {
        return true;
    }

    if a.is_nil_literal() {
        return equals_nil(b);
    }
    if b.is_nil_literal() {
        return equals_nil(a);
    }

    match (a, b) {
        // Both sides untyped: either direction may know the other's kind.
        (Value::Untyped(ua), Value::Untyped(ub)) => {
            ua.approximately_equals(b) || ub.approximately_equals(a)
        }
        (Value::Untyped(u), other) | (other, Value::Untyped(u)) => u.approximately_equals(other),
        _ => false,
    }
}

/// Structural equality used for sequences.
///
/// Values must have the same declared type. Slices and maps compare
/// element-wise, a nil and a non-nil container are different here;
/// pointers, channels and functions compare by handle.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if a.value_type() != b.value_type() {
        return false;
    }
    match (a, b) {
        (Value::Slice { items: ia, .. }, Value::Slice { items: ib, .. }) => match (ia, ib) {
            (None, None) => true,
            (Some(ia), Some(ib)) => {
                ia.len() == ib.len() && ia.iter().zip(ib.iter()).all(|(x, y)| deep_equal(x, y))
            }
            _ => false,
        },
        (Value::Map { entries: ea, .. }, Value::Map { entries: eb, .. }) => match (ea, eb) {
            (None, None) => true,
            (Some(ea), Some(eb)) => {
                ea.len() == eb.len()
                    && ea.iter().all(|(ka, va)| {
                        eb.iter()
                            .any(|(kb, vb)| deep_equal(ka, kb) && deep_equal(va, vb))
                    })
            }
            _ => false,
        },
        (Value::Interface { inner: ia, .. }, Value::Interface { inner: ib, .. }) => {
            match (ia, ib) {
                (None, None) => true,
                (Some(ia), Some(ib)) => deep_equal(ia, ib),
                _ => false,
            }
        }
        (Value::Struct { fields: fa, .. }, Value::Struct { fields: fb, .. }) => {
            fa.len() == fb.len()
                && fa
                    .iter()
                    .zip(fb.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && deep_equal(va, vb))
        }
        _ => identical(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::untyped::{untyped_float, untyped_int, untyped_string, untyped_uint};

    #[test]
    fn test_identity() {
        assert!(eq(&Value::I32(1), &Value::I32(1)));
        assert!(!eq(&Value::I32(1), &Value::I64(1)));
        assert!(!eq(&Value::I32(1), &Value::I32(2)));
        assert!(eq(&Value::from("abc"), &Value::from("abc")));
        assert!(!eq(&Value::F64(f64::NAN), &Value::F64(f64::NAN)));
    }

    #[test]
    fn test_nil_literal_against_sentinels() {
        assert!(eq(&Value::Nil, &Value::Nil));
        assert!(eq(&Value::Nil, &Value::nil_pointer::<i64>()));
        assert!(eq(&Value::nil_slice::<i64>(), &Value::Nil));
        assert!(eq(&Value::Nil, &Value::nil_map::<i64, i64>()));
        assert!(eq(&Value::Nil, &Value::nil_func()));
        assert!(eq(&Value::Nil, &Value::nil_chan::<i64>()));
        assert!(eq(&Value::Nil, &Value::raw_pointer(std::ptr::null::<u8>())));
        assert!(eq(&Value::Nil, &Value::nil_interface("error")));

        assert!(!eq(&Value::Nil, &Value::I32(0)));
        assert!(!eq(&Value::Nil, &Value::from("")));
        assert!(!eq(&Value::Nil, &Value::slice(Vec::<i64>::new())));
        assert!(!eq(&Value::Nil, &untyped_int(0)));
    }

    #[test]
    fn test_typed_nils_of_different_types() {
        assert!(eq(&Value::nil_pointer::<i64>(), &Value::nil_pointer::<i64>()));
        assert!(!eq(&Value::nil_pointer::<i64>(), &Value::nil_pointer::<u8>()));
        assert!(!eq(&Value::nil_pointer::<i64>(), &Value::nil_slice::<i64>()));
    }

    #[test]
    fn test_reference_identity() {
        let x = 1i32;
        let y = 1i32;
        assert!(eq(&Value::pointer(&x), &Value::pointer(&x)));
        assert!(!eq(&Value::pointer(&x), &Value::pointer(&y)));

        let s = Value::slice(vec![1, 2]);
        assert!(eq(&s, &s.clone()));
        assert!(!eq(&s, &Value::slice(vec![1, 2])));

        let f = Value::func(|| {});
        assert!(eq(&f, &f.clone()));
        assert!(!eq(&f, &Value::func(|| {})));
    }

    #[test]
    fn test_interfaces_compare_by_held_value() {
        let nil_ptr = Value::interface("error", Value::nil_pointer::<i32>());
        assert!(eq(&Value::Nil, &nil_ptr));
        assert!(eq(&nil_ptr, &Value::Nil));
        assert!(eq(&nil_ptr, &Value::nil_pointer::<i32>()));
        assert!(!eq(&nil_ptr, &Value::nil_pointer::<u8>()));

        assert!(eq(&Value::I32(1), &Value::interface("any", 1)));
        assert!(eq(&Value::interface("any", 1), &Value::I32(1)));
        assert!(!eq(&Value::I64(1), &Value::interface("any", 1)));
        assert!(eq(&Value::interface("any", 7u8), &untyped_int(7)));
        assert!(eq(&Value::nil_interface("error"), &Value::nil_interface("io.Reader")));
        assert!(!eq(&Value::nil_interface("error"), &Value::interface("any", 0)));
    }

    #[test]
    fn test_untyped_delegation_is_symmetric() {
        assert!(eq(&untyped_int(100), &Value::U8(100)));
        assert!(eq(&Value::U8(100), &untyped_int(100)));
        assert!(eq(&untyped_uint(100), &Value::I16(100)));
        assert!(eq(&untyped_int(2), &untyped_float(2.0)));
        assert!(eq(&untyped_float(2.0), &untyped_int(2)));
        assert!(eq(&untyped_string("abc"), &Value::from("abc")));
        assert!(!eq(&untyped_string("1"), &Value::I32(1)));
    }

    #[test]
    fn test_structs_compare_fieldwise() {
        let a = Value::structure("P", vec![("x", 1), ("y", 2)]);
        let b = Value::structure("P", vec![("x", 1), ("y", 2)]);
        let c = Value::structure("Q", vec![("x", 1), ("y", 2)]);
        assert!(eq(&a, &b));
        assert!(!eq(&a, &c));
    }

    #[test]
    fn test_deep_equal() {
        assert!(deep_equal(&Value::slice(vec![1, 2, 3]), &Value::slice(vec![1, 2, 3])));
        assert!(!deep_equal(&Value::slice(vec![1, 2]), &Value::slice(vec![1, 2, 3])));
        assert!(!deep_equal(&Value::slice(vec![1i32]), &Value::slice(vec![1i64])));
        assert!(!deep_equal(
            &Value::nil_slice::<i32>(),
            &Value::slice(Vec::<i32>::new())
        ));
        assert!(deep_equal(
            &Value::slice(vec![vec![1u8], vec![2, 3]]),
            &Value::slice(vec![vec![1u8], vec![2, 3]])
        ));
        assert!(deep_equal(
            &Value::map(vec![("a", 1), ("b", 2)]),
            &Value::map(vec![("b", 2), ("a", 1)])
        ));
        assert!(!deep_equal(
            &Value::list(vec![Value::I32(1)]),
            &Value::list(vec![Value::I64(1)])
        ));
    }
}
