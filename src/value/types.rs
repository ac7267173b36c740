use std::fmt;

use super::{Complex, Value};
use crate::untyped::UntypedKind;

/// Coarse classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Nil,
    Bool,
    Signed,
    Unsigned,
    Float,
    Complex,
    String,
    Slice,
    Map,
    Pointer,
    RawPointer,
    Func,
    Chan,
    Interface,
    Struct,
    Untyped,
}

impl Kind {
    /// Kinds whose values may hold the nil sentinel.
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Nil
                | Kind::Slice
                | Kind::Map
                | Kind::Pointer
                | Kind::RawPointer
                | Kind::Func
                | Kind::Chan
                | Kind::Interface
        )
    }
}

/// Declared type of a [`Value`].
///
/// Two values with the same printed form but different `Type`s are
/// rendered with a type annotation in failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Nil,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    C64,
    C128,
    String,
    Slice(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Pointer(Box<Type>),
    RawPointer,
    Func,
    Chan(Box<Type>),
    Interface(String),
    Struct(String),
    Untyped(UntypedKind),
}

impl Type {
    pub fn kind(&self) -> Kind {
        match self {
            Type::Nil => Kind::Nil,
            Type::Bool => Kind::Bool,
            Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::Isize => Kind::Signed,
            Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::Usize => Kind::Unsigned,
            Type::F32 | Type::F64 => Kind::Float,
            Type::C64 | Type::C128 => Kind::Complex,
            Type::String => Kind::String,
            Type::Slice(_) => Kind::Slice,
            Type::Map(_, _) => Kind::Map,
            Type::Pointer(_) => Kind::Pointer,
            Type::RawPointer => Kind::RawPointer,
            Type::Func => Kind::Func,
            Type::Chan(_) => Kind::Chan,
            Type::Interface(_) => Kind::Interface,
            Type::Struct(_) => Kind::Struct,
            Type::Untyped(_) => Kind::Untyped,
        }
    }

    /// The `any` interface, element type of heterogeneous sequences.
    pub fn any() -> Self {
        Type::Interface("any".to_string())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nil => write!(f, "nil"),
            Type::Bool => write!(f, "bool"),
            Type::I8 => write!(f, "i8"),
            Type::I16 => write!(f, "i16"),
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::Isize => write!(f, "isize"),
            Type::U8 => write!(f, "u8"),
            Type::U16 => write!(f, "u16"),
            Type::U32 => write!(f, "u32"),
            Type::U64 => write!(f, "u64"),
            Type::Usize => write!(f, "usize"),
            Type::F32 => write!(f, "f32"),
            Type::F64 => write!(f, "f64"),
            Type::C64 => write!(f, "c64"),
            Type::C128 => write!(f, "c128"),
            Type::String => write!(f, "String"),
            Type::Slice(elem) => write!(f, "[{}]", elem),
            Type::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            Type::Pointer(pointee) => write!(f, "*{}", pointee),
            Type::RawPointer => write!(f, "*const ()"),
            Type::Func => write!(f, "fn()"),
            Type::Chan(elem) => write!(f, "chan<{}>", elem),
            Type::Interface(name) | Type::Struct(name) => write!(f, "{}", name),
            Type::Untyped(kind) => write!(f, "untyped {}", kind),
        }
    }
}

/// Static [`Type`] of a Rust type that converts into a [`Value`].
pub trait ValueType {
    fn value_type() -> Type;
}

macro_rules! impl_value_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ValueType for $ty {
                fn value_type() -> Type {
                    Type::$variant
                }
            }
        )*
    };
}

impl_value_type! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex<f32> => C64,
    Complex<f64> => C128,
    String => String,
}

impl ValueType for &str {
    fn value_type() -> Type {
        Type::String
    }
}

impl ValueType for Value {
    fn value_type() -> Type {
        Type::any()
    }
}

impl<T: ValueType> ValueType for Vec<T> {
    fn value_type() -> Type {
        Type::Slice(Box::new(T::value_type()))
    }
}
