//! Value model for assertion subjects and expectations.
//!
//! Every value an assertion can talk about is a [`Value`], tagged with
//! its variant when it is built. Reference-like variants (slices, maps,
//! pointers, functions, channels, interfaces) carry an optional handle;
//! `None` is the nil sentinel of that kind.

mod convert;
mod format;
pub mod types;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::untyped::Untyped;

pub use convert::panic_with;
pub(crate) use format::render_pair;
pub use types::{Kind, Type, ValueType};

/// Zero-argument callable guarded by the panic conditions.
pub type Callable = Arc<dyn Fn() + Send + Sync>;

/// Complex number with real and imaginary parts of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl From<Complex<f32>> for Complex<f64> {
    fn from(c: Complex<f32>) -> Self {
        Complex::new(f64::from(c.re), f64::from(c.im))
    }
}

/// Callable stored in [`Value::Func`]; compared by identity.
#[derive(Clone)]
pub struct Func(Callable);

impl Func {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }

    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({:#x})", self.addr())
    }
}

#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The untyped nil literal.
    #[default]
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
    String(String),
    Slice {
        elem: Type,
        items: Option<Arc<[Value]>>,
    },
    Map {
        key: Type,
        value: Type,
        entries: Option<Arc<[(Value, Value)]>>,
    },
    Pointer {
        pointee: Type,
        addr: Option<usize>,
    },
    RawPointer(Option<usize>),
    Func(Option<Func>),
    Chan {
        elem: Type,
        handle: Option<usize>,
    },
    Interface {
        name: String,
        inner: Option<Box<Value>>,
    },
    Struct {
        name: String,
        fields: Vec<(String, Value)>,
    },
    Untyped(Untyped),
}

impl Value {
    pub fn value_type(&self) -> Type {
        match self {
            Value::Nil => Type::Nil,
            Value::Bool(_) => Type::Bool,
            Value::I8(_) => Type::I8,
            Value::I16(_) => Type::I16,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::Isize(_) => Type::Isize,
            Value::U8(_) => Type::U8,
            Value::U16(_) => Type::U16,
            Value::U32(_) => Type::U32,
            Value::U64(_) => Type::U64,
            Value::Usize(_) => Type::Usize,
            Value::F32(_) => Type::F32,
            Value::F64(_) => Type::F64,
            Value::C64(_) => Type::C64,
            Value::C128(_) => Type::C128,
            Value::String(_) => Type::String,
            Value::Slice { elem, .. } => Type::Slice(Box::new(elem.clone())),
            Value::Map { key, value, .. } => {
                Type::Map(Box::new(key.clone()), Box::new(value.clone()))
            }
            Value::Pointer { pointee, .. } => Type::Pointer(Box::new(pointee.clone())),
            Value::RawPointer(_) => Type::RawPointer,
            Value::Func(_) => Type::Func,
            Value::Chan { elem, .. } => Type::Chan(Box::new(elem.clone())),
            Value::Interface { name, .. } => Type::Interface(name.clone()),
            Value::Struct { name, .. } => Type::Struct(name.clone()),
            Value::Untyped(u) => Type::Untyped(u.kind()),
        }
    }

    pub fn kind(&self) -> Kind {
        self.value_type().kind()
    }

    /// True only for the untyped nil literal.
    pub fn is_nil_literal(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// True if the value is the nil literal or the nil sentinel of a
    /// nilable kind. Numbers, strings, booleans, structs and untyped
    /// constants are never nil. An interface is nil when it is empty or
    /// holds a nil value.
    pub fn is_nil(&self) -> bool {
        if !self.kind().is_nilable() {
            return false;
        }
        match self {
            Value::Nil => true,
            Value::Slice { items, .. } => items.is_none(),
            Value::Map { entries, .. } => entries.is_none(),
            Value::Pointer { addr, .. } => addr.is_none(),
            Value::RawPointer(addr) => addr.is_none(),
            Value::Func(f) => f.is_none(),
            Value::Chan { handle, .. } => handle.is_none(),
            Value::Interface { inner, .. } => inner.as_deref().map_or(true, Value::is_nil),
            _ => false,
        }
    }

    /// The value an interface holds, looking through nested interfaces.
    /// An empty interface is the nil literal; other values are returned
    /// as they are.
    pub fn dynamic(&self) -> &Value {
        static NIL: Value = Value::Nil;
        match self {
            Value::Interface { inner: Some(inner), .. } => inner.dynamic(),
            Value::Interface { inner: None, .. } => &NIL,
            other => other,
        }
    }

    /// Number of elements of a slice or map; zero for their nil forms.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Slice { items, .. } => Some(items.as_ref().map_or(0, |items| items.len())),
            Value::Map { entries, .. } => Some(entries.as_ref().map_or(0, |e| e.len())),
            Value::String(s) => Some(s.len()),
            _ => None,
        }
    }

    pub fn slice<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value> + ValueType,
    {
        Value::Slice {
            elem: T::value_type(),
            items: Some(items.into_iter().map(Into::<Value>::into).collect()),
        }
    }

    /// Heterogeneous sequence with element type `any`.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::slice(items)
    }

    pub fn nil_slice<T: ValueType>() -> Self {
        Value::Slice {
            elem: T::value_type(),
            items: None,
        }
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value> + ValueType,
        V: Into<Value> + ValueType,
    {
        Value::Map {
            key: K::value_type(),
            value: V::value_type(),
            entries: Some(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn nil_map<K: ValueType, V: ValueType>() -> Self {
        Value::Map {
            key: K::value_type(),
            value: V::value_type(),
            entries: None,
        }
    }

    /// Pointer to `target`, identified by its address.
    pub fn pointer<T: ValueType>(target: &T) -> Self {
        Value::Pointer {
            pointee: T::value_type(),
            addr: Some(target as *const T as usize),
        }
    }

    pub fn nil_pointer<T: ValueType>() -> Self {
        Value::Pointer {
            pointee: T::value_type(),
            addr: None,
        }
    }

    /// Raw pointer; a null pointer is the nil raw pointer.
    pub fn raw_pointer<T>(ptr: *const T) -> Self {
        if ptr.is_null() {
            Value::RawPointer(None)
        } else {
            Value::RawPointer(Some(ptr as *const () as usize))
        }
    }

    pub fn func(f: impl Fn() + Send + Sync + 'static) -> Self {
        Value::Func(Some(Func::new(f)))
    }

    pub fn nil_func() -> Self {
        Value::Func(None)
    }

    /// Channel carrying `T`, identified by the address of `channel`.
    pub fn chan<T: ValueType, C>(channel: &C) -> Self {
        Value::Chan {
            elem: T::value_type(),
            handle: Some(channel as *const C as usize),
        }
    }

    pub fn nil_chan<T: ValueType>() -> Self {
        Value::Chan {
            elem: T::value_type(),
            handle: None,
        }
    }

    pub fn interface(name: impl Into<String>, inner: impl Into<Value>) -> Self {
        Value::Interface {
            name: name.into(),
            inner: Some(Box::new(inner.into())),
        }
    }

    pub fn nil_interface(name: impl Into<String>) -> Self {
        Value::Interface {
            name: name.into(),
            inner: None,
        }
    }

    pub fn structure<S, V>(name: impl Into<String>, fields: impl IntoIterator<Item = (S, V)>) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        Value::Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}
