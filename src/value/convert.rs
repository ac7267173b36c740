use std::any::Any;

use super::{Complex, Value, ValueType};
use crate::untyped::Untyped;

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
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
    Untyped => Untyped,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value> + ValueType,
{
    fn from(items: Vec<T>) -> Self {
        Value::slice(items)
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value> + ValueType,
{
    fn from(items: &[T]) -> Self {
        Value::slice(items.iter().cloned())
    }
}

/// `None` is the nil slice of the element type.
impl<T> From<Option<Vec<T>>> for Value
where
    T: Into<Value> + ValueType,
{
    fn from(items: Option<Vec<T>>) -> Self {
        match items {
            Some(items) => Value::slice(items),
            None => Value::nil_slice::<T>(),
        }
    }
}

impl Value {
    /// Converts a payload caught from an unwinding panic.
    ///
    /// Payloads thrown with [`panic_with`] come back as the thrown
    /// value. Message payloads from `panic!` become strings.
    pub fn from_panic_payload(payload: Box<dyn Any + Send>) -> Value {
        let payload = match payload.downcast::<Value>() {
            Ok(value) => return *value,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Value::String(message.to_string()),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Value::String(*message),
            Err(payload) => payload,
        };

        macro_rules! downcast_primitive {
            ($payload:ident, $($ty:ty),*) => {
                $(
                    let $payload = match $payload.downcast::<$ty>() {
                        Ok(v) => return Value::from(*v),
                        Err(payload) => payload,
                    };
                )*
            };
        }
        downcast_primitive!(payload, i32, i64, u32, u64, usize, isize, i8, i16, u8, u16, f64, f32, bool);
        downcast_primitive!(payload, Untyped, Complex<f64>, Complex<f32>);

        drop(payload);
        Value::Struct {
            name: "Box<dyn Any + Send>".to_string(),
            fields: Vec::new(),
        }
    }
}

/// Panics with `value` as the payload, so a guarded call reports the
/// exact value rather than a formatted message.
pub fn panic_with(value: impl Into<Value>) -> ! {
    std::panic::panic_any(value.into())
}
