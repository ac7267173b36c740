//! Untyped constants.
//!
//! An untyped constant stands in for a literal written without a
//! concrete width or signedness. It compares equal to any concrete
//! value of a compatible kind holding exactly the same mathematical
//! value: `untyped_int(100)` equals `100u8`, `100i16` and `100.0f32`.

use std::fmt;

use crate::value::{Complex, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum UntypedKind {
    Int,
    Uint,
    Float,
    String,
    Complex,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Untyped {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Complex(Complex<f64>),
}

/// Cross-kind comparison against a concrete value.
///
/// Only untyped constants implement this; every other comparison in
/// the crate is exact.
pub trait ApproximatelyEquals {
    fn approximately_equals(&self, other: &Value) -> bool;
}

/// Numeric or textual reading of a value, widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operand<'a> {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Str(&'a str),
    Complex(Complex<f64>),
    Other,
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::I8(n) => Operand::Signed(i64::from(*n)),
            Value::I16(n) => Operand::Signed(i64::from(*n)),
            Value::I32(n) => Operand::Signed(i64::from(*n)),
            Value::I64(n) => Operand::Signed(*n),
            Value::Isize(n) => Operand::Signed(*n as i64),
            Value::U8(n) => Operand::Unsigned(u64::from(*n)),
            Value::U16(n) => Operand::Unsigned(u64::from(*n)),
            Value::U32(n) => Operand::Unsigned(u64::from(*n)),
            Value::U64(n) => Operand::Unsigned(*n),
            Value::Usize(n) => Operand::Unsigned(*n as u64),
            Value::F32(x) => Operand::Float(f64::from(*x)),
            Value::F64(x) => Operand::Float(*x),
            Value::C64(c) => Operand::Complex((*c).into()),
            Value::C128(c) => Operand::Complex(*c),
            Value::String(s) => Operand::Str(s),
            Value::Untyped(u) => match u {
                Untyped::Int(n) => Operand::Signed(*n),
                Untyped::Uint(n) => Operand::Unsigned(*n),
                Untyped::Float(x) => Operand::Float(*x),
                Untyped::String(s) => Operand::Str(s),
                Untyped::Complex(c) => Operand::Complex(*c),
            },
            _ => Operand::Other,
        }
    }
}

/// True if `x` is exactly the integer `n`.
fn float_is_integer(x: f64, n: i128) -> bool {
    x.is_finite() && x.fract() == 0.0 && x as i128 == n
}

impl Untyped {
    pub fn kind(&self) -> UntypedKind {
        match self {
            Untyped::Int(_) => UntypedKind::Int,
            Untyped::Uint(_) => UntypedKind::Uint,
            Untyped::Float(_) => UntypedKind::Float,
            Untyped::String(_) => UntypedKind::String,
            Untyped::Complex(_) => UntypedKind::Complex,
        }
    }
}

impl ApproximatelyEquals for Untyped {
    fn approximately_equals(&self, other: &Value) -> bool {
        let other = Operand::from(other);
        match self {
            Untyped::Int(n) => match other {
                Operand::Signed(r) => *n == r,
                // A negative constant never equals an unsigned value.
                Operand::Unsigned(r) => *n >= 0 && *n as u64 == r,
                Operand::Float(r) => float_is_integer(r, i128::from(*n)),
                _ => false,
            },
            Untyped::Uint(n) => match other {
                Operand::Unsigned(r) => *n == r,
                Operand::Signed(r) => r >= 0 && *n == r as u64,
                Operand::Float(r) => float_is_integer(r, i128::from(*n)),
                _ => false,
            },
            Untyped::Float(x) => match other {
                Operand::Float(r) => *x == r,
                _ => false,
            },
            Untyped::String(s) => match other {
                Operand::Str(r) => s == r,
                _ => false,
            },
            Untyped::Complex(c) => match other {
                Operand::Complex(r) => c.re == r.re && c.im == r.im,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Untyped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Untyped::Int(n) => write!(f, "{}", n),
            Untyped::Uint(n) => write!(f, "{}", n),
            Untyped::Float(x) => write!(f, "{}", x),
            Untyped::String(s) => write!(f, "{}", s),
            Untyped::Complex(c) => write!(f, "{}", c),
        }
    }
}

/// Untyped integer constant.
pub fn untyped_int(n: i64) -> Value {
    Value::Untyped(Untyped::Int(n))
}

/// Untyped unsigned integer constant.
pub fn untyped_uint(n: u64) -> Value {
    Value::Untyped(Untyped::Uint(n))
}

/// Untyped floating point constant; equal only to `f32`/`f64` values
/// with exactly the same value.
pub fn untyped_float(x: f64) -> Value {
    Value::Untyped(Untyped::Float(x))
}

pub fn untyped_string(s: impl Into<String>) -> Value {
    Value::Untyped(Untyped::String(s.into()))
}

pub fn untyped_complex(re: f64, im: f64) -> Value {
    Value::Untyped(Untyped::Complex(Complex::new(re, im)))
}
