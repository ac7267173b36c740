use std::fmt::{self, Display};

use super::{Complex, Value};

impl<T: Display + Copy + PartialOrd + Default> Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < T::default() { "" } else { "+" };
        write!(f, "({}{}{}i)", self.re, sign, self.im)
    }
}

fn write_handle(f: &mut fmt::Formatter<'_>, handle: Option<usize>) -> fmt::Result {
    match handle {
        Some(addr) => write!(f, "{:#x}", addr),
        None => write!(f, "<nil>"),
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Renders values the way failure messages show them: `[1 2 3]` for
/// slices, `map[k:v]` for maps, `<nil>` for nil handles and the nil
/// literal, `{a b}` for structs.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::Isize(n) => write!(f, "{}", n),
            Value::U8(n) => write!(f, "{}", n),
            Value::U16(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::Usize(n) => write!(f, "{}", n),
            Value::F32(x) => write!(f, "{}", x),
            Value::F64(x) => write!(f, "{}", x),
            Value::C64(c) => write!(f, "{}", c),
            Value::C128(c) => write!(f, "{}", c),
            Value::String(s) => write!(f, "{}", s),
            Value::Slice { items, .. } => {
                write!(f, "[")?;
                if let Some(items) = items {
                    write_joined(f, items.iter())?;
                }
                write!(f, "]")
            }
            Value::Map { entries, .. } => {
                write!(f, "map[")?;
                if let Some(entries) = entries {
                    for (i, (key, value)) in entries.iter().enumerate() {
                        if i > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}:{}", key, value)?;
                    }
                }
                write!(f, "]")
            }
            Value::Pointer { addr, .. } => write_handle(f, *addr),
            Value::RawPointer(addr) => write_handle(f, *addr),
            Value::Func(func) => write_handle(f, func.as_ref().map(|func| func.addr())),
            Value::Chan { handle, .. } => write_handle(f, *handle),
            Value::Interface { inner, .. } => match inner {
                Some(inner) => write!(f, "{}", inner),
                None => write!(f, "<nil>"),
            },
            Value::Struct { fields, .. } => {
                write!(f, "{{")?;
                write_joined(f, fields.iter().map(|(_, value)| value))?;
                write!(f, "}}")
            }
            Value::Untyped(u) => write!(f, "{}", u),
        }
    }
}

/// Renders two values for a failure message. When both print the same
/// but are not the same value, each is annotated with its type so the
/// message tells them apart.
pub(crate) fn render_pair(expected: &Value, actual: &Value) -> (String, String) {
    let left = expected.to_string();
    let right = actual.to_string();
    if left == right {
        (
            format!("{}({})", left, expected.value_type()),
            format!("{}({})", right, actual.value_type()),
        )
    } else {
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::I64(-3).to_string(), "-3");
        assert_eq!(Value::F32(-100.0).to_string(), "-100");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Nil.to_string(), "<nil>");
    }

    #[test]
    fn test_display_complex() {
        assert_eq!(Value::C128(Complex::new(1.0, 2.0)).to_string(), "(1+2i)");
        assert_eq!(Value::C64(Complex::new(1.0, -2.0)).to_string(), "(1-2i)");
    }

    #[test]
    fn test_display_containers() {
        assert_eq!(Value::slice(vec![1, 2, 3]).to_string(), "[1 2 3]");
        assert_eq!(Value::nil_slice::<i32>().to_string(), "[]");
        assert_eq!(Value::map(vec![("a", 1)]).to_string(), "map[a:1]");
        assert_eq!(Value::nil_map::<i32, i32>().to_string(), "map[]");
        assert_eq!(Value::nil_pointer::<i32>().to_string(), "<nil>");
        assert_eq!(Value::nil_func().to_string(), "<nil>");
        assert_eq!(
            Value::structure("Point", vec![("x", 1), ("y", 2)]).to_string(),
            "{1 2}"
        );
    }

    #[test]
    fn test_render_pair_annotates_identical_forms() {
        let (left, right) = render_pair(&Value::nil_pointer::<u8>(), &Value::nil_pointer::<i64>());
        assert_eq!(left, "<nil>(*u8)");
        assert_eq!(right, "<nil>(*i64)");

        let (left, right) = render_pair(&Value::I32(2), &Value::I32(1));
        assert_eq!(left, "2");
        assert_eq!(right, "1");
    }
}
