use tracing::warn;

use crate::cond::Condition;
use crate::equality::deep_equal;
use crate::error::{AssertResult, UsageError};
use crate::value::{render_pair, Value};

/// Met when the subject slice equals the expected slice.
///
/// A nil slice equals an empty one. Two non-nil slices are equal when
/// they have the same element type, the same length and pairwise
/// deep-equal elements. Anything that is neither nil nor a slice, and
/// two non-nil slices of different types, are usage errors.
#[derive(Debug, Clone)]
pub struct EqualsSlice {
    expected: Value,
}

impl EqualsSlice {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

fn check_sequence(v: &Value) -> Result<(), UsageError> {
    match v {
        Value::Nil | Value::Slice { .. } => Ok(()),
        other => {
            warn!(value = %other, ty = %other.value_type(), "slice condition applied to a non-slice");
            Err(UsageError::NotASlice {
                value: other.to_string(),
                ty: other.value_type(),
            })
        }
    }
}

impl Condition for EqualsSlice {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        check_sequence(v)?;
        check_sequence(&self.expected)?;

        match (v.is_nil(), self.expected.is_nil()) {
            (true, true) => Ok(true),
            (true, false) => Ok(self.expected.len() == Some(0)),
            (false, true) => Ok(v.len() == Some(0)),
            (false, false) => {
                let (left, right) = (v.value_type(), self.expected.value_type());
                if left != right {
                    warn!(%left, %right, "slice condition applied to slices of different types");
                    return Err(UsageError::SliceTypeMismatch { left, right }.into());
                }
                Ok(deep_equal(v, &self.expected))
            }
        }
    }

    fn message(&self, v: &Value) -> String {
        let (expected, actual) = render_pair(&self.expected, v);
        format!("expected <{}> but was <{}>", expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equal_slices() {
        let mut c = EqualsSlice::new(vec![1, 2, 3]);
        assert!(c.test(&Value::slice(vec![1, 2, 3])).unwrap());
    }

    #[test]
    fn test_unequal_slices() {
        let mut c = EqualsSlice::new(vec![1, 2]);
        let v = Value::slice(vec![1, 2, 3]);
        assert!(!c.test(&v).unwrap());
        assert_eq!(c.message(&v), "expected <[1 2]> but was <[1 2 3]>");
    }

    #[test]
    fn test_nil_equals_empty_both_ways() {
        let mut c = EqualsSlice::new(Value::nil_slice::<i32>());
        assert!(c.test(&Value::slice(Vec::<i32>::new())).unwrap());

        let mut c = EqualsSlice::new(Vec::<i32>::new());
        assert!(c.test(&Value::nil_slice::<i32>()).unwrap());

        let mut c = EqualsSlice::new(Value::Nil);
        assert!(c.test(&Value::slice(Vec::<i32>::new())).unwrap());
        assert!(c.test(&Value::Nil).unwrap());
        assert!(!c.test(&Value::slice(vec![1])).unwrap());

        let mut c = EqualsSlice::new(vec![1]);
        assert!(!c.test(&Value::nil_slice::<i32>()).unwrap());
    }

    #[test]
    fn test_not_a_slice_is_usage_error() {
        let mut c = EqualsSlice::new(vec![1]);
        let err = c.test(&Value::I32(1)).unwrap_err();
        assert!(matches!(err, Error::Usage(UsageError::NotASlice { .. })));

        let mut c = EqualsSlice::new(1);
        assert!(c.test(&Value::slice(vec![1])).unwrap_err().is_usage());

        let mut c = EqualsSlice::new(vec![1]);
        assert!(c.test(&Value::nil_pointer::<i32>()).unwrap_err().is_usage());
    }

    #[test]
    fn test_type_mismatch_is_usage_error() {
        let mut c = EqualsSlice::new(vec![1i32]);
        let err = c.test(&Value::slice(vec![1i64])).unwrap_err();
        assert!(matches!(
            err,
            Error::Usage(UsageError::SliceTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_nested_slices() {
        let mut c = EqualsSlice::new(vec![vec!["a"], vec!["b", "c"]]);
        assert!(c
            .test(&Value::slice(vec![vec!["a"], vec!["b", "c"]]))
            .unwrap());
        assert!(!c.test(&Value::slice(vec![vec!["a"], vec!["b"]])).unwrap());
    }
}
