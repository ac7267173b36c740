//! Folding a `Result` into a single assertion subject.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A failed `Result` standing in for the value it did not produce.
///
/// Asserting a `DeferredError` always fails with its message,
/// whatever condition is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredError {
    pub message: String,
    pub fatal: bool,
}

impl DeferredError {
    fn from_error<E: Display>(err: E, fatal: bool) -> Self {
        Self {
            message: format!("unexpected error <{}>", err),
            fatal,
        }
    }
}

/// What [`Asserter::assert`](crate::Asserter::assert) evaluates.
#[derive(Debug, Clone)]
pub enum Subject {
    Value(Value),
    Deferred(DeferredError),
}

impl<T: Into<Value>> From<T> for Subject {
    fn from(v: T) -> Self {
        Subject::Value(v.into())
    }
}

impl From<DeferredError> for Subject {
    fn from(err: DeferredError) -> Self {
        Subject::Deferred(err)
    }
}

/// `Ok(v)` asserts exactly like `v`; `Err(e)` fails any condition
/// with `unexpected error <e>`.
pub fn value_error<T, E>(result: Result<T, E>) -> Subject
where
    T: Into<Value>,
    E: Display,
{
    match result {
        Ok(v) => Subject::Value(v.into()),
        Err(err) => Subject::Deferred(DeferredError::from_error(err, false)),
    }
}

/// Like [`value_error`], but an `Err` aborts the current test.
pub fn value_error_fatal<T, E>(result: Result<T, E>) -> Subject
where
    T: Into<Value>,
    E: Display,
{
    match result {
        Ok(v) => Subject::Value(v.into()),
        Err(err) => Subject::Deferred(DeferredError::from_error(err, true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_value_through() {
        match value_error("1".parse::<i32>()) {
            Subject::Value(Value::I32(1)) => {}
            other => panic!("unexpected subject {:?}", other),
        }
    }

    #[test]
    fn test_err_becomes_carrier() {
        match value_error::<i32, _>(Err("error")) {
            Subject::Deferred(carrier) => {
                assert_eq!(carrier.message, "unexpected error <error>");
                assert!(!carrier.fatal);
            }
            other => panic!("unexpected subject {:?}", other),
        }

        match value_error_fatal::<i32, _>(Err("error")) {
            Subject::Deferred(carrier) => assert!(carrier.fatal),
            other => panic!("unexpected subject {:?}", other),
        }
    }

    #[test]
    fn test_carrier_serializes() {
        let carrier = DeferredError {
            message: "unexpected error <x>".to_string(),
            fatal: true,
        };
        let json = serde_json::to_string(&carrier).unwrap();
        let back: DeferredError = serde_json::from_str(&json).unwrap();
        assert_eq!(carrier, back);
    }
}
