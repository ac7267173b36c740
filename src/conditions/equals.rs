use crate::cond::Condition;
use crate::equality::eq;
use crate::error::AssertResult;
use crate::value::{render_pair, Value};

/// Met when the subject equals the expected value under [`eq`].
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Condition for Equals {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        Ok(eq(&self.expected, v))
    }

    fn message(&self, v: &Value) -> String {
        let (expected, actual) = render_pair(&self.expected, v);
        format!("expected <{}> but was <{}>", expected, actual)
    }
}

/// Met when the subject does not equal the given value.
#[derive(Debug, Clone)]
pub struct NotEquals {
    unexpected: Value,
}

impl NotEquals {
    pub fn new(unexpected: impl Into<Value>) -> Self {
        Self {
            unexpected: unexpected.into(),
        }
    }
}

impl Condition for NotEquals {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        Ok(!eq(&self.unexpected, v))
    }

    fn message(&self, v: &Value) -> String {
        format!("unexpected <{}>", v)
    }
}
