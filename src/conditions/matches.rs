use std::fmt;

use crate::cond::Condition;
use crate::error::AssertResult;
use crate::value::Value;

pub type Predicate = Box<dyn Fn(&Value) -> bool + Send>;

/// Met when the predicate accepts the subject.
pub struct Matches {
    predicate: Predicate,
}

impl Matches {
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches").finish_non_exhaustive()
    }
}

impl Condition for Matches {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        Ok((self.predicate)(v))
    }

    fn message(&self, v: &Value) -> String {
        format!("unexpected <{}>", v)
    }
}
