//! Built-in conditions.
//!
//! Each constructor returns a fresh [`Cond`] that can be customized
//! before it is handed to [`Asserter::assert`](crate::Asserter::assert).

mod equals;
mod matches;
mod panics;
mod slice;

pub use equals::{Equals, NotEquals};
pub use matches::{Matches, Predicate};
pub use panics::{invoke_guarded, Outcome, PanicMatches, Panics};
pub use slice::EqualsSlice;

use crate::cond::Cond;
use crate::value::Value;

/// True if the subject equals `expected`.
pub fn equals(expected: impl Into<Value>) -> Cond {
    Cond::new(Equals::new(expected))
}

/// True if the subject does not equal `unexpected`.
pub fn not_equals(unexpected: impl Into<Value>) -> Cond {
    Cond::new(NotEquals::new(unexpected))
}

/// True if `predicate` accepts the subject.
pub fn matches(predicate: impl Fn(&Value) -> bool + Send + 'static) -> Cond {
    Cond::new(Matches::new(predicate))
}

/// True if calling the subject panics with `expected`.
///
/// The subject must be a non-nil [`Value::Func`].
pub fn panics(expected: impl Into<Value>) -> Cond {
    Cond::new(Panics::new(expected))
}

/// True if calling the subject panics with a value `predicate` accepts.
pub fn panic_matches(predicate: impl Fn(&Value) -> bool + Send + 'static) -> Cond {
    Cond::new(PanicMatches::new(predicate))
}

/// True if the subject slice equals `expected`; see [`EqualsSlice`].
pub fn equals_slice(expected: impl Into<Value>) -> Cond {
    Cond::new(EqualsSlice::new(expected))
}
