use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing::{debug, warn};

use super::matches::Predicate;
use crate::cond::Condition;
use crate::equality::eq;
use crate::error::{AssertResult, UsageError};
use crate::value::{render_pair, Func, Value};

const DID_NOT_PANIC: &str = " (didn't panic?)";

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wraps the current panic hook so that panics raised inside a guarded
/// call on this thread are not printed. Other panics reach the previous
/// hook unchanged.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !GUARDED.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Result of running a callable inside a guarded scope.
#[derive(Debug, Clone)]
pub enum Outcome {
    Returned,
    Panicked(Value),
}

impl Outcome {
    /// The captured value; the nil literal when the call returned.
    pub fn into_captured(self) -> Value {
        match self {
            Outcome::Returned => Value::Nil,
            Outcome::Panicked(value) => value,
        }
    }
}

/// Runs `f` exactly once and always regains control, whether `f`
/// returns or unwinds. A captured panic is logged at debug level
/// instead of being printed by the panic hook.
pub fn invoke_guarded(f: &Func) -> Outcome {
    install_quiet_hook();
    let outer = GUARDED.with(|guarded| guarded.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(|| f.call()));
    GUARDED.with(|guarded| guarded.set(outer));

    match result {
        Ok(()) => Outcome::Returned,
        Err(payload) => {
            let value = Value::from_panic_payload(payload);
            debug!(captured = %value, "captured panic from guarded call");
            Outcome::Panicked(value)
        }
    }
}

fn callable(v: &Value) -> Result<&Func, UsageError> {
    match v {
        Value::Func(Some(f)) => Ok(f),
        other => {
            warn!(value = %other, ty = %other.value_type(), "panic condition applied to a non-callable");
            Err(UsageError::NotCallable {
                value: other.to_string(),
                ty: other.value_type(),
            })
        }
    }
}

fn did_not_panic(got: &Value) -> &'static str {
    if got.is_nil_literal() {
        DID_NOT_PANIC
    } else {
        ""
    }
}

/// Met when calling the subject panics with the expected value.
///
/// Holds the captured value between `test` and `message`, so one
/// instance must not be evaluated concurrently.
#[derive(Debug, Clone)]
pub struct Panics {
    expected: Value,
    got: Value,
}

impl Panics {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            got: Value::Nil,
        }
    }
}

impl Condition for Panics {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        let f = callable(v)?;
        self.got = invoke_guarded(f).into_captured();
        Ok(eq(&self.expected, &self.got))
    }

    fn message(&self, _v: &Value) -> String {
        let (expected, got) = render_pair(&self.expected, &self.got);
        format!(
            "expected to panic with <{}> but <{}>{}",
            expected,
            got,
            did_not_panic(&self.got)
        )
    }
}

/// Met when calling the subject panics with a value the predicate
/// accepts.
pub struct PanicMatches {
    predicate: Predicate,
    got: Value,
}

impl PanicMatches {
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            got: Value::Nil,
        }
    }
}

impl fmt::Debug for PanicMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicMatches")
            .field("got", &self.got)
            .finish_non_exhaustive()
    }
}

impl Condition for PanicMatches {
    fn test(&mut self, v: &Value) -> AssertResult<bool> {
        let f = callable(v)?;
        self.got = invoke_guarded(f).into_captured();
        Ok((self.predicate)(&self.got))
    }

    fn message(&self, _v: &Value) -> String {
        format!("unexpected panic <{}>{}", self.got, did_not_panic(&self.got))
    }
}
