//! Assertion conditions and the wrapper handed to the evaluator.

use std::fmt;

use crate::error::AssertResult;
use crate::value::Value;

/// A test predicate together with its failure message.
pub trait Condition: Send {
    /// Returns whether `v` meets the condition.
    ///
    /// An `Err` is a usage fault in the test code, not a failed check.
    fn test(&mut self, v: &Value) -> AssertResult<bool>;

    /// Describes why `v` failed. Only called after `test` returned
    /// `Ok(false)`.
    fn message(&self, v: &Value) -> String;
}

enum MessageOverride {
    Text(String),
    Lazy(Box<dyn FnOnce() -> String + Send>),
}

/// A [`Condition`] with an optional custom failure message and a
/// severity.
///
/// Failures are reported as continuing unless [`Cond::set_fatal`] was
/// called.
pub struct Cond {
    condition: Box<dyn Condition>,
    user_message: Option<MessageOverride>,
    fatal: bool,
}

impl Cond {
    pub fn new(condition: impl Condition + 'static) -> Self {
        Self {
            condition: Box::new(condition),
            user_message: None,
            fatal: false,
        }
    }

    /// Replaces the default failure message, dropping any generator set
    /// with [`Cond::set_message_fn`].
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(MessageOverride::Text(message.into()));
        self
    }

    /// Sets a generator for the failure message, replacing any text set
    /// with [`Cond::set_message`]. The generator runs at most once, and
    /// only if the assertion fails.
    pub fn set_message_fn(mut self, f: impl FnOnce() -> String + Send + 'static) -> Self {
        self.user_message = Some(MessageOverride::Lazy(Box::new(f)));
        self
    }

    /// Reports failures as aborting the current test.
    pub fn set_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn test(&mut self, v: &Value) -> AssertResult<bool> {
        self.condition.test(v)
    }

    /// Resolves the failure message: the user message if one was set,
    /// otherwise the condition's own.
    pub fn message(&mut self, v: &Value) -> String {
        match self.user_message.take() {
            Some(MessageOverride::Text(text)) => {
                self.user_message = Some(MessageOverride::Text(text.clone()));
                text
            }
            Some(MessageOverride::Lazy(f)) => {
                let text = f();
                self.user_message = Some(MessageOverride::Text(text.clone()));
                text
            }
            None => self.condition.message(v),
        }
    }
}

impl fmt::Debug for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cond")
            .field("has_user_message", &self.user_message.is_some())
            .field("fatal", &self.fatal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct IsPositive;

    impl Condition for IsPositive {
        fn test(&mut self, v: &Value) -> AssertResult<bool> {
            Ok(matches!(v, Value::I32(n) if *n > 0))
        }

        fn message(&self, v: &Value) -> String {
            format!("not positive <{}>", v)
        }
    }

    #[test]
    fn test_default_message_and_severity() {
        let mut c = Cond::new(IsPositive);
        assert!(!c.is_fatal());
        assert!(c.test(&Value::I32(1)).unwrap());
        assert!(!c.test(&Value::I32(-1)).unwrap());
        assert_eq!(c.message(&Value::I32(-1)), "not positive <-1>");
    }

    #[test]
    fn test_set_message_overrides() {
        let mut c = Cond::new(IsPositive).set_message("custom");
        assert_eq!(c.message(&Value::I32(-1)), "custom");
        assert_eq!(c.message(&Value::I32(-2)), "custom");
    }

    #[test]
    fn test_last_override_wins() {
        let mut c = Cond::new(IsPositive)
            .set_message("text")
            .set_message_fn(|| "lazy".to_string());
        assert_eq!(c.message(&Value::I32(-1)), "lazy");

        let mut c = Cond::new(IsPositive)
            .set_message_fn(|| "lazy".to_string())
            .set_message("text");
        assert_eq!(c.message(&Value::I32(-1)), "text");
    }

    #[test]
    fn test_message_fn_is_lazy_and_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut c = Cond::new(IsPositive).set_message_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "generated".to_string()
        });

        assert!(c.test(&Value::I32(1)).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(c.message(&Value::I32(-1)), "generated");
        assert_eq!(c.message(&Value::I32(-1)), "generated");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_fatal() {
        let c = Cond::new(IsPositive).set_fatal();
        assert!(c.is_fatal());
    }
}
