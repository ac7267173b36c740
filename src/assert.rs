//! The evaluator: runs a [`Cond`] against a subject and reports failures.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::cond::Cond;
use crate::conditions::{equals, equals_slice, matches, not_equals, panic_matches, panics};
use crate::config::{default_config, AssertConfig};
use crate::deferred::Subject;
use crate::error::AssertResult;
use crate::reporter::{Reporter, Severity};
use crate::value::Value;

/// Evaluates assertions and forwards failures to a [`Reporter`].
///
/// Success is silent. A failure is reported once, as an abort when the
/// condition is fatal and as a continuing failure otherwise.
#[derive(Debug)]
pub struct Asserter<R: Reporter> {
    reporter: R,
    config: AssertConfig,
}

impl<R: Reporter> Asserter<R> {
    pub fn new(reporter: R) -> Self {
        Self::with_config(reporter, default_config().clone())
    }

    pub fn with_config(reporter: R, config: AssertConfig) -> Self {
        Self { reporter, config }
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Evaluates `cond` against `subject`.
    ///
    /// Returns whether the assertion passed. A usage fault in the test
    /// code is returned as `Err` and nothing is reported.
    pub fn try_assert(&mut self, subject: impl Into<Subject>, cond: Cond) -> AssertResult<bool> {
        match subject.into() {
            Subject::Value(v) => self.evaluate(&v, cond),
            Subject::Deferred(carrier) => {
                // The supplied condition is never consulted for a carrier.
                let mut synthetic = equals(Value::Nil).set_message(carrier.message);
                if carrier.fatal {
                    synthetic = synthetic.set_fatal();
                }
                self.evaluate(&Value::I32(0), synthetic)
            }
        }
    }

    /// Like [`Asserter::try_assert`], but a usage fault panics.
    pub fn assert(&mut self, subject: impl Into<Subject>, cond: Cond) -> bool {
        match self.try_assert(subject, cond) {
            Ok(passed) => passed,
            Err(e) => panic!("{}", e),
        }
    }

    fn evaluate(&mut self, v: &Value, mut cond: Cond) -> AssertResult<bool> {
        if cond.test(v)? {
            if self.config.trace_passes {
                trace!(value = %v, "assertion passed");
            }
            return Ok(true);
        }

        let message = cond.message(v);
        let severity = if cond.is_fatal() {
            Severity::Abort
        } else {
            Severity::Continue
        };
        debug!(%severity, %message, "assertion failed");
        match severity {
            Severity::Abort => self.reporter.report_abort(&message),
            Severity::Continue => self.reporter.report_continue(&message),
        }
        Ok(false)
    }

    pub fn assert_true(&mut self, condition: bool) -> bool {
        self.assert(condition, equals(true).set_message("unexpected false condition"))
    }

    pub fn assert_no_error<T, E: Display>(&mut self, result: &Result<T, E>) -> bool {
        match result {
            Ok(_) => self.assert(Value::Nil, equals(Value::Nil)),
            Err(e) => {
                let message = format!("unexpected error <{}>", e);
                self.assert(e.to_string(), equals(Value::Nil).set_message(message))
            }
        }
    }

    pub fn assert_equal(&mut self, v: impl Into<Subject>, expected: impl Into<Value>) -> bool {
        self.assert(v, equals(expected))
    }

    pub fn assert_not_equal(&mut self, v: impl Into<Subject>, unexpected: impl Into<Value>) -> bool {
        self.assert(v, not_equals(unexpected))
    }

    pub fn assert_equal_slice(&mut self, v: impl Into<Subject>, expected: impl Into<Value>) -> bool {
        self.assert(v, equals_slice(expected))
    }

    pub fn assert_match(
        &mut self,
        v: impl Into<Subject>,
        predicate: impl Fn(&Value) -> bool + Send + 'static,
    ) -> bool {
        self.assert(v, matches(predicate))
    }

    pub fn assert_panic(
        &mut self,
        f: impl Fn() + Send + Sync + 'static,
        expected: impl Into<Value>,
    ) -> bool {
        self.assert(Value::func(f), panics(expected))
    }

    pub fn assert_panic_match(
        &mut self,
        f: impl Fn() + Send + Sync + 'static,
        predicate: impl Fn(&Value) -> bool + Send + 'static,
    ) -> bool {
        self.assert(Value::func(f), panic_matches(predicate))
    }
}
