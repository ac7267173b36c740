//! Failure sinks the evaluator reports to.
//!
//! The host test framework owns reporting. [`Reporter`] is the seam;
//! [`RecordingReporter`] keeps failures in memory and
//! [`HarnessReporter`] maps them onto the standard test harness.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::{default_config, HarnessConfig};

/// Two-level failure sink.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Records a failure; the test keeps running.
    fn report_continue(&mut self, message: &str);

    /// Records a failure and stops the current test. Nothing after this
    /// call in the same test may observe further effects of that test.
    fn report_abort(&mut self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report_continue(&mut self, message: &str) {
        (**self).report_continue(message)
    }

    fn report_abort(&mut self, message: &str) {
        (**self).report_abort(message)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Continue,
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub severity: Severity,
    pub message: String,
}

/// Keeps every failure in memory.
///
/// Once an abort has been recorded the test is considered halted and
/// later reports are ignored.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    failures: Vec<Failure>,
    aborted: bool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.failures
            .iter()
            .filter(|failure| failure.severity == severity)
            .map(|failure| failure.message.as_str())
            .collect()
    }

    pub fn continued(&self) -> Vec<&str> {
        self.messages(Severity::Continue)
    }

    pub fn aborted(&self) -> Vec<&str> {
        self.messages(Severity::Abort)
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn has_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Forgets recorded failures and the halted state.
    pub fn clear(&mut self) {
        self.failures.clear();
        self.aborted = false;
    }

    fn record(&mut self, severity: Severity, message: &str) {
        if self.aborted {
            return;
        }
        self.failures.push(Failure {
            severity,
            message: message.to_string(),
        });
        if severity == Severity::Abort {
            self.aborted = true;
        }
    }
}

impl Reporter for RecordingReporter {
    fn report_continue(&mut self, message: &str) {
        self.record(Severity::Continue, message);
    }

    fn report_abort(&mut self, message: &str) {
        self.record(Severity::Abort, message);
    }
}

/// Reporter for tests run by the standard `cargo test` harness.
///
/// An abort panics with the failure message, which ends the test. A
/// continuing failure is logged and counted; when the reporter is
/// dropped at the end of the test it panics if any were counted.
#[derive(Debug, Default)]
pub struct HarnessReporter {
    config: HarnessConfig,
    failed: usize,
}

impl HarnessReporter {
    /// Uses the harness section of the process-wide configuration.
    pub fn new() -> Self {
        Self::with_config(default_config().harness.clone())
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        Self { config, failed: 0 }
    }

    /// Number of continuing failures reported so far.
    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl Reporter for HarnessReporter {
    fn report_continue(&mut self, message: &str) {
        self.failed += 1;
        if self.config.log_failures {
            error!(severity = %Severity::Continue, "{}", message);
        }
    }

    fn report_abort(&mut self, message: &str) {
        if self.config.log_failures {
            error!(severity = %Severity::Abort, "{}", message);
        }
        panic!("{}", message);
    }
}

impl Drop for HarnessReporter {
    fn drop(&mut self) {
        if self.failed > 0 && self.config.fail_on_drop && !std::thread::panicking() {
            panic!("{} assertion(s) failed", self.failed);
        }
    }
}
