//! # asserting: condition-based test assertions
//!
//! Assertions are built from small condition objects evaluated against a
//! subject value. Failures go to a host [`Reporter`] either as continuing
//! failures or as aborts that end the current test.
//!
//! ## Building Blocks
//!
//! ### 1. Values
//! Subjects and expectations are [`Value`]s ([`value`]): concrete scalars,
//! nilable handles (slices, maps, pointers, funcs, channels, interfaces),
//! structs, and [`untyped`] constants that compare equal to any concrete
//! number or string with the same value.
//!
//! ### 2. Equality
//! [`eq`] ([`equality`]) checks identity first, then the nil rule, then
//! delegates to an untyped operand if there is one.
//!
//! ### 3. Conditions
//! Each built-in constructor in [`conditions`] returns a [`Cond`] ([`cond`])
//! that can carry a custom message and a fatal flag.
//!
//! ### 4. Evaluation
//! [`Asserter`] ([`assert`]) runs a condition, resolves the failure message
//! and dispatches it. A [`Result`] can be folded into one subject with
//! [`value_error`] ([`deferred`]).
//!
//! ## Pipeline
//!
//! ```text
//! Condition → Cond (message, severity) → Asserter → Reporter
//! ```
//!
//! ## Example
//!
//! ```
//! use asserting::{equals, untyped_int, Asserter, RecordingReporter};
//!
//! let mut a = Asserter::new(RecordingReporter::new());
//! a.assert(100u8, equals(untyped_int(100)));
//! a.assert(1, equals(2));
//! assert_eq!(a.reporter().continued(), vec!["expected <2> but was <1>"]);
//! ```

pub mod assert;
pub mod cond;
pub mod conditions;
pub mod config;
pub mod deferred;
pub mod equality;
pub mod error;
pub mod reporter;
pub mod untyped;
pub mod value;

pub use assert::Asserter;
pub use cond::{Cond, Condition};
pub use conditions::{equals, equals_slice, matches, not_equals, panic_matches, panics};
pub use config::{AssertConfig, HarnessConfig};
pub use deferred::{value_error, value_error_fatal, DeferredError, Subject};
pub use equality::{eq, equals_nil};
pub use error::{AssertResult, Error, UsageError};
pub use reporter::{Failure, HarnessReporter, RecordingReporter, Reporter, Severity};
pub use untyped::{
    untyped_complex, untyped_float, untyped_int, untyped_string, untyped_uint,
    ApproximatelyEquals, Untyped,
};
pub use value::{panic_with, Complex, Func, Kind, Type, Value, ValueType};

#[cfg(test)]
#[ctor::ctor]
fn init_tests() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
