mod common;

use asserting::{equals, not_equals, Asserter, HarnessConfig, HarnessReporter};

#[test]
fn test_passing_assertions_do_not_fail() {
    let mut t = Asserter::new(HarnessReporter::new());
    t.assert(1, equals(1));
    t.assert_true(true);
    assert_eq!(t.reporter().failed(), 0);
}

#[test]
#[should_panic(expected = "expected <2> but was <1>")]
fn test_fatal_failure_ends_test() {
    let mut t = Asserter::new(HarnessReporter::new());
    t.assert(1, equals(2).set_fatal());
    unreachable!("a fatal failure must not return");
}

#[test]
#[should_panic(expected = "2 assertion(s) failed")]
fn test_continuing_failures_fail_at_end() {
    let mut t = Asserter::new(HarnessReporter::new());
    t.assert(1, equals(2));
    t.assert(1, not_equals(1));
    assert_eq!(t.reporter().failed(), 2);
}

#[test]
fn test_fail_on_drop_disabled() {
    let reporter = HarnessReporter::with_config(HarnessConfig {
        fail_on_drop: false,
        log_failures: true,
    });
    let mut t = Asserter::new(reporter);
    t.assert(1, equals(2));
    assert_eq!(t.into_reporter().failed(), 1);
}
