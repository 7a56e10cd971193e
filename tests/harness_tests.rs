mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use attest::{assert, assert_with, check, check_with, comment, equals, StdTester, Tester};
use common::{assert_contains, Recorder};

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        panic!("panic payload is not a string")
    }
}

#[test]
fn assert_is_fatal_and_check_is_not() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, 42, equals(47)));
    assert_eq!(t.fatals.len(), 1);
    assert!(t.failures.is_empty());

    let mut t = Recorder::new();
    assert!(!check(&mut t, 42, equals(47)));
    assert_eq!(t.failures.len(), 1);
    assert!(t.fatals.is_empty());
}

#[test]
fn passing_checks_touch_nothing() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, 42, equals(42)));
    assert!(check(&mut t, 42, equals(42)));
    assert!(t.is_clean());
}

#[test]
fn check_keeps_recording_after_a_failure() {
    let mut t = Recorder::new();
    check(&mut t, 1, equals(2));
    check(&mut t, 3, equals(4));
    assert_eq!(t.failures.len(), 2);
}

#[test]
fn comment_variants_include_the_comment() {
    let mut t = Recorder::new();
    assert_with(&mut t, 1, equals(2), comment!("first {}", "case"));
    check_with(&mut t, 3, equals(4), comment!("second case"));
    assert_contains(t.fatals[0].as_str(), "comment:\n  first case");
    assert_contains(t.failures[0].as_str(), "comment:\n  second case");
}

#[test]
fn std_tester_panics_on_fatal_failures() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut t = StdTester::new();
        assert(&mut t, 42, equals(47));
    }));
    let message = panic_message(outcome.unwrap_err());
    assert_contains(&message, "values are not equal");
}

#[test]
fn std_tester_fails_the_test_for_non_fatal_failures() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut t = StdTester::new();
        check(&mut t, 42, equals(47));
        check(&mut t, 1, equals(2));
    }));
    let message = panic_message(outcome.unwrap_err());
    assert_contains(&message, "2 non-fatal check failure(s)");
}

#[test]
fn std_tester_drops_quietly_when_clean() {
    let mut t = StdTester::new();
    assert!(check(&mut t, 42, equals(42)));
}

#[test]
fn custom_testers_receive_the_rendered_report() {
    struct Collector(Vec<String>);

    impl Tester for Collector {
        fn fail_now(&mut self, report: &str) {
            self.0.push(report.to_string());
        }

        fn fail(&mut self, report: &str) {
            self.0.push(report.to_string());
        }
    }

    let mut t = Collector(Vec::new());
    assert(&mut t, "left", equals("right"));
    check(&mut t, 1, equals(2));
    assert_eq!(t.0.len(), 2);
    assert_contains(&t.0[0], "want:\n  \"right\"");
}
