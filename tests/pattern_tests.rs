mod common;

use attest::{assert, error_matches, matches, not, panic_matches};
use common::{assert_contains, Recorder};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("code {0}")]
struct CodeError(i32);

#[test]
fn matches_accepts_matching_strings() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, "these are the voyages", matches("these are .*")));
    assert!(t.is_clean());
}

#[test]
fn matches_is_anchored_at_both_ends() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, "the voyages end", matches("voyages")));
    let report = t.report();
    assert_contains(report, "error:\n  value does not match regexp");
    assert_contains(report, "got value:\n  \"the voyages end\"");
    assert_contains(report, "regexp:\n  \"voyages\"");
}

#[test]
fn matches_accepts_precompiled_patterns() {
    let mut t = Recorder::new();
    let pattern = Regex::new("these are .*").unwrap();
    assert!(assert(&mut t, "these are the voyages", matches(pattern)));
    assert!(t.is_clean());
}

#[test]
fn invalid_pattern_is_a_bad_check() {
    let mut t = Recorder::new();
    assert(&mut t, "x", matches("("));
    let report = t.report();
    assert_contains(report, "bad check: cannot compile regexp");
    assert_contains(report, "regexp:\n  \"(\"");
}

#[test]
fn negation_does_not_mask_an_invalid_pattern() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, "x", not(matches("("))));
    assert_contains(t.report(), "bad check: cannot compile regexp");
}

#[test]
fn error_matches_checks_the_error_message() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, Some(CodeError(3)), error_matches("code .*")));
    assert(&mut t, Some(CodeError(3)), error_matches("status .*"));
    let report = t.report();
    assert_contains(report, "error:\n  error does not match regexp");
    assert_contains(report, "got error:\n  e\"code 3\"");
}

#[test]
fn error_matches_requires_an_error() {
    let mut t = Recorder::new();
    assert(&mut t, None::<CodeError>, error_matches("code .*"));
    assert_contains(t.report(), "error:\n  got nil error but want non-nil");
}

#[test]
fn error_matches_accepts_result_subjects() {
    let mut t = Recorder::new();
    let failing: Result<i32, CodeError> = Err(CodeError(3));
    assert!(assert(&mut t, failing, error_matches("code 3")));

    let succeeding: Result<i32, CodeError> = Ok(5);
    assert(&mut t, succeeding, error_matches("code .*"));
    assert_contains(t.report(), "error:\n  got nil error but want non-nil");
}

#[test]
fn panic_matches_checks_the_panic_message() {
    let mut t = Recorder::new();
    assert!(assert(
        &mut t,
        || panic!("bad wolf {}", 42),
        panic_matches("bad wolf .*")
    ));
    assert!(t.is_clean());
}

#[test]
fn panic_matches_notes_the_recovered_value() {
    let mut t = Recorder::new();
    assert(&mut t, || panic!("bad wolf"), panic_matches("good wolf"));
    let report = t.report();
    assert_contains(report, "error:\n  panic value does not match regexp");
    assert_contains(report, "panic value:\n  \"bad wolf\"");
    assert_contains(report, "function:\n  <function>");
}

#[test]
fn panic_matches_requires_a_panic() {
    let mut t = Recorder::new();
    assert(&mut t, || {}, panic_matches("bad wolf"));
    assert_contains(t.report(), "error:\n  function did not panic");
}
