mod common;

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use attest::report::render;
use attest::{
    assert, assert_with, comment, equals, set_verbose, verbose, Arg, CheckError, Comment, Note,
    ReportParams,
};
use common::{assert_contains, assert_lacks, Recorder};

fn note(key: &str, value: &str) -> Note {
    Note {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn report_fields_appear_in_contract_order() {
    let mut t = Recorder::new();
    assert_with(&mut t, 42, equals(47), comment!("checking {}", "the answer"));
    let report = t.report();
    assert_contains(report, "comment:\n  checking the answer");
    let error = report.find("error:").unwrap();
    let comment = report.find("\ncomment:").unwrap();
    let got = report.find("\ngot:").unwrap();
    let want = report.find("\nwant:").unwrap();
    let stack = report.find("\nstack:").unwrap();
    assert!(error < comment && comment < got && got < want && want < stack);
}

#[test]
fn reports_start_with_a_newline() {
    let mut t = Recorder::new();
    assert(&mut t, 42, equals(47));
    assert!(t.report().starts_with("\nerror:\n"));
}

#[test]
fn identical_values_are_elided() {
    // NaN compares unequal to itself while rendering identically.
    let mut t = Recorder::new();
    assert(&mut t, f64::NAN, equals(f64::NAN));
    let report = t.report();
    assert_contains(report, "got:\n  f64(NaN)");
    assert_contains(report, "want:\n  <same as \"got\">");
}

#[test]
fn elision_compares_against_notes_too() {
    let report = render(&ReportParams {
        error: &CheckError::failed("boom"),
        comment: None,
        notes: &[note("recovered", "\"x\"")],
        args: &[Arg::new("got", "\"x\""), Arg::new("want", "\"x\"")],
        location: Location::caller(),
    });
    assert_contains(&report, "recovered:\n  \"x\"");
    assert_contains(&report, "got:\n  <same as \"recovered\">");
    assert_contains(&report, "want:\n  <same as \"recovered\">");
}

#[test]
fn bad_checks_carry_a_prefix() {
    let report = render(&ReportParams {
        error: &CheckError::bad_check("oops"),
        comment: None,
        notes: &[],
        args: &[],
        location: Location::caller(),
    });
    assert_contains(&report, "error:\n  bad check: oops");
}

#[test]
fn silent_errors_suppress_error_and_args() {
    let report = render(&ReportParams {
        error: &CheckError::silent(),
        comment: None,
        notes: &[note("extra", "detail")],
        args: &[Arg::new("got", "i32(42)")],
        location: Location::caller(),
    });
    assert!(report.starts_with("\nextra:\n  detail\n"));
    assert_lacks(&report, "error:");
    assert_lacks(&report, "got:");
}

#[test]
fn empty_comments_are_omitted() {
    let mut t = Recorder::new();
    assert_with(&mut t, 42, equals(47), comment!(""));
    assert_lacks(t.report(), "comment:");
}

#[test]
fn comments_are_not_rendered_on_success() {
    let rendered = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&rendered);
    let mut t = Recorder::new();
    let passed = assert_with(
        &mut t,
        42,
        equals(42),
        Comment::new(move || {
            flag.store(true, Ordering::Relaxed);
            "noted".to_string()
        }),
    );
    assert!(passed);
    assert!(!rendered.load(Ordering::Relaxed));
}

// Restores the process-wide flag even when an assertion fails mid-test.
struct QuietOnDrop;

impl Drop for QuietOnDrop {
    fn drop(&mut self) {
        set_verbose(false);
    }
}

#[test]
fn global_verbosity_controls_argument_suppression() {
    let _restore = QuietOnDrop;
    let arg_text = (1..=12).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let note_text = (1..=12).map(|i| format!("ctx {i}")).collect::<Vec<_>>().join("\n");
    let rendered = || -> String {
        render(&ReportParams {
            error: &CheckError::failed("boom"),
            comment: None,
            notes: &[note("context", &note_text)],
            args: &[Arg::new("want", arg_text.clone())],
            location: Location::caller(),
        })
    };

    set_verbose(false);
    assert!(!verbose());
    let report = rendered();
    assert_contains(&report, "want:\n  <suppressed due to length (12 lines)");
    // Notes are never suppressed, only checker arguments are.
    assert_contains(&report, "ctx 12");

    set_verbose(true);
    assert!(verbose());
    let report = rendered();
    assert_lacks(&report, "suppressed");
    assert_contains(&report, "line 12");
}

#[test]
fn reports_include_the_call_site() {
    let mut t = Recorder::new();
    assert(&mut t, 42, equals(47));
    let report = t.report();
    assert_contains(report, "stack:\n  tests/report_tests.rs:");
    assert_contains(report, "assert(&mut t, 42, equals(47));");
}

#[test]
fn multi_line_calls_appear_whole_in_the_snippet() {
    let mut t = Recorder::new();
    let passed = assert(
        &mut t,
        42,
        equals(47),
    );
    assert!(!passed);
    let report = t.report();
    assert_contains(report, "let passed = assert(");
    assert_contains(report, "equals(47),");
}

#[test]
fn blocks_indent_by_two_spaces_per_line() {
    let report = render(&ReportParams {
        error: &CheckError::failed("first line\nsecond line"),
        comment: None,
        notes: &[],
        args: &[],
        location: Location::caller(),
    });
    assert_contains(&report, "error:\n  first line\n  second line\n");
}
