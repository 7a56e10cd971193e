//! Assertion entry points and the host-runner interface.
//!
//! [`assert`] and [`check`] run a checker against a subject, and on failure
//! render a report and hand it to the runner's fail primitive: fatal for
//! `assert`, non-fatal for `check`. Both return a success flag even on the
//! fatal path, for callers using a dry-run style
//! `if !check(..) { return; }`.

use std::panic::Location;

use crate::checkers::Checker;
use crate::report::{self, Arg, Comment, Notes, ReportParams};

/// The host test-runner's failure primitives.
pub trait Tester {
    /// Records the failure and halts the current test.
    fn fail_now(&mut self, report: &str);

    /// Records the failure and lets the test continue.
    fn fail(&mut self, report: &str);
}

/// Adapter to Rust's built-in test harness.
///
/// Fatal failures panic with the report. Non-fatal failures print the report
/// and are remembered; if any were recorded, dropping the tester at the end
/// of the test panics, so the test still fails after running to completion.
#[derive(Debug, Default)]
pub struct StdTester {
    failed: usize,
}

impl StdTester {
    pub fn new() -> Self {
        StdTester::default()
    }
}

impl Tester for StdTester {
    fn fail_now(&mut self, report: &str) {
        panic!("{report}");
    }

    fn fail(&mut self, report: &str) {
        eprintln!("{report}");
        self.failed += 1;
    }
}

impl Drop for StdTester {
    fn drop(&mut self) {
        if self.failed > 0 && !std::thread::panicking() {
            panic!("{} non-fatal check failure(s)", self.failed);
        }
    }
}

#[derive(Clone, Copy)]
enum FailMode {
    Fatal,
    Continue,
}

/// Checks that the subject passes the checker, halting the test on failure.
#[track_caller]
pub fn assert<T, C: Checker<T>>(tester: &mut impl Tester, got: T, checker: C) -> bool {
    run(tester, &got, &checker, None, FailMode::Fatal)
}

/// Like [`assert`], with a comment included in any failure report.
#[track_caller]
pub fn assert_with<T, C: Checker<T>>(
    tester: &mut impl Tester,
    got: T,
    checker: C,
    comment: Comment,
) -> bool {
    run(tester, &got, &checker, Some(comment), FailMode::Fatal)
}

/// Checks that the subject passes the checker, recording any failure but
/// letting the test continue.
#[track_caller]
pub fn check<T, C: Checker<T>>(tester: &mut impl Tester, got: T, checker: C) -> bool {
    run(tester, &got, &checker, None, FailMode::Continue)
}

/// Like [`check`], with a comment included in any failure report.
#[track_caller]
pub fn check_with<T, C: Checker<T>>(
    tester: &mut impl Tester,
    got: T,
    checker: C,
    comment: Comment,
) -> bool {
    run(tester, &got, &checker, Some(comment), FailMode::Continue)
}

#[track_caller]
fn run<T, C: Checker<T>>(
    tester: &mut impl Tester,
    got: &T,
    checker: &C,
    comment: Option<Comment>,
    mode: FailMode,
) -> bool {
    let location = Location::caller();
    let mut notes = Notes::new();
    match checker.check(got, &mut notes) {
        Ok(()) => true,
        Err(error) => {
            let mut args = vec![Arg::new(checker.subject_name(), checker.subject_repr(got))];
            args.extend(checker.args());
            let text = report::render(&ReportParams {
                error: &error,
                comment: comment.as_ref(),
                notes: notes.entries(),
                args: &args,
                location,
            });
            match mode {
                FailMode::Fatal => tester.fail_now(&text),
                FailMode::Continue => tester.fail(&text),
            }
            false
        }
    }
}
