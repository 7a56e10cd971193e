//! Shared test support: a Tester that records reports instead of failing.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use attest::Tester;

/// Captures failure reports for inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    pub fatals: Vec<String>,
    pub failures: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// The single recorded report, fatal or not. Panics if there is not
    /// exactly one.
    pub fn report(&self) -> &str {
        let mut all = self.fatals.iter().chain(self.failures.iter());
        let report = all.next().expect("no failure was recorded");
        assert!(all.next().is_none(), "more than one failure was recorded");
        report
    }

    pub fn is_clean(&self) -> bool {
        self.fatals.is_empty() && self.failures.is_empty()
    }
}

impl Tester for Recorder {
    fn fail_now(&mut self, report: &str) {
        self.fatals.push(report.to_string());
    }

    fn fail(&mut self, report: &str) {
        self.failures.push(report.to_string());
    }
}

/// Asserts that `haystack` contains `needle`, with a readable failure.
#[track_caller]
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "expected to find {needle:?} in:\n{haystack}"
    );
}

/// Asserts that `haystack` does not contain `needle`.
#[track_caller]
pub fn assert_lacks(haystack: &str, needle: &str) {
    assert!(
        !haystack.contains(needle),
        "expected not to find {needle:?} in:\n{haystack}"
    );
}
