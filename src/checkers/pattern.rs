//! Pattern-matching checkers.
//!
//! Patterns are anchored at both ends before testing, so a pattern matches
//! the whole subject or not at all. An invalid pattern is caller misuse: a
//! bad check, never a plain failure, and negation does not mask it.

use std::error::Error as StdError;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use regex::Regex;

use super::{panic_text, Checker};
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::repr;

/// A match pattern: either source text compiled at check time or a
/// precompiled [`Regex`]. Both are re-anchored as `^(?:pattern)$`.
#[derive(Debug, Clone)]
pub enum Pattern {
    Source(String),
    Compiled(Regex),
}

impl Pattern {
    fn source(&self) -> &str {
        match self {
            Pattern::Source(source) => source,
            Pattern::Compiled(regex) => regex.as_str(),
        }
    }

    fn check_match(&self, text: &str, miss: &str, notes: &mut Notes) -> Result<(), CheckError> {
        let anchored = format!("^(?:{})$", self.source());
        match Regex::new(&anchored) {
            Ok(regex) if regex.is_match(text) => Ok(()),
            Ok(_) => Err(CheckError::failed(miss)),
            Err(err) => {
                notes.push("regexp", self.source());
                Err(CheckError::bad_check(format!("cannot compile regexp: {err}")))
            }
        }
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Pattern::Source(source.to_string())
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Pattern::Source(source)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Compiled(regex)
    }
}

/// Checks that a string matches the pattern.
///
/// ```no_run
/// # use attest::{assert, matches, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, "these are the voyages", matches("these are .*"));
/// ```
pub fn matches(pattern: impl Into<Pattern>) -> Matches {
    Matches {
        pattern: pattern.into(),
    }
}

#[derive(Debug)]
pub struct Matches {
    pattern: Pattern,
}

impl<S: AsRef<str> + fmt::Debug> Checker<S> for Matches {
    fn check(&self, got: &S, notes: &mut Notes) -> Result<(), CheckError> {
        self.pattern
            .check_match(got.as_ref(), "value does not match regexp", notes)
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("regexp", repr::repr_of(self.pattern.source()))]
    }

    fn subject_name(&self) -> &'static str {
        "got value"
    }

    fn subject_repr(&self, got: &S) -> String {
        repr::repr_of(got)
    }
}

/// Checks that an error's message matches the pattern. Accepts `Option` and
/// `Result` subjects; a missing error is a distinct failure.
pub fn error_matches(pattern: impl Into<Pattern>) -> ErrorMatches {
    ErrorMatches {
        pattern: pattern.into(),
    }
}

#[derive(Debug)]
pub struct ErrorMatches {
    pattern: Pattern,
}

impl<E: StdError> Checker<Option<E>> for ErrorMatches {
    fn check(&self, got: &Option<E>, notes: &mut Notes) -> Result<(), CheckError> {
        match got {
            None => Err(CheckError::failed("got nil error but want non-nil")),
            Some(err) => {
                self.pattern
                    .check_match(&err.to_string(), "error does not match regexp", notes)
            }
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("regexp", repr::repr_of(self.pattern.source()))]
    }

    fn subject_name(&self) -> &'static str {
        "got error"
    }

    fn subject_repr(&self, got: &Option<E>) -> String {
        match got {
            Some(err) => repr::error_repr(err),
            None => "nil".to_string(),
        }
    }
}

impl<T: fmt::Debug, E: StdError> Checker<Result<T, E>> for ErrorMatches {
    fn check(&self, got: &Result<T, E>, notes: &mut Notes) -> Result<(), CheckError> {
        match got {
            Ok(_) => Err(CheckError::failed("got nil error but want non-nil")),
            Err(err) => {
                self.pattern
                    .check_match(&err.to_string(), "error does not match regexp", notes)
            }
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("regexp", repr::repr_of(self.pattern.source()))]
    }

    fn subject_name(&self) -> &'static str {
        "got error"
    }

    fn subject_repr(&self, got: &Result<T, E>) -> String {
        match got {
            Ok(value) => repr::repr_of(value),
            Err(err) => repr::error_repr(err),
        }
    }
}

/// Checks that a function panics with a message matching the pattern.
///
/// The function is invoked under `catch_unwind`; the recovered panic text is
/// noted as `panic value`. Absence of a panic is its own failure.
pub fn panic_matches(pattern: impl Into<Pattern>) -> PanicMatches {
    PanicMatches {
        pattern: pattern.into(),
    }
}

#[derive(Debug)]
pub struct PanicMatches {
    pattern: Pattern,
}

impl<F: Fn()> Checker<F> for PanicMatches {
    fn check(&self, got: &F, notes: &mut Notes) -> Result<(), CheckError> {
        match catch_unwind(AssertUnwindSafe(got)) {
            Ok(()) => Err(CheckError::failed("function did not panic")),
            Err(payload) => {
                let text = panic_text(payload.as_ref());
                notes.push("panic value", &text);
                self.pattern
                    .check_match(&text, "panic value does not match regexp", notes)
            }
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("regexp", repr::repr_of(self.pattern.source()))]
    }

    fn subject_name(&self) -> &'static str {
        "function"
    }

    fn subject_repr(&self, _got: &F) -> String {
        "<function>".to_string()
    }
}
