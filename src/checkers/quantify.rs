//! Quantifiers over containers: any, all, and containment.

use std::fmt;

use super::Checker;
use crate::container::{Container, Holds};
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::repr;

/// Checks elements of a container with the given checker, succeeding if any
/// element passes.
///
/// ```no_run
/// # use attest::{assert, any, equals, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, vec![3, 5, 7, 99], any(equals(7)));
/// ```
pub fn any<C>(elem: C) -> AnyOf<C> {
    AnyOf { elem }
}

#[derive(Debug)]
pub struct AnyOf<C> {
    elem: C,
}

impl<S, C> Checker<S> for AnyOf<C>
where
    S: Container + fmt::Debug,
    C: Checker<S::Item>,
{
    fn check(&self, got: &S, _notes: &mut Notes) -> Result<(), CheckError> {
        for (label, element) in got.items() {
            // Sub-checker notes are discarded: with several candidate
            // elements they would not attribute to any single failure.
            let mut scratch = Notes::new();
            match self.elem.check(element, &mut scratch) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_bad_check() => {
                    // Misuse aborts the scan immediately, annotated with the
                    // position that exposed it.
                    return Err(CheckError::bad_check(format!("at {label}: {}", err.message())));
                }
                Err(_) => {}
            }
        }
        Err(CheckError::failed("no matching element found"))
    }

    fn args(&self) -> Vec<Arg> {
        self.elem.args()
    }

    fn subject_name(&self) -> &'static str {
        "container"
    }

    fn subject_repr(&self, got: &S) -> String {
        repr::repr_of(got)
    }
}

/// Checks elements of a container with the given checker, failing at the
/// first element that does not pass and annotating its position.
pub fn all<C>(elem: C) -> AllOf<C> {
    AllOf { elem }
}

#[derive(Debug)]
pub struct AllOf<C> {
    elem: C,
}

impl<S, C> Checker<S> for AllOf<C>
where
    S: Container + fmt::Debug,
    C: Checker<S::Item>,
{
    fn check(&self, got: &S, notes: &mut Notes) -> Result<(), CheckError> {
        for (label, element) in got.items() {
            // Capture the sub-checker's notes so the position annotation
            // can precede them in the report.
            let mut captured = Notes::new();
            match self.elem.check(element, &mut captured) {
                Ok(()) => continue,
                Err(err) if err.is_bad_check() => {
                    return Err(CheckError::bad_check(format!("at {label}: {}", err.message())));
                }
                Err(err) => {
                    notes.annotate("error", format!("mismatch at {label}"));
                    if !err.is_silent() {
                        // A non-silent sub-checker expects its error and the
                        // failing value to be printed for it.
                        notes.annotate("error", err.message());
                        notes.annotate(
                            "first mismatched element",
                            self.elem.subject_repr(element),
                        );
                    }
                    notes.extend(captured);
                    return Err(CheckError::silent());
                }
            }
        }
        Ok(())
    }

    fn args(&self) -> Vec<Arg> {
        self.elem.args()
    }

    fn subject_name(&self) -> &'static str {
        "container"
    }

    fn subject_repr(&self, got: &S) -> String {
        repr::repr_of(got)
    }
}

/// Checks that a container holds an element equal to `want`, or that a
/// string holds a substring.
///
/// ```no_run
/// # use attest::{assert, contains, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, "hello world", contains("world"));
/// assert(&mut t, vec![3, 5, 7, 99], contains(7));
/// ```
pub fn contains<W: fmt::Debug>(want: W) -> Contains<W> {
    Contains { want }
}

#[derive(Debug)]
pub struct Contains<W> {
    want: W,
}

impl<S, W> Checker<S> for Contains<W>
where
    S: Holds<W> + fmt::Debug + ?Sized,
    W: fmt::Debug,
{
    fn check(&self, got: &S, _notes: &mut Notes) -> Result<(), CheckError> {
        if got.holds(&self.want) {
            Ok(())
        } else {
            Err(CheckError::failed(got.missing()))
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want", repr::repr_of(&self.want))]
    }

    fn subject_name(&self) -> &'static str {
        "container"
    }

    fn subject_repr(&self, got: &S) -> String {
        repr::repr_of(got)
    }
}
