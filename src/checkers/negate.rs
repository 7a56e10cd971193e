//! Checker negation.

use super::Checker;
use crate::errors::CheckError;
use crate::report::{Arg, Notes};

/// Negates a checker.
///
/// Bad-check errors pass through unnegated: misuse is never masked by
/// negation. Double negation is the identity: `not(not(c))` behaves exactly
/// like `c` for both success and failure reporting, and a checker's custom
/// negated-failure message surfaces at exactly one negation depth.
///
/// ```no_run
/// # use attest::{assert, not, equals, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, 42, not(equals(47)));
/// ```
pub fn not<C>(inner: C) -> Not<C> {
    Not { inner }
}

#[derive(Debug)]
pub struct Not<C> {
    inner: C,
}

impl<T: ?Sized, C: Checker<T>> Checker<T> for Not<C> {
    fn check(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        if self.inner.is_negation() {
            // not(not(c)) collapses to c.
            return self.inner.check_unnegated(got, notes);
        }
        match self.inner.check(got, notes) {
            Err(err) if err.is_bad_check() => Err(err),
            Err(_) => Ok(()),
            Ok(()) => Err(CheckError::failed(
                self.inner
                    .negated_failure()
                    .unwrap_or_else(|| "unexpected success".to_string()),
            )),
        }
    }

    fn args(&self) -> Vec<Arg> {
        self.inner.args()
    }

    fn subject_name(&self) -> &'static str {
        self.inner.subject_name()
    }

    fn subject_repr(&self, got: &T) -> String {
        self.inner.subject_repr(got)
    }

    #[doc(hidden)]
    fn is_negation(&self) -> bool {
        true
    }

    #[doc(hidden)]
    fn check_unnegated(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        self.inner.check(got, notes)
    }
}
