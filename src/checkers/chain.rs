//! Error-chain checkers, walking the `source()` chain of an error the way
//! `errors.Is` and `errors.As` walk wrapped errors.

use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

use super::Checker;
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::repr;

/// Checks that the error is, or wraps somewhere in its chain, an error equal
/// to `want`. Equality requires the wanted concrete type at a chain link
/// plus `PartialEq` agreement.
///
/// ```no_run
/// # use attest::{assert, error_is, StdTester};
/// # #[derive(Debug, PartialEq, thiserror::Error)] #[error("boom")] struct Boom;
/// # let err: Option<Boom> = Some(Boom);
/// # let mut t = StdTester::new();
/// assert(&mut t, err, error_is(Boom));
/// ```
pub fn error_is<W>(want: W) -> ErrorIs<W>
where
    W: StdError + PartialEq + 'static,
{
    ErrorIs { want }
}

#[derive(Debug)]
pub struct ErrorIs<W> {
    want: W,
}

impl<G, W> Checker<Option<G>> for ErrorIs<W>
where
    G: StdError + 'static,
    W: StdError + PartialEq + 'static,
{
    fn check(&self, got: &Option<G>, _notes: &mut Notes) -> Result<(), CheckError> {
        let first = match got {
            None => return Err(CheckError::failed("got nil error but want non-nil")),
            Some(err) => err,
        };
        let mut link: Option<&(dyn StdError + 'static)> = Some(first);
        while let Some(err) = link {
            if let Some(candidate) = err.downcast_ref::<W>() {
                if candidate == &self.want {
                    return Ok(());
                }
            }
            link = err.source();
        }
        Err(CheckError::failed("wanted error is not found in error chain"))
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want", repr::error_repr(&self.want))]
    }

    fn subject_repr(&self, got: &Option<G>) -> String {
        match got {
            Some(err) => repr::error_repr(err),
            None => "nil".to_string(),
        }
    }
}

/// Checks that the error chain holds an error of type `W`, noting the link
/// that matched. The target shape is enforced by the type system, so unlike
/// the chain-extraction helpers of other ecosystems there is no runtime
/// target-shape misuse to report.
pub fn error_as<W: StdError + 'static>() -> ErrorAs<W> {
    ErrorAs {
        marker: PhantomData,
    }
}

pub struct ErrorAs<W> {
    marker: PhantomData<fn() -> W>,
}

impl<W> fmt::Debug for ErrorAs<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorAs(..)")
    }
}

impl<G, W> Checker<Option<G>> for ErrorAs<W>
where
    G: StdError + 'static,
    W: StdError + 'static,
{
    fn check(&self, got: &Option<G>, notes: &mut Notes) -> Result<(), CheckError> {
        let first = match got {
            None => return Err(CheckError::failed("got nil error but want non-nil")),
            Some(err) => err,
        };
        let mut link: Option<&(dyn StdError + 'static)> = Some(first);
        while let Some(err) = link {
            if let Some(found) = err.downcast_ref::<W>() {
                notes.annotate("found", repr::error_repr(found));
                return Ok(());
            }
            link = err.source();
        }
        Err(CheckError::failed("wanted type is not found in error chain"))
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("as type", std::any::type_name::<W>())]
    }

    fn subject_repr(&self, got: &Option<G>) -> String {
        match got {
            Some(err) => repr::error_repr(err),
            None => "nil".to_string(),
        }
    }
}
