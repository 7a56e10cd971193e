//! Checkers over a value's shape: nil-ness, length, runtime type, and
//! arbitrary predicates.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use super::{not, recover_panics, Checker, Equals, Not};
use crate::container::{HasLength, Nilable};
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::repr;

/// Checks that the subject is nil: `None`, or a null raw pointer.
pub fn is_nil() -> IsNil {
    IsNil
}

/// Checks that the subject is not nil. Equivalent to `not(is_nil())`.
pub fn is_not_nil() -> Not<IsNil> {
    not(is_nil())
}

#[derive(Debug, Clone, Copy)]
pub struct IsNil;

impl<T: Nilable + fmt::Debug> Checker<T> for IsNil {
    fn check(&self, got: &T, _notes: &mut Notes) -> Result<(), CheckError> {
        if got.is_nil() {
            Ok(())
        } else {
            Err(CheckError::failed(got.describe_non_nil()))
        }
    }

    fn args(&self) -> Vec<Arg> {
        Vec::new()
    }

    fn subject_repr(&self, got: &T) -> String {
        repr::repr_of(got)
    }

    fn negated_failure(&self) -> Option<String> {
        Some("got nil value but want non-nil".to_string())
    }
}

/// Checks that a length-bearing subject has the given length. The computed
/// length is always emitted as a `len(got)` note before comparing.
///
/// ```no_run
/// # use attest::{assert, has_len, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, vec![42, 47], has_len(2));
/// ```
pub fn has_len(want: usize) -> HasLen {
    HasLen { want }
}

#[derive(Debug, Clone, Copy)]
pub struct HasLen {
    want: usize,
}

impl<T: HasLength + fmt::Debug + ?Sized> Checker<T> for HasLen {
    fn check(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        let length = got.length();
        notes.push("len(got)", &length);
        if length == self.want {
            Ok(())
        } else {
            Err(CheckError::failed("unexpected length"))
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want length", repr::repr_of(&self.want))]
    }

    fn subject_repr(&self, got: &T) -> String {
        repr::repr_of(got)
    }
}

/// Checks that a type-erased subject's runtime type is `W`.
///
/// Rust cannot ask whether an erased value implements an arbitrary trait,
/// so this is the nearest expressible analogue of an interface query: a
/// downcast probe against the wanted concrete type. A `None` subject is a
/// distinguished failure, not caller misuse.
pub fn implements<W: Any>() -> Implements<W> {
    Implements {
        marker: PhantomData,
    }
}

#[derive(Debug)]
pub struct Implements<W> {
    marker: PhantomData<fn() -> W>,
}

impl<'a, W: Any> Checker<Option<&'a dyn Any>> for Implements<W> {
    fn check(&self, got: &Option<&'a dyn Any>, notes: &mut Notes) -> Result<(), CheckError> {
        match got {
            None => {
                notes.annotate("error", "got nil value but want non-nil");
                notes.annotate("got", "nil");
                Err(CheckError::silent())
            }
            Some(value) if value.is::<W>() => Ok(()),
            Some(_) => {
                notes.annotate("error", "got value does not have the wanted runtime type");
                notes.annotate("want type", type_name::<W>());
                Err(CheckError::silent())
            }
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want type", type_name::<W>())]
    }

    fn subject_repr(&self, got: &Option<&'a dyn Any>) -> String {
        match got {
            Some(_) => "<dyn Any>".to_string(),
            None => "nil".to_string(),
        }
    }
}

impl<W: Any> Checker<Box<dyn Any>> for Implements<W> {
    fn check(&self, got: &Box<dyn Any>, notes: &mut Notes) -> Result<(), CheckError> {
        if got.as_ref().is::<W>() {
            Ok(())
        } else {
            notes.annotate("error", "got value does not have the wanted runtime type");
            notes.annotate("want type", type_name::<W>());
            Err(CheckError::silent())
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want type", type_name::<W>())]
    }

    fn subject_repr(&self, _got: &Box<dyn Any>) -> String {
        "<dyn Any>".to_string()
    }
}

/// Checks that the predicate returns true for the subject.
///
/// ```no_run
/// # use attest::{assert, satisfies, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, f64::NAN, satisfies(|f: &f64| f.is_nan()));
/// ```
pub fn satisfies<T, F: Fn(&T) -> bool>(predicate: F) -> Satisfies<F> {
    Satisfies { predicate }
}

pub struct Satisfies<F> {
    predicate: F,
}

impl<F> fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Satisfies(..)")
    }
}

impl<T: fmt::Debug, F: Fn(&T) -> bool> Checker<T> for Satisfies<F> {
    fn check(&self, got: &T, _notes: &mut Notes) -> Result<(), CheckError> {
        // Predicate panics are caller misuse, contained here.
        if recover_panics(|| (self.predicate)(got))? {
            Ok(())
        } else {
            Err(CheckError::failed("value does not satisfy predicate function"))
        }
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("predicate function", "<function>")]
    }

    fn subject_name(&self) -> &'static str {
        "arg"
    }

    fn subject_repr(&self, got: &T) -> String {
        repr::repr_of(got)
    }
}

/// Checks that the subject is `true`.
pub fn is_true() -> Equals<bool> {
    super::equals(true)
}

/// Checks that the subject is `false`.
pub fn is_false() -> Equals<bool> {
    super::equals(false)
}
