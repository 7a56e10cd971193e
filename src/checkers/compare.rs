//! Equality checkers: native, error-typed, structural, and
//! content-order-independent.

use std::any::{type_name, Any, TypeId};
use std::error::Error as StdError;
use std::fmt;

use super::{recover_panics, Checker};
use crate::config::Verbosity;
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::{diff, repr};

/// Checks equality of two values of the same type.
///
/// ```no_run
/// # use attest::{assert, equals, StdTester};
/// # let mut t = StdTester::new();
/// assert(&mut t, 6 * 7, equals(42));
/// ```
pub fn equals<T: PartialEq + fmt::Debug>(want: T) -> Equals<T> {
    Equals { want }
}

#[derive(Debug)]
pub struct Equals<T> {
    want: T,
}

impl<T: PartialEq + fmt::Debug> Checker<T> for Equals<T> {
    fn check(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        // A user PartialEq may panic; contain it here.
        if recover_panics(|| got == &self.want)? {
            return Ok(());
        }
        let got_text = repr::repr_of(got);
        let want_text = repr::repr_of(&self.want);
        if let (Some(got_str), Some(want_str)) = (
            repr::string_literal(&got_text),
            repr::string_literal(&want_text),
        ) {
            // Attach a line diff only for genuinely multi-line strings; a
            // trailing newline alone does not qualify.
            if repr::is_multiline(&got_str) || repr::is_multiline(&want_str) {
                notes.annotate("line diff (-got +want)", diff::line_diff(&got_str, &want_str));
            }
        }
        Err(CheckError::failed("values are not equal"))
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want", repr::repr_of(&self.want))]
    }

    fn subject_repr(&self, got: &T) -> String {
        repr::repr_of(got)
    }
}

/// Checks equality of two optional errors.
///
/// This is the error-typed special case of [`equals`]: message-only equality
/// is not sufficient, the concrete error types must match. On a type
/// mismatch, both type names are surfaced as notes; nil-versus-non-nil
/// mismatches get dedicated messages.
pub fn equals_error<W>(want: Option<W>) -> EqualsError<W>
where
    W: StdError + PartialEq + 'static,
{
    EqualsError { want }
}

#[derive(Debug)]
pub struct EqualsError<W> {
    want: Option<W>,
}

impl<G, W> Checker<Option<G>> for EqualsError<W>
where
    G: StdError + 'static,
    W: StdError + PartialEq + 'static,
{
    fn check(&self, got: &Option<G>, notes: &mut Notes) -> Result<(), CheckError> {
        match (got, &self.want) {
            (None, None) => Ok(()),
            (Some(_), None) => Err(CheckError::failed("got non-nil error")),
            (None, Some(_)) => Err(CheckError::failed("got nil error")),
            (Some(got), Some(want)) => {
                if TypeId::of::<G>() != TypeId::of::<W>() {
                    notes.annotate("got type", type_name::<G>());
                    notes.annotate("want type", type_name::<W>());
                    return Err(CheckError::failed("values are not equal"));
                }
                match (got as &dyn Any).downcast_ref::<W>() {
                    Some(got) if got == want => Ok(()),
                    _ => Err(CheckError::failed("values are not equal")),
                }
            }
        }
    }

    fn args(&self) -> Vec<Arg> {
        let value = match &self.want {
            Some(want) => repr::error_repr(want),
            None => "nil".to_string(),
        };
        vec![Arg::new("want", value)]
    }

    fn subject_repr(&self, got: &Option<G>) -> String {
        match got {
            Some(err) => repr::error_repr(err),
            None => "nil".to_string(),
        }
    }
}

/// Checks structural equality, attaching a structural diff on mismatch.
///
/// In non-verbose mode the full got/want values are omitted (the diff and a
/// compact error note carry the report); verbose mode prints everything.
/// A custom equivalence function replaces the `PartialEq` comparison:
///
/// ```no_run
/// # use attest::{assert, deep_equals, StdTester};
/// # let mut t = StdTester::new();
/// assert(
///     &mut t,
///     vec![1.00001f64],
///     deep_equals(vec![1.0f64]).with_equivalence(|a, b| {
///         a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-3)
///     }),
/// );
/// ```
pub fn deep_equals<T: PartialEq + fmt::Debug>(want: T) -> DeepEquals<T> {
    DeepEquals {
        want,
        equivalence: None,
        verbosity: Verbosity::Inherit,
    }
}

pub struct DeepEquals<T> {
    want: T,
    equivalence: Option<Box<dyn Fn(&T, &T) -> bool>>,
    verbosity: Verbosity,
}

impl<T> DeepEquals<T> {
    /// Replaces the comparison with a custom equivalence function.
    pub fn with_equivalence(mut self, equivalence: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.equivalence = Some(Box::new(equivalence));
        self
    }

    /// Overrides the process-wide verbosity for this checker.
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbosity = Verbosity::explicit(on);
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for DeepEquals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepEquals")
            .field("want", &self.want)
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq + fmt::Debug> Checker<T> for DeepEquals<T> {
    fn check(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        let equal = recover_panics(|| match &self.equivalence {
            Some(equivalence) => equivalence(got, &self.want),
            None => got == &self.want,
        })?;
        if equal {
            return Ok(());
        }
        structural_mismatch(
            diff::pretty_diff(got, &self.want),
            "values are not deep equal",
            self.verbosity,
            notes,
        )
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want", repr::repr_of(&self.want))]
    }

    fn subject_repr(&self, got: &T) -> String {
        repr::repr_of(got)
    }
}

/// Checks structural equality of sequences irrespective of element order.
///
/// Both sides are sorted by each element's rendered text (a canonicalizing
/// comparator, not a semantic one) before element-wise comparison.
pub fn content_equals<T: PartialEq + fmt::Debug>(want: Vec<T>) -> ContentEquals<T> {
    ContentEquals {
        want,
        verbosity: Verbosity::Inherit,
    }
}

#[derive(Debug)]
pub struct ContentEquals<T> {
    want: Vec<T>,
    verbosity: Verbosity,
}

impl<T> ContentEquals<T> {
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbosity = Verbosity::explicit(on);
        self
    }
}

impl<S, T> Checker<S> for ContentEquals<T>
where
    S: AsRef<[T]> + fmt::Debug,
    T: PartialEq + fmt::Debug,
{
    fn check(&self, got: &S, notes: &mut Notes) -> Result<(), CheckError> {
        let got_sorted = sorted_by_repr(got.as_ref());
        let want_sorted = sorted_by_repr(&self.want);
        let equal = got_sorted.len() == want_sorted.len()
            && got_sorted
                .iter()
                .zip(want_sorted.iter())
                .all(|(got, want)| got == want);
        if equal {
            return Ok(());
        }
        structural_mismatch(
            diff::line_diff(
                &format!("{got_sorted:#?}"),
                &format!("{want_sorted:#?}"),
            ),
            "values are not deep equal",
            self.verbosity,
            notes,
        )
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("want", repr::repr_of(&self.want))]
    }

    fn subject_repr(&self, got: &S) -> String {
        repr::repr_of(got)
    }
}

fn sorted_by_repr<T: fmt::Debug>(items: &[T]) -> Vec<&T> {
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by_cached_key(|item| repr::repr_of(*item));
    refs
}

/// Shared mismatch flow for the deep-equality family: verbose mode attaches
/// the diff and reports a regular failure; non-verbose mode carries the
/// whole report in notes and silences the default error/args printing.
pub(crate) fn structural_mismatch(
    diff_text: String,
    message: &str,
    verbosity: Verbosity,
    notes: &mut Notes,
) -> Result<(), CheckError> {
    if verbosity.enabled() {
        notes.annotate("diff (-got +want)", diff_text);
        Err(CheckError::failed(message))
    } else {
        notes.annotate("error", message);
        notes.annotate("diff (-got +want)", diff_text);
        Err(CheckError::silent())
    }
}
