//! The checker protocol and its built-in implementations.
//!
//! A checker is an immutable value encapsulating a comparison or predicate
//! against a subject. [`Checker::check`] evaluates it, emitting diagnostic
//! notes through the sink; [`Checker::args`] describes the checker's own
//! parameters for display and must work even if the checker never runs.
//!
//! Checkers compose: [`not`](negate::not) wraps any checker, the quantifiers
//! [`any`](quantify::any) and [`all`](quantify::all) apply an element
//! checker across a container.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::errors::CheckError;
use crate::report::{Arg, Notes};

pub mod chain;
pub mod codec;
pub mod compare;
pub mod negate;
pub mod pattern;
pub mod quantify;
pub mod shape;

pub use chain::{error_as, error_is, ErrorAs, ErrorIs};
pub use codec::{codec_equals, json_equals, CodecEquals};
pub use compare::{
    content_equals, deep_equals, equals, equals_error, ContentEquals, DeepEquals, Equals,
    EqualsError,
};
pub use negate::{not, Not};
pub use pattern::{
    error_matches, matches, panic_matches, ErrorMatches, Matches, PanicMatches, Pattern,
};
pub use quantify::{all, any, contains, AllOf, AnyOf, Contains};
pub use shape::{
    has_len, implements, is_false, is_nil, is_not_nil, is_true, satisfies, HasLen, Implements,
    IsNil, Satisfies,
};

/// The polymorphic checker contract.
///
/// `T` is the subject type: the type of the first argument passed to
/// [`assert`](crate::harness::assert) or [`check`](crate::harness::check).
pub trait Checker<T: ?Sized> {
    /// Evaluates the check. `Ok(())` means the subject passed; any error
    /// triggers reporting. Diagnostic key-value pairs go through `notes`.
    fn check(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError>;

    /// The checker's own parameters, in display order, each already
    /// rendered. Must not panic for checkers that have never run.
    fn args(&self) -> Vec<Arg>;

    /// Display name of the subject parameter; `got` by convention.
    fn subject_name(&self) -> &'static str {
        "got"
    }

    /// Stable rendering of the subject for the report.
    fn subject_repr(&self, got: &T) -> String;

    /// Failure message reported when this checker unexpectedly succeeds
    /// under negation. `None` selects the generic "unexpected success".
    fn negated_failure(&self) -> Option<String> {
        None
    }

    // Negation plumbing. Not(Not(c)) must behave exactly like c, including
    // failure text, so a negating checker advertises itself here and exposes
    // its inner checker's behavior for the outer negation to delegate to.
    #[doc(hidden)]
    fn is_negation(&self) -> bool {
        false
    }

    #[doc(hidden)]
    fn check_unnegated(&self, got: &T, notes: &mut Notes) -> Result<(), CheckError> {
        self.check(got, notes)
    }
}

/// Runs user-supplied comparison logic, containing any panic at this
/// boundary and converting it to a bad check. Panics must never unwind
/// through the assertion entry points.
pub(crate) fn recover_panics<R>(run: impl FnOnce() -> R) -> Result<R, CheckError> {
    catch_unwind(AssertUnwindSafe(run))
        .map_err(|payload| CheckError::bad_check(panic_text(payload.as_ref())))
}

/// Extracts the human-readable text of a panic payload.
pub(crate) fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
