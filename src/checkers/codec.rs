//! Codec round-trip equality.
//!
//! The expected value is marshaled, both payloads are unmarshaled into a
//! generic intermediate representation ([`serde_json::Value`]), and the two
//! intermediate values are compared structurally. Failures on the expected
//! side are caller misuse (bad checks); an unmarshal failure on the actual
//! payload reflects the subject under test and is a regular failure.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::compare::structural_mismatch;
use super::Checker;
use crate::config::Verbosity;
use crate::diff;
use crate::errors::CheckError;
use crate::report::{Arg, Notes};
use crate::repr;

/// Checks that a payload is codec-equivalent to a value, with a pluggable
/// marshal/unmarshal pair. See [`json_equals`] for the JSON instance.
pub fn codec_equals<W, M, U>(want: W, marshal: M, unmarshal: U) -> CodecEquals<W, M, U>
where
    W: fmt::Debug,
    M: Fn(&W) -> Result<Vec<u8>, String>,
    U: Fn(&[u8]) -> Result<Value, String>,
{
    CodecEquals {
        want,
        marshal,
        unmarshal,
        verbosity: Verbosity::Inherit,
    }
}

pub struct CodecEquals<W, M, U> {
    want: W,
    marshal: M,
    unmarshal: U,
    verbosity: Verbosity,
}

impl<W, M, U> CodecEquals<W, M, U> {
    /// Overrides the process-wide verbosity for this checker.
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbosity = Verbosity::explicit(on);
        self
    }
}

impl<W: fmt::Debug, M, U> fmt::Debug for CodecEquals<W, M, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecEquals")
            .field("want", &self.want)
            .finish_non_exhaustive()
    }
}

impl<S, W, M, U> Checker<S> for CodecEquals<W, M, U>
where
    S: AsRef<[u8]> + fmt::Debug,
    W: fmt::Debug,
    M: Fn(&W) -> Result<Vec<u8>, String>,
    U: Fn(&[u8]) -> Result<Value, String>,
{
    fn check(&self, got: &S, notes: &mut Notes) -> Result<(), CheckError> {
        let want_bytes = (self.marshal)(&self.want)
            .map_err(|err| CheckError::bad_check(format!("cannot marshal expected contents: {err}")))?;
        let want_value = (self.unmarshal)(&want_bytes)
            .map_err(|err| CheckError::bad_check(format!("cannot unmarshal expected contents: {err}")))?;
        let got_value = (self.unmarshal)(got.as_ref()).map_err(|err| {
            CheckError::failed(format!(
                "cannot unmarshal obtained contents: {err}; {:?}",
                String::from_utf8_lossy(got.as_ref())
            ))
        })?;
        if got_value == want_value {
            return Ok(());
        }
        structural_mismatch(
            diff::pretty_diff(&got_value, &want_value),
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

/// Checks that a byte or string payload is JSON-equivalent to a value.
///
/// Equality is up to the intermediate representation's own semantics:
/// numbers compare as JSON numbers and map key order is irrelevant.
///
/// ```no_run
/// # use attest::{assert, json_equals, StdTester};
/// # #[derive(serde::Serialize, Debug)] struct MyStruct { first: f64 }
/// # let mut t = StdTester::new();
/// assert(&mut t, r#"{"first": 47.11}"#, json_equals(MyStruct { first: 47.11 }));
/// ```
pub fn json_equals<W: Serialize + fmt::Debug>(
    want: W,
) -> CodecEquals<W, impl Fn(&W) -> Result<Vec<u8>, String>, impl Fn(&[u8]) -> Result<Value, String>>
{
    codec_equals(
        want,
        |want: &W| serde_json::to_vec(want).map_err(|err| err.to_string()),
        |bytes: &[u8]| serde_json::from_slice(bytes).map_err(|err| err.to_string()),
    )
}
