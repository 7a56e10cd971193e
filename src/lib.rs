//! Attest: assertion evaluation and structured failure reports for tests.
//!
//! Callers construct a *checker* encapsulating a comparison or predicate,
//! hand it to [`assert`] or [`check`] along with the subject value, and get
//! back a pass/fail flag. On failure a structured report is rendered — the
//! error, any caller comment, diagnostic notes, the checker's arguments,
//! and the call site — and handed to the host runner's fail primitive:
//! fatal for `assert`, non-fatal for `check`.
//!
//! ```no_run
//! use attest::{assert, check, equals, has_len, not, StdTester};
//!
//! let mut t = StdTester::new();
//! assert(&mut t, 6 * 7, equals(42));
//! check(&mut t, vec!["life", "universe"], has_len(2));
//! assert(&mut t, 47, not(equals(42)));
//! ```

pub mod checkers;
pub mod config;
pub mod container;
pub mod diff;
pub mod errors;
pub mod harness;
pub mod patch;
pub mod report;
pub mod repr;

pub use checkers::{
    all, any, codec_equals, contains, content_equals, deep_equals, equals, equals_error, error_as,
    error_is, error_matches, has_len, implements, is_false, is_nil, is_not_nil, is_true,
    json_equals, matches, not, panic_matches, satisfies, AllOf, AnyOf, Checker, CodecEquals,
    Contains, ContentEquals, DeepEquals, Equals, EqualsError, ErrorAs, ErrorIs, ErrorMatches,
    HasLen, Implements, IsNil, Matches, Not, PanicMatches, Pattern, Satisfies,
};
pub use config::{set_verbose, verbose};
pub use container::{Container, HasLength, Holds, Nilable};
pub use errors::{CheckError, CheckErrorKind};
pub use harness::{assert, assert_with, check, check_with, StdTester, Tester};
pub use patch::{patch, Patch};
pub use report::{Arg, Comment, Note, Notes, ReportParams};
