//! The check error taxonomy.
//!
//! Three kinds of failure flow out of a checker:
//!
//! - **Failed**: the subject did not pass the check. The expected outcome of
//!   testing; rendered with full context.
//! - **BadCheck**: the test author misused the checker (invalid pattern,
//!   marshal failure, panicking comparator). Rendered with a `bad check:`
//!   prefix and never flipped into a pass by negation.
//! - **Silent**: the checker has already emitted its full diagnostics as
//!   notes; the report suppresses the default error line and argument
//!   printing to avoid duplication.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckErrorKind {
    Failed,
    BadCheck,
    Silent,
}

/// Error returned by [`Checker::check`](crate::checkers::Checker::check).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CheckError {
    kind: CheckErrorKind,
    message: String,
}

impl CheckError {
    /// A regular check failure: the subject did not pass.
    pub fn failed(message: impl Into<String>) -> Self {
        CheckError {
            kind: CheckErrorKind::Failed,
            message: message.into(),
        }
    }

    /// Caller misuse, reported with a distinguishing prefix.
    pub fn bad_check(message: impl Into<String>) -> Self {
        CheckError {
            kind: CheckErrorKind::BadCheck,
            message: message.into(),
        }
    }

    /// The checker has fully described the failure through notes.
    pub fn silent() -> Self {
        CheckError {
            kind: CheckErrorKind::Silent,
            message: String::new(),
        }
    }

    pub fn kind(&self) -> CheckErrorKind {
        self.kind
    }

    pub fn is_bad_check(&self) -> bool {
        self.kind == CheckErrorKind::BadCheck
    }

    pub fn is_silent(&self) -> bool {
        self.kind == CheckErrorKind::Silent
    }

    /// The message without any kind prefix. Report rendering adds the
    /// `bad check:` prefix for bad checks.
    pub fn message(&self) -> &str {
        &self.message
    }
}
