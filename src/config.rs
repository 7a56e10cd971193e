//! Process-wide verbosity configuration.
//!
//! The report formatter and the deep-equality checkers read a verbosity flag
//! at check time. The default comes from the `ATTEST_VERBOSE` environment
//! variable and can be overridden with [`set_verbose`]; individual checkers
//! may also carry an explicit setting that wins over the global one.
//!
//! Mutating the global flag while checks are running on other threads is a
//! caller responsibility; no internal synchronization beyond the atomic store
//! is provided.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

static VERBOSE: Lazy<AtomicBool> = Lazy::new(|| {
    let from_env = matches!(
        std::env::var("ATTEST_VERBOSE").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    );
    AtomicBool::new(from_env)
});

/// Returns the current process-wide verbosity.
pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Overrides the process-wide verbosity.
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

/// Per-checker verbosity setting.
///
/// `Inherit` defers to the process-wide flag; `On` and `Off` are explicit
/// overrides threaded into the checker at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Inherit,
    On,
    Off,
}

impl Verbosity {
    pub fn enabled(self) -> bool {
        match self {
            Verbosity::Inherit => verbose(),
            Verbosity::On => true,
            Verbosity::Off => false,
        }
    }

    pub(crate) fn explicit(on: bool) -> Self {
        if on {
            Verbosity::On
        } else {
            Verbosity::Off
        }
    }
}
