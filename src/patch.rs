//! Scoped-variable patching.

use std::mem;
use std::ops::{Deref, DerefMut};

/// Sets a variable to a temporary value for the guard's lifetime.
///
/// The previous value is restored when the guard drops, on any exit path
/// including unwinding. Access the patched value through the guard:
///
/// ```
/// # use attest::patch;
/// let mut level = 1;
/// {
///     let patched = patch(&mut level, 5);
///     assert_eq!(*patched, 5);
/// }
/// assert_eq!(level, 1);
/// ```
#[must_use = "dropping the guard immediately restores the previous value"]
pub fn patch<T>(slot: &mut T, value: T) -> Patch<'_, T> {
    let saved = mem::replace(slot, value);
    Patch {
        slot,
        saved: Some(saved),
    }
}

#[derive(Debug)]
pub struct Patch<'a, T> {
    slot: &'a mut T,
    saved: Option<T>,
}

impl<T> Deref for Patch<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot
    }
}

impl<T> DerefMut for Patch<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.slot
    }
}

impl<T> Drop for Patch<'_, T> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *self.slot = saved;
        }
    }
}
