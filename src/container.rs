//! Capability traits over container shapes.
//!
//! Rust has no open-ended runtime reflection, so the container-oriented
//! checkers dispatch over an explicit, closed enumeration of supported
//! shapes: each capability is a small trait implemented for the standard
//! collections it makes sense for. Anything outside the enumeration is
//! rejected by the compiler rather than at check time, which moves the
//! "map, slice or array required" class of bad checks into the type system.
//!
//! - [`Container`]: labeled, single-pass iteration for the quantifiers;
//! - [`HasLength`]: length-bearing shapes for `has_len`;
//! - [`Nilable`]: shapes with an absence value for `is_nil`;
//! - [`Holds`]: membership (element or substring) for `contains`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// Uniform iteration over ordered sequences and associative maps.
///
/// Each call to [`items`](Container::items) yields a fresh, finite,
/// single-pass sequence of `(label, element)` pairs. Sequences label by
/// position (`index N`) in definition order; maps label by key
/// (`key <rendered key>`) in implementation-defined order.
pub trait Container {
    type Item;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &Self::Item)> + '_>;
}

fn indexed<T>(items: impl Iterator<Item = T>) -> impl Iterator<Item = (String, T)> {
    items
        .enumerate()
        .map(|(index, item)| (format!("index {index}"), item))
}

impl<T> Container for [T] {
    type Item = T;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &T)> + '_> {
        Box::new(indexed(self.iter()))
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &T)> + '_> {
        Box::new(indexed(self.iter()))
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &T)> + '_> {
        Box::new(indexed(self.iter()))
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &T)> + '_> {
        Box::new(indexed(self.iter()))
    }
}

impl<K: fmt::Debug, V> Container for HashMap<K, V> {
    type Item = V;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (format!("key {key:?}"), value)))
    }
}

impl<K: fmt::Debug, V> Container for BTreeMap<K, V> {
    type Item = V;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (format!("key {key:?}"), value)))
    }
}

impl<C: Container + ?Sized> Container for &C {
    type Item = C::Item;

    fn items(&self) -> Box<dyn Iterator<Item = (String, &C::Item)> + '_> {
        (**self).items()
    }
}

/// Length-bearing shapes.
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for HashMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for HashSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<C: HasLength + ?Sized> HasLength for &C {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Shapes with an absence value.
pub trait Nilable {
    fn is_nil(&self) -> bool;

    /// Message used when the subject was expected to be nil but is not.
    fn describe_non_nil(&self) -> &'static str {
        "got non-nil value"
    }
}

impl<T> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nilable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nilable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// Membership: element containment for collections, substring containment
/// for strings.
pub trait Holds<W: ?Sized> {
    fn holds(&self, want: &W) -> bool;

    /// Failure message when nothing matches.
    fn missing(&self) -> &'static str {
        "no matching element found"
    }
}

impl<W: PartialEq> Holds<W> for [W] {
    fn holds(&self, want: &W) -> bool {
        self.iter().any(|item| item == want)
    }
}

impl<W: PartialEq> Holds<W> for Vec<W> {
    fn holds(&self, want: &W) -> bool {
        self.iter().any(|item| item == want)
    }
}

impl<W: PartialEq, const N: usize> Holds<W> for [W; N] {
    fn holds(&self, want: &W) -> bool {
        self.iter().any(|item| item == want)
    }
}

impl<W: PartialEq> Holds<W> for VecDeque<W> {
    fn holds(&self, want: &W) -> bool {
        self.iter().any(|item| item == want)
    }
}

impl<K, W: PartialEq> Holds<W> for HashMap<K, W> {
    fn holds(&self, want: &W) -> bool {
        self.values().any(|item| item == want)
    }
}

impl<K, W: PartialEq> Holds<W> for BTreeMap<K, W> {
    fn holds(&self, want: &W) -> bool {
        self.values().any(|item| item == want)
    }
}

impl<W: Eq + std::hash::Hash> Holds<W> for HashSet<W> {
    fn holds(&self, want: &W) -> bool {
        self.contains(want)
    }
}

impl<W: Ord> Holds<W> for BTreeSet<W> {
    fn holds(&self, want: &W) -> bool {
        self.contains(want)
    }
}

impl Holds<str> for str {
    fn holds(&self, want: &str) -> bool {
        self.contains(want)
    }

    fn missing(&self) -> &'static str {
        "no substring match found"
    }
}

impl Holds<String> for str {
    fn holds(&self, want: &String) -> bool {
        self.contains(want.as_str())
    }

    fn missing(&self) -> &'static str {
        "no substring match found"
    }
}

impl<'a> Holds<&'a str> for str {
    fn holds(&self, want: &&'a str) -> bool {
        self.contains(*want)
    }

    fn missing(&self) -> &'static str {
        "no substring match found"
    }
}

impl Holds<String> for String {
    fn holds(&self, want: &String) -> bool {
        self.contains(want.as_str())
    }

    fn missing(&self) -> &'static str {
        "no substring match found"
    }
}

impl<'a> Holds<&'a str> for String {
    fn holds(&self, want: &&'a str) -> bool {
        self.contains(*want)
    }

    fn missing(&self) -> &'static str {
        "no substring match found"
    }
}

impl<W: ?Sized, C: Holds<W> + ?Sized> Holds<W> for &C {
    fn holds(&self, want: &W) -> bool {
        (**self).holds(want)
    }

    fn missing(&self) -> &'static str {
        (**self).missing()
    }
}
