mod common;

use std::collections::BTreeMap;

use attest::{all, any, assert, equals, matches, not};
use common::{assert_contains, assert_lacks, Recorder};

#[test]
fn any_passes_when_one_element_matches() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, vec![3, 5, 7, 99], any(equals(7))));
    assert!(t.is_clean());
}

#[test]
fn any_reports_when_nothing_matches() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, vec![3, 5], any(equals(7))));
    let report = t.report();
    assert_contains(report, "error:\n  no matching element found");
    assert_contains(report, "container:\n  [3, 5]");
    assert_contains(report, "want:\n  i32(7)");
}

#[test]
fn any_fails_on_empty_containers() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, Vec::<i32>::new(), any(equals(7))));
    assert_contains(t.report(), "no matching element found");
}

#[test]
fn any_aborts_on_element_checker_misuse() {
    let mut t = Recorder::new();
    assert(&mut t, vec!["x"], any(matches("(")));
    assert_contains(t.report(), "bad check: at index 0: cannot compile regexp");
}

#[test]
fn all_passes_when_every_element_matches() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, vec![3, 5, 8], all(not(equals(0)))));
    assert!(assert(&mut t, Vec::<i32>::new(), all(equals(0))));
    assert!(t.is_clean());
}

#[test]
fn all_annotates_the_first_mismatch() {
    let mut t = Recorder::new();
    assert!(!assert(&mut t, vec![3, 5, 8], all(equals(3))));
    let report = t.report();
    assert_contains(report, "error:\n  mismatch at index 1");
    assert_contains(report, "error:\n  values are not equal");
    assert_contains(report, "first mismatched element:\n  i32(5)");
    assert_lacks(report, "container:");
}

#[test]
fn all_labels_map_elements_by_key() {
    let mut t = Recorder::new();
    let mut map = BTreeMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    assert(&mut t, map, all(equals(1)));
    assert_contains(t.report(), "mismatch at key \"b\"");
}

#[test]
fn all_aborts_on_element_checker_misuse() {
    let mut t = Recorder::new();
    assert(&mut t, vec!["x", "y"], all(matches("(")));
    assert_contains(t.report(), "bad check: at index 0: cannot compile regexp");
}

#[test]
fn quantifiers_nest() {
    let mut t = Recorder::new();
    assert!(assert(
        &mut t,
        vec![vec![42], vec![1, 42]],
        all(any(equals(42)))
    ));
    assert!(t.is_clean());
}

#[test]
fn quantifiers_accept_slices_and_arrays() {
    let mut t = Recorder::new();
    assert!(assert(&mut t, [3, 5, 7], any(equals(5))));
    let slice: &[i32] = &[3, 5, 7];
    assert!(assert(&mut t, slice, all(not(equals(0)))));
    assert!(t.is_clean());
}
