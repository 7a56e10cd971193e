use std::panic::{catch_unwind, AssertUnwindSafe};

use attest::patch;

#[test]
fn patch_restores_on_scope_exit() {
    let mut level = 1;
    {
        let patched = patch(&mut level, 5);
        assert_eq!(*patched, 5);
    }
    assert_eq!(level, 1);
}

#[test]
fn patched_value_is_writable_through_the_guard() {
    let mut name = "original".to_string();
    {
        let mut patched = patch(&mut name, "temporary".to_string());
        patched.push_str(" edited");
        assert_eq!(*patched, "temporary edited");
    }
    assert_eq!(name, "original");
}

#[test]
fn patch_restores_during_unwinding() {
    let mut level = 1;
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _patched = patch(&mut level, 5);
        panic!("interrupted");
    }));
    assert!(outcome.is_err());
    assert_eq!(level, 1);
}

#[test]
fn patches_stack_sequentially() {
    let mut level = 1;
    {
        let patched = patch(&mut level, 2);
        assert_eq!(*patched, 2);
    }
    {
        let patched = patch(&mut level, 3);
        assert_eq!(*patched, 3);
    }
    assert_eq!(level, 1);
}
