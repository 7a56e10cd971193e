//! Line and structure diffs for failure reports.
//!
//! Diffs are rendered in `-got +want` orientation: lines only in the got
//! value carry `-`, lines only in the want value carry `+`, shared lines are
//! indented under a two-space margin.

use std::fmt;

use difference::{Changeset, Difference};

/// Renders a per-line diff of two texts.
pub fn line_diff(got: &str, want: &str) -> String {
    let changeset = Changeset::new(got, want, "\n");
    let mut out = String::new();
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(block) => push_block(&mut out, "  ", block),
            Difference::Rem(block) => push_block(&mut out, "- ", block),
            Difference::Add(block) => push_block(&mut out, "+ ", block),
        }
    }
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Renders a structural diff of two values via their pretty `Debug` forms.
pub fn pretty_diff<T: fmt::Debug + ?Sized>(got: &T, want: &T) -> String {
    line_diff(&format!("{got:#?}"), &format!("{want:#?}"))
}

fn push_block(out: &mut String, prefix: &str, block: &str) {
    for line in block.split('\n') {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
}
