//! Failure-report assembly.
//!
//! A failing assertion produces one report, rendered from the check error,
//! the checker's declared arguments, any notes emitted during checking, an
//! optional caller comment, and the captured call site. Field order is part
//! of the contract: error, comment, notes, args, stack; two spaces of
//! indentation per nesting level.
//!
//! Two compaction passes keep reports readable:
//!
//! - a value whose rendered text exactly matches an earlier-printed arg or
//!   note is replaced by a back-reference, `<same as "got">`;
//! - in non-verbose mode, argument values longer than ten lines collapse to
//!   a one-line suppression marker.
//!
//! Comparison is by rendered text, not structure, so differently-typed
//! values that happen to render identically are elided into one another.
//! This is a deliberate compatibility choice; the `e` sigil on rendered
//! errors keeps them distinguishable from the plain strings of their
//! messages.

use std::fmt;
use std::fs;
use std::panic::Location;

use crate::config;
use crate::errors::CheckError;
use crate::repr;

/// A named checker parameter, already rendered for display.
#[derive(Debug, Clone)]
pub struct Arg {
    pub name: String,
    pub value: String,
}

impl Arg {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Arg {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A diagnostic key-value pair emitted while a check runs.
#[derive(Debug, Clone)]
pub struct Note {
    pub key: String,
    pub value: String,
}

/// The per-invocation note sink. A fresh one is created for every check, so
/// checker instances stay immutable and shareable.
#[derive(Debug, Default)]
pub struct Notes {
    entries: Vec<Note>,
}

impl Notes {
    pub fn new() -> Self {
        Notes::default()
    }

    /// Adds a note, rendering the value with the standard renderer.
    pub fn push<V: fmt::Debug + ?Sized>(&mut self, key: impl Into<String>, value: &V) {
        self.entries.push(Note {
            key: key.into(),
            value: repr::repr_of(value),
        });
    }

    /// Adds a note whose value is verbatim text: diffs, type names, and
    /// other content that must not be re-quoted.
    pub fn annotate(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.push(Note {
            key: key.into(),
            value: text.into(),
        });
    }

    pub fn entries(&self) -> &[Note] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-emits another sink's notes, preserving order. Used by the
    /// quantifiers to replay a sub-checker's notes after their own.
    pub(crate) fn extend(&mut self, other: Notes) {
        self.entries.extend(other.entries);
    }
}

/// A lazily-formatted caller annotation. The format arguments are not
/// evaluated unless the assertion fails.
pub struct Comment {
    render: Box<dyn Fn() -> String + Send + Sync>,
}

impl Comment {
    pub fn new(render: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Comment {
            render: Box::new(render),
        }
    }

    pub fn text(&self) -> String {
        (self.render)()
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comment(..)")
    }
}

/// Builds a lazily-formatted [`Comment`] from `format!` arguments.
#[macro_export]
macro_rules! comment {
    ($($arg:tt)*) => {
        $crate::Comment::new(move || format!($($arg)*))
    };
}

/// The reportable state of one failing check.
#[derive(Debug)]
pub struct ReportParams<'a> {
    pub error: &'a CheckError,
    pub comment: Option<&'a Comment>,
    pub notes: &'a [Note],
    pub args: &'a [Arg],
    pub location: &'static Location<'static>,
}

const SUPPRESS_LINES: usize = 10;
const MAX_SNIPPET_LINES: usize = 8;

/// Renders the failure report text.
pub fn render(params: &ReportParams<'_>) -> String {
    let verbose = config::verbose();
    let mut out = String::from("\n");
    let mut printed: Vec<(&str, &str)> = Vec::new();

    if !params.error.is_silent() {
        let message = if params.error.is_bad_check() {
            format!("bad check: {}", params.error.message())
        } else {
            params.error.message().to_string()
        };
        write_block(&mut out, "error", &message);
    }
    if let Some(comment) = params.comment {
        let text = comment.text();
        if !text.is_empty() {
            write_block(&mut out, "comment", &text);
        }
    }
    for note in params.notes {
        write_value(&mut out, &note.key, &note.value, &mut printed, verbose, false);
    }
    if !params.error.is_silent() {
        for arg in params.args {
            write_value(&mut out, &arg.name, &arg.value, &mut printed, verbose, true);
        }
    }
    out.push_str(&render_stack(params.location));
    out
}

fn write_value<'a>(
    out: &mut String,
    name: &'a str,
    value: &'a str,
    printed: &mut Vec<(&'a str, &'a str)>,
    verbose: bool,
    suppressible: bool,
) {
    if let Some(earlier) = printed
        .iter()
        .find(|(_, text)| *text == value)
        .map(|(name, _)| *name)
    {
        write_block(out, name, &format!("<same as \"{earlier}\">"));
        return;
    }
    printed.push((name, value));
    let lines = value.lines().count();
    if suppressible && !verbose && lines > SUPPRESS_LINES {
        write_block(
            out,
            name,
            &format!("<suppressed due to length ({lines} lines), set ATTEST_VERBOSE=1 for full output>"),
        );
        return;
    }
    write_block(out, name, value);
}

fn write_block(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(":\n");
    for line in value.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}

fn render_stack(location: &'static Location<'static>) -> String {
    let mut out = format!("stack:\n  {}:{}\n", location.file(), location.line());
    if let Some(snippet) = source_snippet(location.file(), location.line() as usize) {
        for line in snippet {
            out.push_str("    ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Reads the source line of the call, extending over following lines while
/// call delimiters remain unbalanced, so multi-line assertion calls appear
/// whole. The snippet is dedented to the first line's indentation.
fn source_snippet(file: &str, line: usize) -> Option<Vec<String>> {
    let text = fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = text.lines().collect();
    let first = line.checked_sub(1)?;
    let rest = lines.get(first..)?;
    let margin = leading_whitespace(rest.first()?);

    let mut snippet = Vec::new();
    let mut balance = 0i32;
    for raw in rest.iter().take(MAX_SNIPPET_LINES) {
        snippet.push(dedent(raw, margin).trim_end().to_string());
        balance += delimiter_balance(raw);
        if balance <= 0 {
            break;
        }
    }
    Some(snippet)
}

fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn dedent(line: &str, margin: usize) -> &str {
    let strip = leading_whitespace(line).min(margin);
    &line[strip..]
}

/// Net delimiter balance of a line, ignoring delimiters inside string
/// literals. A heuristic, but sufficient for locating the end of a call.
fn delimiter_balance(line: &str) -> i32 {
    let mut balance = 0;
    let mut in_string = false;
    let mut escaped = false;
    for ch in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '(' | '[' | '{' if !in_string => balance += 1,
            ')' | ']' | '}' if !in_string => balance -= 1,
            _ => {}
        }
    }
    balance
}
