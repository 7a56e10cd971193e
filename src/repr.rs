//! The value renderer.
//!
//! Every value that appears in a failure report goes through [`repr_of`],
//! which must be deterministic for a given logical value: duplicate-value
//! elision in the report compares rendered text, so two renderings of the
//! same value have to be byte-identical.
//!
//! Rendering rules:
//!
//! - strings are quoted (via their `Debug` form);
//! - primitive numerics, `bool` and `char` are type-qualified, e.g.
//!   `i32(42)`, because their bare rendering is ambiguous in a report;
//! - error values are rendered with a distinguishing `e` sigil, e.g.
//!   `e"file not found"`, so an error is never mistaken for the plain string
//!   of its message.

use std::fmt;

/// Types whose bare `Debug` output does not identify them. Closed list, kept
/// in sync with the primitive types the checkers accept.
const QUALIFIED: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "bool", "char",
];

/// Renders a value to its stable report text.
pub fn repr_of<T: fmt::Debug + ?Sized>(value: &T) -> String {
    let name = std::any::type_name::<T>();
    let body = format!("{value:?}");
    if QUALIFIED.contains(&name) {
        format!("{name}({body})")
    } else {
        body
    }
}

/// Renders an error value with the `e` sigil.
pub fn error_repr<E: std::error::Error + ?Sized>(err: &E) -> String {
    format!("e{:?}", err.to_string())
}

/// Recovers the text of a rendered string literal.
///
/// Returns `Some` only when `rendered` is a single quoted literal as produced
/// by `Debug` for `str` and `String`; compound renderings that merely start
/// and end with a quote (tuples of strings, for instance) are rejected
/// because their interior holds an unescaped quote.
pub(crate) fn string_literal(rendered: &str) -> Option<String> {
    let inner = rendered.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            return None;
        }
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '0' => out.push('\0'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }
                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        digit => hex.push(digit),
                    }
                }
                out.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

/// True when the text has a line break that is not merely a trailing newline.
pub(crate) fn is_multiline(text: &str) -> bool {
    match text.find('\n') {
        Some(index) => index < text.len() - 1,
        None => false,
    }
}
