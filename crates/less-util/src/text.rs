//! String helpers.

use regex::{Captures, Regex};
use uuid::Uuid;

use crate::error::Result;

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// All non-overlapping matches of `pattern` in `haystack`, with captures.
pub fn scan<'h>(haystack: &'h str, pattern: &str) -> Result<Vec<Captures<'h>>> {
    let re = Regex::new(pattern)?;
    Ok(re.captures_iter(haystack).collect())
}

/// A random (v4) UUID in hyphenated form.
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}
