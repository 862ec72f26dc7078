//! Parsing of bulk URL input.
//!
//! The management API accepts domain lists pasted as free text; entries may
//! be separated by whitespace, newlines, commas or semicolons.

use regex::Regex;
use std::sync::OnceLock;

static SEPARATORS: OnceLock<Regex> = OnceLock::new();

/// Splits a pasted blob of URLs into trimmed, non-empty entries.
pub fn split_url_list(input: &str) -> Vec<String> {
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[\s,;]+").expect("separator pattern"));

    re.split(input)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
