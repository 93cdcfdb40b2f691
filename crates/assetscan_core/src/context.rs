//! Enclosing-function tracking for data references.
//!
//! A line-by-line fold, not a parse: every line inherits the name of the
//! nearest preceding function declaration. Declarations inside strings or
//! comments are counted too; that imprecision is accepted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Named `function name(` form, or `name = (...) =>` arrow form.
    static ref FUNC_PATTERN: Regex = Regex::new(
        r"function\s+([a-zA-Z0-9_$]+)\s*\(|([a-zA-Z0-9_$]+)\s*=\s*\(?.*?\)?\s*=>"
    )
    .unwrap();
}

/// Label every line of `text` with its enclosing function name.
///
/// Lines before any declaration are labeled `global`; a declaration whose
/// name cannot be captured yields `anonymous`.
pub fn context_labels(text: &str) -> Vec<String> {
    let mut current = String::from("global");
    text.lines()
        .map(|line| {
            if let Some(caps) = FUNC_PATTERN.captures(line) {
                current = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| String::from("anonymous"));
            }
            current.clone()
        })
        .collect()
}
