//! Literal substring search across an asset tree.
//!
//! A deliberately simple grep: no regex, no binary-file handling beyond
//! skipping what fails to decode. Results are written to a `found[...]`
//! file named after the sanitized search term.

mod config;
mod search;

// Re-export public API
pub use config::Config;
pub use search::{FindOutcome, run_find, sanitize_filename, scan_for_substring};
