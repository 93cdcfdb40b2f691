//! Extension classes for the asset tree.
//!
//! A file belongs to at most one class; classification drives both the
//! inventory walk and which reference patterns a file is scanned with.

/// Script files: scanned for module imports and data references, and the
/// class reported in the orphaned-scripts section.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js"];

/// Data files: never scanned themselves, only referenced.
pub const DATA_EXTENSIONS: &[&str] = &["json"];

/// Markup files: scanned for script includes and data references.
pub const MARKUP_EXTENSIONS: &[&str] = &["html"];
