use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Which pattern family produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    MarkupInclude,
    ModuleImport,
    DataRead,
}

/// A single extracted reference, consumed by graph aggregation.
#[derive(Debug, Clone)]
pub struct Reference {
    pub referrer: String,
    pub target: String,
    pub kind: RefKind,
    /// Enclosing function name; only attached to data reads.
    pub context: Option<String>,
}

/// Aggregated scan output. All collections are sorted so rendering the
/// same tree twice produces identical content (modulo the timestamp).
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub timestamp: String,
    pub tree: Vec<String>,
    /// Markup include target (stripped, unresolved) -> referring markup files.
    pub markup_refs: BTreeMap<String, BTreeSet<String>>,
    /// Module import targets, lexically resolved to root-relative paths.
    pub module_refs: BTreeSet<String>,
    /// Data reference target (stripped, unresolved) -> "referrer > context" labels.
    pub data_refs: BTreeMap<String, BTreeSet<String>>,
    pub all_scripts: BTreeSet<String>,
    pub all_data: BTreeSet<String>,
    pub orphaned_scripts: Vec<String>,
    pub orphaned_data: Vec<String>,
    pub files_scanned: usize,
}
