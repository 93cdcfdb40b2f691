//! Regex-based reference extraction.
//!
//! This is pattern matching, not parsing: references inside comments or
//! string literals are counted too, and computed reference strings are
//! invisible. Fast and approximate, kept as an explicit design choice.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use assetscan_core::{FileClass, context_labels, resolve, strip_dot_slash};

use crate::types::{RefKind, Reference};

lazy_static! {
    static ref SCRIPT_SRC: Regex =
        Regex::new(r#"(?i)<script\s+[^>]*src=["']([^"']+)["']"#).unwrap();
    static ref MODULE_IMPORT: Regex =
        Regex::new(r#"(?:import|require)\s*(?:.*from\s*)?['"]([^'"]+\.js)['"]"#).unwrap();
    static ref DATA_IMPORT: Regex =
        Regex::new(r#"import\s+[^\n]*?['"]([^'"]+\.json)['"]"#).unwrap();
    static ref DATA_REQUIRE: Regex =
        Regex::new(r#"require\s*\(?['"]([^'"]+\.json)['"]\)?"#).unwrap();
    static ref DATA_FETCH: Regex =
        Regex::new(r#"fetch\s*\(?['"]([^'"]+\.json)['"]\)?"#).unwrap();
}

/// Extract every reference a file produces, according to its class.
///
/// Markup files yield script includes and data reads; script files yield
/// module imports and data reads; data files yield nothing.
pub fn extract_references(referrer: &str, class: FileClass, text: &str) -> Vec<Reference> {
    let mut refs = Vec::new();
    match class {
        FileClass::Markup => markup_includes(referrer, text, &mut refs),
        FileClass::Script => module_imports(referrer, text, &mut refs),
        FileClass::Data => return refs,
    }
    data_reads(referrer, text, &mut refs);
    trace!("Extracted {} references from {}", refs.len(), referrer);
    refs
}

/// `<script src="...">` attributes, all occurrences, case-insensitive.
/// Targets are stripped but not resolved; see the resolver notes on the
/// unresolved/resolved asymmetry.
fn markup_includes(referrer: &str, text: &str, refs: &mut Vec<Reference>) {
    for caps in SCRIPT_SRC.captures_iter(text) {
        let target = strip_dot_slash(caps[1].trim()).to_string();
        trace!("Markup include '{}' in {}", target, referrer);
        refs.push(Reference {
            referrer: referrer.to_string(),
            target,
            kind: RefKind::MarkupInclude,
            context: None,
        });
    }
}

/// `import`/`require` statements whose literal argument ends in `.js`,
/// lexically resolved against the referring file's own directory.
fn module_imports(referrer: &str, text: &str, refs: &mut Vec<Reference>) {
    let dir = referrer_dir(referrer);
    for caps in MODULE_IMPORT.captures_iter(text) {
        let target = resolve(dir, &caps[1]);
        trace!("Module import '{}' -> '{}' in {}", &caps[1], target, referrer);
        refs.push(Reference {
            referrer: referrer.to_string(),
            target,
            kind: RefKind::ModuleImport,
            context: None,
        });
    }
}

/// Data-file reads: `import ... "x.json"`, `require("x.json")` and
/// `fetch("x.json")` forms, at most one match per pattern per line, each
/// labeled with the enclosing function from the line-context fold.
fn data_reads(referrer: &str, text: &str, refs: &mut Vec<Reference>) {
    let labels = context_labels(text);
    for (i, line) in text.lines().enumerate() {
        for pattern in [&*DATA_IMPORT, &*DATA_REQUIRE, &*DATA_FETCH] {
            if let Some(caps) = pattern.captures(line) {
                let target = strip_dot_slash(caps[1].trim()).to_string();
                let context = labels.get(i).cloned().unwrap_or_else(|| "global".to_string());
                trace!("Data read '{}' ({} > {}) on line {}", target, referrer, context, i + 1);
                refs.push(Reference {
                    referrer: referrer.to_string(),
                    target,
                    kind: RefKind::DataRead,
                    context: Some(context),
                });
            }
        }
    }
}

fn referrer_dir(referrer: &str) -> &str {
    referrer.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(refs: &[Reference], kind: RefKind) -> Vec<&str> {
        refs.iter().filter(|r| r.kind == kind).map(|r| r.target.as_str()).collect()
    }

    #[test]
    fn test_markup_includes_both_quote_styles() {
        let html = r#"<SCRIPT type="module" src="./app.js"></script>
<script src='lib/vendor.js'></script>"#;
        let refs = extract_references("index.html", FileClass::Markup, html);
        assert_eq!(targets(&refs, RefKind::MarkupInclude), vec!["app.js", "lib/vendor.js"]);
    }

    #[test]
    fn test_markup_target_is_stripped_not_resolved() {
        let html = r#"<script src="./b.js"></script>"#;
        let refs = extract_references("pages/index.html", FileClass::Markup, html);
        // Stays "b.js", not "pages/b.js".
        assert_eq!(targets(&refs, RefKind::MarkupInclude), vec!["b.js"]);
    }

    #[test]
    fn test_module_imports_resolved_against_referrer_dir() {
        let js = "import './c.js';\nimport u from '../lib/util.js';\n";
        let refs = extract_references("src/b.js", FileClass::Script, js);
        assert_eq!(targets(&refs, RefKind::ModuleImport), vec!["src/c.js", "lib/util.js"]);
    }

    #[test]
    fn test_require_call_form_not_matched_for_scripts() {
        // The module pattern has no optional paren, so a bare require()
        // call is a false negative. Only the data require pattern does.
        let js = "const u = require('./util.js');\n";
        let refs = extract_references("src/b.js", FileClass::Script, js);
        assert!(targets(&refs, RefKind::ModuleImport).is_empty());
    }

    #[test]
    fn test_module_import_from_clause() {
        let js = "import { thing } from \"./c.js\";\n";
        let refs = extract_references("b.js", FileClass::Script, js);
        assert_eq!(targets(&refs, RefKind::ModuleImport), vec!["c.js"]);
    }

    #[test]
    fn test_non_script_import_ignored_by_module_pattern() {
        let js = "import styles from './x.css';\n";
        let refs = extract_references("b.js", FileClass::Script, js);
        assert!(targets(&refs, RefKind::ModuleImport).is_empty());
    }

    #[test]
    fn test_data_read_carries_function_context() {
        let js = "function loadX() {\n  return fetch(\"./data/x.json\");\n}\n";
        let refs = extract_references("e.js", FileClass::Script, js);
        let data: Vec<_> = refs.iter().filter(|r| r.kind == RefKind::DataRead).collect();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].target, "data/x.json");
        assert_eq!(data[0].context.as_deref(), Some("loadX"));
    }

    #[test]
    fn test_data_read_global_before_declarations() {
        let js = "const cfg = require('./config.json');\n";
        let refs = extract_references("app.js", FileClass::Script, js);
        let data: Vec<_> = refs.iter().filter(|r| r.kind == RefKind::DataRead).collect();
        assert_eq!(data[0].target, "config.json");
        assert_eq!(data[0].context.as_deref(), Some("global"));
    }

    #[test]
    fn test_data_reads_in_markup_files() {
        let html = "<script>\nfetch('live.json');\n</script>\n";
        let refs = extract_references("index.html", FileClass::Markup, html);
        assert_eq!(targets(&refs, RefKind::DataRead), vec!["live.json"]);
    }

    #[test]
    fn test_one_match_per_data_pattern_per_line() {
        // The require pattern fires once even with two calls on one line;
        // fetch on the same line still fires independently.
        let js = "require('a.json'); require('b.json'); fetch('c.json');\n";
        let refs = extract_references("app.js", FileClass::Script, js);
        let mut data = targets(&refs, RefKind::DataRead);
        data.sort();
        assert_eq!(data, vec!["a.json", "c.json"]);
    }

    #[test]
    fn test_data_files_yield_nothing() {
        let refs = extract_references("x.json", FileClass::Data, "{\"a\": 1}");
        assert!(refs.is_empty());
    }
}
