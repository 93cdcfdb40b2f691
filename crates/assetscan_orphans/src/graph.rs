use dashmap::{DashMap, DashSet};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{RefKind, Reference};

/// Concurrent reference accumulator.
///
/// Records are pure set/mapping unions, so the result is independent of
/// the order worker threads insert in; sorting happens once at drain time.
#[derive(Debug, Default)]
pub struct ReferenceGraph {
    markup: DashMap<String, BTreeSet<String>>,
    modules: DashSet<String>,
    data: DashMap<String, BTreeSet<String>>,
}

impl ReferenceGraph {
    pub fn record(&self, reference: Reference) {
        match reference.kind {
            RefKind::MarkupInclude => {
                self.markup.entry(reference.target).or_default().insert(reference.referrer);
            }
            RefKind::ModuleImport => {
                self.modules.insert(reference.target);
            }
            RefKind::DataRead => {
                let context = reference.context.as_deref().unwrap_or("global");
                let label = format!("{} > {}", reference.referrer, context);
                self.data.entry(reference.target).or_default().insert(label);
            }
        }
    }

    /// Drain into sorted form: (markup target -> referrers, module targets,
    /// data target -> labels).
    pub fn into_sorted(
        self,
    ) -> (BTreeMap<String, BTreeSet<String>>, BTreeSet<String>, BTreeMap<String, BTreeSet<String>>)
    {
        let markup: BTreeMap<_, _> = self.markup.into_iter().collect();
        let modules: BTreeSet<_> = self.modules.into_iter().collect();
        let data: BTreeMap<_, _> = self.data.into_iter().collect();
        debug!(
            "Graph drained: {} markup targets, {} module targets, {} data targets",
            markup.len(),
            modules.len(),
            data.len()
        );
        (markup, modules, data)
    }
}

/// Files of a class present in the inventory but never referenced.
/// Dangling references (targets not on disk) simply contribute nothing.
pub fn orphaned(inventory: &BTreeSet<String>, referenced: &BTreeSet<String>) -> Vec<String> {
    inventory.difference(referenced).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup_ref(referrer: &str, target: &str) -> Reference {
        Reference {
            referrer: referrer.to_string(),
            target: target.to_string(),
            kind: RefKind::MarkupInclude,
            context: None,
        }
    }

    fn data_ref(referrer: &str, target: &str, context: &str) -> Reference {
        Reference {
            referrer: referrer.to_string(),
            target: target.to_string(),
            kind: RefKind::DataRead,
            context: Some(context.to_string()),
        }
    }

    #[test]
    fn test_record_deduplicates_referrers() {
        let graph = ReferenceGraph::default();
        graph.record(markup_ref("a.html", "b.js"));
        graph.record(markup_ref("a.html", "b.js"));
        graph.record(markup_ref("c.html", "b.js"));

        let (markup, _, _) = graph.into_sorted();
        let referrers: Vec<_> = markup["b.js"].iter().collect();
        assert_eq!(referrers, vec!["a.html", "c.html"]);
    }

    #[test]
    fn test_data_labels_combine_referrer_and_context() {
        let graph = ReferenceGraph::default();
        graph.record(data_ref("e.js", "data/x.json", "loadX"));

        let (_, _, data) = graph.into_sorted();
        assert!(data["data/x.json"].contains("e.js > loadX"));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let forward = ReferenceGraph::default();
        let reverse = ReferenceGraph::default();
        let refs = [
            markup_ref("a.html", "x.js"),
            markup_ref("b.html", "x.js"),
            data_ref("a.js", "d.json", "go"),
            data_ref("b.js", "d.json", "global"),
        ];
        for r in refs.iter() {
            forward.record(r.clone());
        }
        for r in refs.iter().rev() {
            reverse.record(r.clone());
        }

        assert_eq!(forward.into_sorted(), reverse.into_sorted());
    }

    #[test]
    fn test_orphaned_is_sorted_difference() {
        let inventory: BTreeSet<String> =
            ["a.js", "b.js", "d.js"].iter().map(|s| s.to_string()).collect();
        let referenced: BTreeSet<String> =
            ["b.js", "missing.js"].iter().map(|s| s.to_string()).collect();

        let orphans = orphaned(&inventory, &referenced);
        assert_eq!(orphans, vec!["a.js", "d.js"]);
        // No overlap between the two reported sets.
        assert!(orphans.iter().all(|o| !referenced.contains(o)));
    }
}
