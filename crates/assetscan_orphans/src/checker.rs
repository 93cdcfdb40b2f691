use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use assetscan_core::{FileClass, collect_inventory, render_tree};

use crate::{
    config::Config,
    extract::extract_references,
    graph::{ReferenceGraph, orphaned},
    types::ScanReport,
};

/// Run the full orphan scan: inventory, extraction, aggregation, report
/// assembly. Per-file read or decode failures are logged and skipped; only
/// an unusable root is fatal here.
pub fn run_scan(cfg: &Config) -> Result<ScanReport> {
    info!("Starting orphan scan");

    let root = cfg
        .root
        .canonicalize()
        .with_context(|| format!("cannot access root directory {}", cfg.root.display()))?;
    info!("Using root directory: {}", root.display());

    let inventory = collect_inventory(&root)?;
    let tree = render_tree(&root);

    // Scripts and markup are the reference-producing classes.
    let candidates: Vec<(String, FileClass)> = inventory
        .scripts
        .iter()
        .map(|p| (p.clone(), FileClass::Script))
        .chain(inventory.markup.iter().map(|p| (p.clone(), FileClass::Markup)))
        .collect();
    info!("Scanning {} candidate files", candidates.len());

    let graph = ReferenceGraph::default();
    let files_scanned = AtomicUsize::new(0);
    candidates.par_iter().for_each(|(rel, class)| {
        let abs = root.join(rel);
        let text = match fs::read_to_string(&abs) {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping {}: {}", rel, e);
                return;
            }
        };
        files_scanned.fetch_add(1, Ordering::Relaxed);
        for reference in extract_references(rel, *class, &text) {
            graph.record(reference);
        }
    });

    let (markup_refs, module_refs, data_refs) = graph.into_sorted();

    let referenced_scripts: BTreeSet<String> =
        markup_refs.keys().cloned().chain(module_refs.iter().cloned()).collect();
    let orphaned_scripts = orphaned(&inventory.scripts, &referenced_scripts);

    let referenced_data: BTreeSet<String> = data_refs.keys().cloned().collect();
    let orphaned_data = orphaned(&inventory.data, &referenced_data);

    debug!(
        "Scan complete: {} orphaned scripts, {} orphaned data files",
        orphaned_scripts.len(),
        orphaned_data.len()
    );

    Ok(ScanReport {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        tree,
        markup_refs,
        module_refs,
        data_refs,
        all_scripts: inventory.scripts,
        all_data: inventory.data,
        orphaned_scripts,
        orphaned_data,
        files_scanned: files_scanned.into_inner(),
    })
}
