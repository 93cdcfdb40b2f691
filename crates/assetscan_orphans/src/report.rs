use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::REPORT_FILENAME;
use crate::types::ScanReport;

/// Render the fixed-section plain-text report.
///
/// Sections appear in a fixed order and are always emitted, header
/// included, even when they have no body lines.
pub fn render(report: &ScanReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Scan Timestamp: {}", report.timestamp));

    lines.push(String::new());
    lines.push("Current Directory Tree:".to_string());
    lines.extend(report.tree.iter().cloned());

    lines.push(String::new());
    lines.push("JS files referenced by HTML:".to_string());
    for (js, sources) in &report.markup_refs {
        if report.all_scripts.contains(js) {
            let source_list = sources.iter().cloned().collect::<Vec<_>>().join(", ");
            lines.push(format!("  - {js} <- {source_list}"));
        }
    }

    lines.push(String::new());
    lines.push("JS files referenced by JS imports:".to_string());
    for f in report.module_refs.iter().filter(|f| report.all_scripts.contains(*f)) {
        lines.push(format!("  - {f}"));
    }

    lines.push(String::new());
    lines.push("Potentially orphaned JS files:".to_string());
    for f in &report.orphaned_scripts {
        lines.push(format!("  - {f}"));
    }

    // Unlike the script sections, data targets are listed even when they
    // do not exist on disk (dangling references included).
    lines.push(String::new());
    lines.push("JSON files referenced (with function context):".to_string());
    for (json_file, sources) in &report.data_refs {
        let source_list = sources.iter().cloned().collect::<Vec<_>>().join(", ");
        lines.push(format!("  - {json_file} <- {source_list}"));
    }

    lines.push(String::new());
    lines.push("Potentially orphaned JSON files:".to_string());
    for f in &report.orphaned_data {
        lines.push(format!("  - {f}"));
    }

    lines.join("\n")
}

/// Write the rendered report into the scanned root. Write failures are the
/// one post-scan error that aborts the run.
pub fn write_report(root: &Path, rendered: &str) -> Result<PathBuf> {
    let output_path = root.join(REPORT_FILENAME);
    fs::write(&output_path, rendered)
        .with_context(|| format!("failed to write report to {}", output_path.display()))?;
    debug!("Report written to {}", output_path.display());
    Ok(output_path)
}
