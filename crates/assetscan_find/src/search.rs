use anyhow::{Context, Result};
use chrono::Local;
use ignore::WalkBuilder;
use log::{debug, info, trace};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

pub struct FindOutcome {
    pub matches: usize,
    pub output_path: PathBuf,
}

/// Scan every file under `root` for lines containing `needle`.
///
/// Entries are formatted `path [Ln n]: trimmed-line` with 1-based line
/// numbers. Files are visited in sorted path order so repeated runs
/// produce identical output. Unreadable or undecodable files are skipped.
pub fn scan_for_substring(root: &Path, needle: &str) -> Vec<String> {
    debug!("Searching for {:?} under {}", needle, root.display());

    let mut files: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .build()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    let mut results = Vec::new();
    for path in files {
        let Ok(text) = fs::read_to_string(&path) else {
            trace!("Skipping unreadable file: {}", path.display());
            continue;
        };
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_string_lossy().replace('\\', "/");
        for (i, line) in text.lines().enumerate() {
            if line.contains(needle) {
                results.push(format!("{} [Ln {}]: {}", rel, i + 1, line.trim()));
            }
        }
    }

    debug!("Found {} matching lines", results.len());
    results
}

/// Keep alphanumerics, `-` and `_`; everything else becomes `_`.
pub fn sanitize_filename(substring: &str) -> String {
    substring
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Run the search and save results to `found[<sanitized>].txt` in the
/// current working directory.
///
/// The output file always lands in the cwd, not under `--root`: the root
/// only controls where the search walks.
pub fn run_find(cfg: &Config) -> Result<FindOutcome> {
    let root = match &cfg.root {
        Some(r) => r.canonicalize().with_context(|| format!("cannot access {}", r.display()))?,
        None => env::current_dir()?,
    };
    info!("Searching for {:?} under {}", cfg.substring, root.display());

    let results = scan_for_substring(&root, &cfg.substring);
    let matches = results.len();

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let header = format!(
        "Scan Timestamp: {}\nSearch Substring: \"{}\"\nRoot Directory: {}\n\n",
        timestamp,
        cfg.substring,
        root.display()
    );
    let body =
        if results.is_empty() { "No matches found.".to_string() } else { results.join("\n") };

    let output_path = PathBuf::from(format!("found[{}].txt", sanitize_filename(&cfg.substring)));
    fs::write(&output_path, header + &body)
        .with_context(|| format!("failed to write results to {}", output_path.display()))?;

    Ok(FindOutcome { matches, output_path })
}
