//! Static reference-graph builder for web-asset trees.
//!
//! Discovers script, data, and markup files under a root, extracts
//! cross-file references with regex patterns (markup script includes,
//! module imports, data-file reads), and reports which files nothing
//! refers to.
//!
//! Two quirks are preserved on purpose:
//! - Module import targets are lexically resolved against the referring
//!   file's directory, while markup and data targets are only stripped of
//!   leading `./`. References to the same physical file can therefore key
//!   differently across families.
//! - Extraction is regex over raw text, not parsing: references inside
//!   comments or strings still count, computed strings never do.
//!
//! # Examples
//!
//! ```no_run
//! use assetscan_orphans::{Config, OutputFormat, render, run_scan, write_report};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/site"),
//!     format: OutputFormat::Text,
//! };
//!
//! let report = run_scan(&cfg)?;
//! let rendered = render(&report);
//! write_report(&cfg.root, &rendered)?;
//! println!("{rendered}");
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod extract;
mod graph;
mod report;
mod types;

// Re-export public API
pub use checker::run_scan;
pub use config::{Config, OutputFormat, REPORT_FILENAME};
pub use report::{render, write_report};
pub use types::{RefKind, Reference, ScanReport};
