use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Name of the report file written into the scanned root.
pub const REPORT_FILENAME: &str = "scan.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "orphans")]
#[command(about = "Report unreferenced script and data files in a web-asset tree")]
pub struct Config {
    /// Root directory of the asset tree
    pub root: PathBuf,

    /// Stdout format; the scan.txt report file is always plain text
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
