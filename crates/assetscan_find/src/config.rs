use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "find")]
#[command(about = "Search every file under a root for a literal substring")]
pub struct Config {
    /// Substring to search for
    pub substring: String,

    /// Root directory to search (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}
