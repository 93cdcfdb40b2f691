use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

use assetscan_orphans::OutputFormat;

#[derive(Parser)]
#[command(name = "assetscan")]
#[command(about = "Tools for auditing web-asset trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report unreferenced script and data files under a root directory
    Orphans(assetscan_orphans::Config),
    /// Search every file under a root for a literal substring
    Find(assetscan_find::Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Orphans(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Running orphan scan on {} (using {} threads)",
                cfg.root.display(),
                num_threads
            );

            let report = assetscan_orphans::run_scan(&cfg)?;
            let rendered = assetscan_orphans::render(&report);
            let output_path = assetscan_orphans::write_report(&cfg.root, &rendered)?;

            match cfg.format {
                OutputFormat::Text => writeln!(stdout, "{rendered}")?,
                OutputFormat::Json => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
                }
            }

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Report saved to {}. Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                output_path.display().to_string().blue(),
                elapsed_ms.to_string().cyan(),
                report.files_scanned.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;
        }
        Commands::Find(cfg) => {
            info!("Searching for {:?}", cfg.substring);

            let outcome = assetscan_find::run_find(&cfg)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "{} Scan complete. {} matching lines saved to {}. Finished in {}ms.",
                "●".bright_blue(),
                outcome.matches.to_string().cyan(),
                outcome.output_path.display().to_string().blue(),
                elapsed_ms.to_string().cyan()
            )?;
            stdout.flush()?;
        }
    }

    Ok(())
}
