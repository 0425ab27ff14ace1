#![deny(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod output;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "tagsight",
    about = "Find custom elements in JavaScript sources",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// File or directory to scan (shorthand for `tagsight scan <path>`).
    path: Option<PathBuf>,

    /// Output format: pretty, text, or json.
    #[arg(long, default_value = "pretty", requires = "path")]
    format: String,

    /// Exit 1 unless every listed tag name is defined in the scanned files.
    /// Comma-separated, e.g. `--assert-defined my-app,my-button`
    #[arg(long, value_delimiter = ',', requires = "path")]
    assert_defined: Option<Vec<String>>,

    /// Skip the content-addressed cache (always re-scan).
    #[arg(long, requires = "path")]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a file or directory (same as the bare-path form).
    Scan(ScanArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// File or directory to scan.
    path: PathBuf,

    #[arg(long, default_value = "pretty")]
    format: String,

    #[arg(long, value_delimiter = ',')]
    assert_defined: Option<Vec<String>>,

    #[arg(long)]
    no_cache: bool,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scan(a)) => {
            commands::scan::run(&a.path, &a.format, a.no_cache, a.assert_defined)
        }

        None => match cli.path {
            Some(path) => commands::scan::run(&path, &cli.format, cli.no_cache, cli.assert_defined),
            None => anyhow::bail!("no path given; run `tagsight <path>` or `tagsight scan <path>`"),
        },
    }
}
