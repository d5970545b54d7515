//! CLI argument definitions for CSV populator.

use clap::Args;
use std::path::PathBuf;

// Re-export CommonPopulateArgs for convenience
pub use catalog_populate::CommonPopulateArgs;

/// CSV-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct CsvPopulateArgs {
    /// Output CSV file (`-` writes to stdout)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl CsvPopulateArgs {
    /// Whether output goes to stdout rather than a file.
    pub fn is_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
