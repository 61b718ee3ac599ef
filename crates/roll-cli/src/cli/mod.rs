use clap::Parser;
use roll_config::RollConfig;

/// Top-level CLI parser for the `taskroll` binary.
///
/// Scans the current directory for markdown checkbox tasks and writes them,
/// grouped by date, into a single report file.
#[derive(Debug, Parser)]
#[command(
    name = "taskroll",
    version,
    about = "Roll up markdown checkbox tasks into one dated report"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output filename, relative to the current directory (default: TASKS.md)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render plain task text instead of links to the source file
    #[arg(long)]
    pub no_links: bool,

    /// Honor .gitignore/.ignore/.taskrollignore and skip hidden files
    #[arg(long)]
    pub respect_ignore: bool,

    /// Do not fall back to file creation time for undated file names
    #[arg(long)]
    pub no_creation_date: bool,

    /// Print the report to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line switches over the loaded configuration.
    ///
    /// Switches only ever turn behavior on or off relative to the defaults;
    /// an absent flag leaves the configured value alone.
    pub fn apply_to(&self, config: &mut RollConfig) {
        if let Some(output) = &self.output {
            config.report.output_filename.clone_from(output);
        }
        if self.no_links {
            config.report.links = false;
        }
        if self.respect_ignore {
            config.scan.respect_ignore_files = true;
        }
        if self.no_creation_date {
            config.scan.creation_date_fallback = false;
        }
    }
}
