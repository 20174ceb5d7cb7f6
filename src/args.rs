use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind Converter CLI - Suggests utility classes for inline JSX style objects
#[derive(Parser, Debug)]
#[command(name = "tailwind-converter-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest utility classes for one file (prompts for the path if omitted)
    Suggest(SuggestArgs),
    /// Scan file trees and emit a conversion report
    Scan(ScanArgs),
    /// Read source from stdin and print suggestions to stdout
    Pipe(PipeArgs),
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// File to convert, relative to the base directory
    #[arg(
        value_name = "FILE",
        help = "File to convert; when omitted, the path is prompted for on stdin"
    )]
    pub file: Option<PathBuf>,

    /// Base directory against which the file path is resolved
    #[arg(
        short = 'd',
        long = "base-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Base directory against which the file path is resolved"
    )]
    pub base_dir: PathBuf,
}

/// Arguments for the scan command
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Input file patterns (glob patterns supported)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Input file patterns to scan for inline styles"
    )]
    pub input: Vec<String>,

    /// Exclude patterns (glob patterns to exclude)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Patterns to exclude from scanning"
    )]
    pub exclude: Vec<String>,

    /// Output report file path (JSON)
    #[arg(
        short = 'o',
        long = "output-report",
        value_name = "PATH",
        help = "Path where the JSON report will be written; omit to print to stdout"
    )]
    pub output_report: Option<PathBuf>,

    /// Emit JSON instead of the human-readable report
    #[arg(
        long = "json",
        default_value_t = false,
        help = "Emit the report as JSON on stdout"
    )]
    pub json: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of parallel threads to use (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone)]
pub struct PipeArgs {
    /// Emit JSON instead of the human-readable report
    #[arg(
        long = "json",
        default_value_t = false,
        help = "Emit the report as JSON on stdout"
    )]
    pub json: bool,
}

impl ScanArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("At least one input pattern must be provided".to_string());
        }

        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err("Number of jobs must be at least 1".to_string());
            }
        }

        Ok(())
    }
}
