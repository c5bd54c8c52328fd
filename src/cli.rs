use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Streaming per-file console report
    Terminal,
    /// Machine-readable run report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "codemend")]
#[command(about = "Automated code quality and security fixer for Python codebases", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all automated fixes under a directory
    Fix {
        /// Working root to fix
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the run report to a file (defaults to stdout for json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only run the quality passes (whitespace, imports, long lines,
        /// exception handling, docstrings)
        #[arg(long, conflicts_with = "security_only")]
        quality_only: bool,

        /// Only run the security passes
        #[arg(long)]
        security_only: bool,

        /// Do not emit configuration/build artifacts
        #[arg(long)]
        skip_artifacts: bool,
    },
}
