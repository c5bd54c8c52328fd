use crate::core::{FileOutcome, PassSummary, RunReport};
use colored::*;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Streaming console reporter. Per-file lines are printed as files are
/// processed so a long run shows progress, not a final dump.
pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn step_banner(&self, index: usize, total: usize, label: &str) {
        if self.quiet {
            return;
        }
        println!();
        println!("{} {}", format!("[{index}/{total}]").bold(), label.bold());
    }

    pub fn file_outcome(&self, path: &Path, outcome: &FileOutcome) {
        if self.quiet {
            return;
        }
        match outcome {
            FileOutcome::Rewritten => {
                println!("  {} {}", "✓".green(), path.display());
            }
            FileOutcome::Failed { detail } => {
                println!("  {} {}: {}", "✗".red(), path.display(), detail);
            }
            FileOutcome::Unchanged => {}
        }
    }

    pub fn artifact_written(&self, path: &Path) {
        if self.quiet {
            return;
        }
        println!("  {} {}", "✓".green(), path.display());
    }

    pub fn final_banner(&self, report: &RunReport) {
        if self.quiet {
            return;
        }
        let rewritten = report.total_rewritten();
        let errors = report.total_errors();

        println!();
        if errors == 0 {
            println!(
                "{} {} file rewrite(s), {} artifact(s) written",
                "All fixes applied.".green().bold(),
                rewritten,
                report.artifacts.len()
            );
        } else {
            println!(
                "{} {} file rewrite(s), {} artifact(s) written, {} file(s) failed",
                "Finished with errors.".yellow().bold(),
                rewritten,
                report.artifacts.len(),
                errors
            );
        }
    }
}

pub fn write_json_report<W: Write>(writer: &mut W, report: &RunReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn summarize_pass(summary: &PassSummary) -> String {
    format!(
        "{}: {} rewritten, {} unchanged, {} failed",
        summary.name,
        summary.rewritten_count(),
        summary.unchanged_count(),
        summary.error_count()
    )
}
