use crate::artifacts;
use crate::core::{FileOutcome, PassSummary, RunReport, Scope};
use crate::io;
use crate::io::output::TerminalReporter;
use crate::io::walker;
use crate::passes::{all_passes, quality_passes, security_passes, Pass};
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

pub struct FixConfig {
    pub root: PathBuf,
    pub quality_only: bool,
    pub security_only: bool,
    pub skip_artifacts: bool,
    pub quiet: bool,
}

/// Run the full pipeline: every selected pass in its declared order,
/// then the artifact writes. Per-file faults are absorbed into the
/// report; only faults outside the per-file loop propagate.
pub fn run_fix(config: &FixConfig) -> Result<RunReport> {
    let passes = select_passes(config);
    let reporter = TerminalReporter::new(config.quiet);
    let mut report = RunReport::new();

    let step_count = passes.len() + usize::from(!config.skip_artifacts);

    for (index, pass) in passes.iter().enumerate() {
        reporter.step_banner(index + 1, step_count, pass.label);
        let summary = run_pass(pass, &config.root, &reporter)
            .with_context(|| format!("pass '{}' aborted", pass.name))?;
        report.passes.push(summary);
    }

    if !config.skip_artifacts {
        reporter.step_banner(step_count, step_count, "Writing configuration artifacts");
        report.artifacts = artifacts::write_artifacts(&config.root)?;
        for path in &report.artifacts {
            reporter.artifact_written(path);
        }
    }

    reporter.final_banner(&report);
    Ok(report)
}

fn select_passes(config: &FixConfig) -> Vec<Pass> {
    match (config.quality_only, config.security_only) {
        (true, false) => quality_passes(),
        (false, true) => security_passes(),
        _ => all_passes(),
    }
}

fn run_pass(pass: &Pass, root: &Path, reporter: &TerminalReporter) -> Result<PassSummary> {
    let files = discover(pass.scope, root)?;
    debug!("pass '{}' covers {} file(s)", pass.name, files.len());

    let mut summary = PassSummary::new(pass.name);
    for path in files {
        let outcome = match process_file(pass, &path) {
            Ok(outcome) => outcome,
            Err(e) => FileOutcome::Failed {
                detail: format!("{e:#}"),
            },
        };
        reporter.file_outcome(&path, &outcome);
        summary.record(path, outcome);
    }
    Ok(summary)
}

fn discover(scope: Scope, root: &Path) -> Result<Vec<PathBuf>> {
    match scope {
        Scope::Tree => walker::find_python_files(root),
        Scope::Fixed(relative) => Ok(walker::resolve_fixed_paths(root, relative)),
    }
}

/// Apply one pass to one file; write back only when the text changed.
fn process_file(pass: &Pass, path: &Path) -> Result<FileOutcome> {
    let original = io::read_file(path)?;
    let updated = (pass.transform)(&original);

    if updated == original {
        return Ok(FileOutcome::Unchanged);
    }

    io::write_file(path, &updated)?;
    Ok(FileOutcome::Rewritten)
}
