pub mod errors;

pub use errors::FixError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The set of files a pass operates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every Python file under the working root, recursively,
    /// in lexicographic path order.
    Tree,
    /// An ordered list of literal relative paths. Paths that do not
    /// exist in the working tree are skipped, not errors.
    Fixed(&'static [&'static str]),
}

/// Outcome of applying one pass to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Unchanged,
    Rewritten,
    Failed { detail: String },
}

impl FileOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, FileOutcome::Rewritten)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Per-pass aggregation of file outcomes, in processing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassSummary {
    pub name: String,
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl PassSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.files.push((path, outcome));
    }

    pub fn rewritten_count(&self) -> usize {
        self.files.iter().filter(|(_, o)| o.is_rewritten()).count()
    }

    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|(_, o)| o.is_failed()).count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.files.len() - self.rewritten_count() - self.error_count()
    }
}

/// Complete report for one run: every pass summary plus the artifacts
/// written. Artifacts are not part of the changed/unchanged accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: DateTime<Utc>,
    pub passes: Vec<PassSummary>,
    pub artifacts: Vec<PathBuf>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            passes: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn total_rewritten(&self) -> usize {
        self.passes.iter().map(|p| p.rewritten_count()).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.passes.iter().map(|p| p.error_count()).sum()
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
