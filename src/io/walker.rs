use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories never worth scanning: VCS metadata, caches, virtualenvs.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/.git/**", "**/__pycache__/**", "**/venv/**"];

pub struct FileWalker {
    root: PathBuf,
    extension: String,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "py".to_string(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Enumerate matching files under the root. The result is sorted by
    /// path; report ordering and test assertions depend on this contract.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) if ext.to_string_lossy() == self.extension => {
                let path_str = path.to_string_lossy();
                for pattern in &self.ignore_patterns {
                    if glob::Pattern::new(pattern)
                        .map(|p| p.matches(&path_str))
                        .unwrap_or(false)
                    {
                        return false;
                    }
                }
                true
            }
            _ => false,
        }
    }
}

pub fn find_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf()).walk()
}

/// Resolve a fixed list of relative paths against the root, keeping list
/// order. Entries that do not exist are dropped silently; they stand for
/// optional files that may be absent from a given checkout.
pub fn resolve_fixed_paths(root: &Path, relative: &[&str]) -> Vec<PathBuf> {
    relative
        .iter()
        .map(|rel| root.join(rel))
        .filter(|path| crate::io::file_exists(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walk_finds_nested_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg/sub")).unwrap();
        fs::write(dir.path().join("zeta.py"), "").unwrap();
        fs::write(dir.path().join("pkg/alpha.py"), "").unwrap();
        fs::write(dir.path().join("pkg/sub/beta.py"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = find_python_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["pkg/alpha.py", "pkg/sub/beta.py", "zeta.py"]);
    }

    #[test]
    fn walk_skips_ignored_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("__pycache__")).unwrap();
        fs::write(dir.path().join("__pycache__/cached.py"), "").unwrap();
        fs::write(dir.path().join("real.py"), "").unwrap();

        let files = find_python_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.py"));
    }

    #[test]
    fn fixed_paths_skip_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("exploits")).unwrap();
        fs::write(dir.path().join("exploits/present.py"), "").unwrap();

        let resolved = resolve_fixed_paths(
            dir.path(),
            &["exploits/present.py", "exploits/absent.py"],
        );

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].ends_with("exploits/present.py"));
    }
}
