pub mod output;
pub mod walker;

use crate::core::FixError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn read_file(path: &Path) -> Result<String, FixError> {
    fs::read_to_string(path).map_err(|e| FixError::read(path, e))
}

/// Write the full new content to a sibling temp file, then rename it over
/// the target. A crash mid-write leaves the original file intact.
pub fn write_file(path: &Path, content: &str) -> Result<(), FixError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|e| FixError::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| FixError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| FixError::write(path, e.error))?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
