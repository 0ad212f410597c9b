//! Shared helpers for command handlers

use crate::error::Result;
use filesocial_schemas::{ErrorKind, ValidationError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Decode a record file's contents, attributing parse failures to the file
///
/// Parse failures surface as `InvalidJson` validation errors so a batch run
/// has a uniform error record per document; the engine itself never sees
/// undecoded input.
pub fn decode_document(path: &Path, content: &str) -> std::result::Result<Value, ValidationError> {
    serde_json::from_str(content).map_err(|e| {
        ValidationError::new(
            path.display().to_string(),
            "$",
            ErrorKind::InvalidJson,
            format!("invalid JSON ({})", e),
        )
    })
}

/// Recursively collect the record files under a directory, sorted by path
pub fn discover_records(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_json_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }

    Ok(())
}
