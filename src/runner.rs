//! Directory pass over the data set.
//!
//! Lists candidate files, validates each one independently, and collects the
//! outcomes into a `ValidationReport`. Only an unreadable directory aborts the
//! run; per-file read and parse failures become entries in the report.

use crate::model::Record;
use crate::record::validate_record;
use crate::report::{FileOutcome, ProductSummary, ValidationReport};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-name suffix of files treated as records.
pub const DATA_FILE_SUFFIX: &str = ".json";

/// Validate every record file in `dir`.
///
/// Files are processed in file-name order so reports are reproducible across
/// platforms.
pub fn validate_directory(dir: &Path) -> Result<ValidationReport> {
    let files = list_data_files(dir)?;
    let mut report = ValidationReport::new(dir.to_path_buf());

    if files.is_empty() {
        debug!(dir = %dir.display(), "no data files found");
        return Ok(report);
    }

    for path in files {
        let outcome = validate_file(&path);
        debug!(
            file = outcome.file(),
            errors = outcome.errors().len(),
            "validated record"
        );
        report.push(outcome);
    }

    Ok(report)
}

/// Validate one record file, folding read and parse failures into the outcome.
pub fn validate_file(path: &Path) -> FileOutcome {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let value = match read_json(path) {
        Ok(value) => value,
        Err(reason) => {
            return FileOutcome::Invalid {
                file,
                errors: vec![format!("Failed to parse JSON: {reason}")],
            };
        }
    };

    let errors = validate_record(&value);
    if !errors.is_empty() {
        return FileOutcome::Invalid { file, errors };
    }

    match serde_json::from_value::<Record>(value) {
        Ok(record) => FileOutcome::Valid {
            file,
            product: ProductSummary::from(&record),
        },
        Err(err) => FileOutcome::Invalid {
            file,
            errors: vec![format!("record does not match the typed model: {err}")],
        },
    }
}

/// List entries in `dir` whose name ends in `.json`, sorted.
///
/// Only real directories are skipped. Dangling symlinks and special files are
/// kept so the read failure is reported against the file instead of dropping
/// it. A failure while iterating the listing itself counts as an unreadable
/// directory.
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = || format!("Failed to read directory: {}", dir.display());
    let entries = fs::read_dir(dir).with_context(unreadable)?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(unreadable)?;
        if !entry.file_name().to_string_lossy().ends_with(DATA_FILE_SUFFIX) {
            continue;
        }
        if entry.file_type().with_context(unreadable)?.is_dir() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

fn read_json(path: &Path) -> Result<Value, String> {
    let data = fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&data).map_err(|err| err.to_string())
}
