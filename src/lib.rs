//! Shared library for the agentic coder schema validator.
//!
//! The crate exposes the record validators, the typed record model, and the
//! directory runner used by the `validate-schemas` binary. Public functions
//! here form the contract the binary depends on: repository discovery, data
//! directory resolution, and the validation entry points.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod capability;
pub mod formats;
pub mod model;
pub mod record;
pub mod report;
pub mod runner;

pub use capability::{CapabilityName, validate_capability};
pub use formats::{is_valid_date, is_valid_url};
pub use model::{
    Capabilities, CapabilityEntry, Pricing, PricingModel, Record, SlashCommands, load_record,
};
pub use record::{TOP_LEVEL_KEYS, validate_record};
pub use report::{FileOutcome, ProductSummary, ReportSummary, ValidationReport};
pub use runner::{DATA_FILE_SUFFIX, list_data_files, validate_directory, validate_file};

/// Data directory relative to the repository root.
pub const DATA_DIR: &str = "data/agentic-coders";
const MANIFEST: &str = "Cargo.toml";

/// Returns true when `candidate` looks like the repository root.
///
/// Both the manifest and the data directory must be present so an unrelated
/// Cargo project above the install location is never mistaken for the root.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(MANIFEST).is_file() && candidate.join(DATA_DIR).is_dir()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root relative to the installed binary.
///
/// Climbs up from the current executable first, then falls back to the
/// checkout the binary was compiled from.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(root) = repo_root_from_hint(env!("CARGO_MANIFEST_DIR")) {
        return Ok(root);
    }

    bail!(
        "Unable to locate the repository root (expected {MANIFEST} next to {DATA_DIR}). Pass --data-dir to point at the records."
    );
}

/// The records directory under the discovered repository root.
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(find_repo_root()?.join(DATA_DIR))
}
