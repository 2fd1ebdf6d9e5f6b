//! Aggregate outcome of a directory run and its renderings.

use crate::capability::CapabilityName;
use crate::model::{PricingModel, Record};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Product facts pulled from a record that passed validation.
pub struct ProductSummary {
    pub name: String,
    pub vendor: String,
    pub pricing_model: PricingModel,
    pub supported_capabilities: Vec<CapabilityName>,
}

impl From<&Record> for ProductSummary {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            vendor: record.vendor.clone(),
            pricing_model: record.pricing.model,
            supported_capabilities: record.capabilities.supported(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Result of validating a single data file.
pub enum FileOutcome {
    Valid {
        file: String,
        product: ProductSummary,
    },
    Invalid {
        file: String,
        errors: Vec<String>,
    },
}

impl FileOutcome {
    pub fn file(&self) -> &str {
        match self {
            FileOutcome::Valid { file, .. } | FileOutcome::Invalid { file, .. } => file,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FileOutcome::Valid { .. })
    }

    /// Messages recorded against the file; empty for valid files.
    pub fn errors(&self) -> &[String] {
        match self {
            FileOutcome::Valid { .. } => &[],
            FileOutcome::Invalid { errors, .. } => errors,
        }
    }
}

#[derive(Debug, Clone)]
/// Per-file outcomes for one data directory, in processing order.
pub struct ValidationReport {
    pub data_dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

#[derive(Debug, Serialize)]
/// Serializable view used by `--format json`.
pub struct ReportSummary<'a> {
    pub data_dir: &'a Path,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub success: bool,
    pub files: &'a [FileOutcome],
}

impl ValidationReport {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.total() - self.valid_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_valid())
    }

    /// True when the directory held no candidate files.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Overall verdict: no file failed. An empty run counts as success.
    pub fn is_success(&self) -> bool {
        self.invalid_count() == 0
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            data_dir: &self.data_dir,
            total: self.total(),
            valid: self.valid_count(),
            invalid: self.invalid_count(),
            success: self.is_success(),
            files: &self.outcomes,
        }
    }

    /// Render the console report: success lines, summary block, then errors.
    pub fn render_text(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        for outcome in self.outcomes.iter().filter(|o| o.is_valid()) {
            writeln!(writer, "✅ {} is valid", outcome.file())?;
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(writer)?;
        writeln!(writer, "{rule}")?;
        writeln!(writer, "Validation Summary:")?;
        writeln!(writer, "  Total files: {}", self.total())?;
        writeln!(writer, "  Valid: {}", self.valid_count())?;
        writeln!(writer, "  Invalid: {}", self.invalid_count())?;
        writeln!(writer, "{rule}")?;

        if self.is_success() {
            writeln!(writer)?;
            writeln!(writer, "🎉 All schemas are valid!")?;
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "❌ Validation Errors:")?;
        for failure in self.failures() {
            writeln!(writer)?;
            writeln!(writer, "{}:", failure.file())?;
            for error in failure.errors() {
                writeln!(writer, "  • {error}")?;
            }
        }
        Ok(())
    }
}
