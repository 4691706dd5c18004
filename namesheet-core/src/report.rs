use crate::plan::{RejectedRow, RenameEntry, SupersededRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What happened to one plan entry. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenameOutcome {
    Succeeded,
    SkippedAlreadyExists,
    SkippedSourceMissing,
    Failed { reason: String },
}

impl RenameOutcome {
    pub(crate) fn failed(err: &std::io::Error) -> Self {
        Self::Failed {
            reason: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Short label used in tables and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "renamed",
            Self::SkippedAlreadyExists => "target exists",
            Self::SkippedSourceMissing => "source missing",
            Self::Failed { .. } => "error",
        }
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "error: {}", reason),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(flatten)]
    pub entry: RenameEntry,
    #[serde(flatten)]
    pub outcome: RenameOutcome,
}

impl ReportItem {
    /// Human-readable line describing this item.
    pub fn message(&self, dry_run: bool) -> String {
        let RenameEntry { old_name, new_name } = &self.entry;
        match &self.outcome {
            RenameOutcome::Succeeded if dry_run => {
                format!("Would rename '{}' to '{}'", old_name, new_name)
            },
            RenameOutcome::Succeeded => format!("Renamed '{}' to '{}'", old_name, new_name),
            RenameOutcome::SkippedAlreadyExists => format!(
                "Cannot rename '{}' to '{}' - file already exists",
                old_name, new_name
            ),
            RenameOutcome::SkippedSourceMissing => {
                format!("Source file not found: '{}'", old_name)
            },
            RenameOutcome::Failed { reason } => {
                format!("Error renaming '{}': {}", old_name, reason)
            },
        }
    }
}

/// Result of one batch run. Built once by the engine and only read after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub items: Vec<ReportItem>,
    /// Mapping rows that never made it into the plan
    pub rejected: Vec<RejectedRow>,
    /// Rows whose target a later row with the same old name replaced
    #[serde(default)]
    pub superseded: Vec<SupersededRow>,
}

impl RenameReport {
    pub fn new(
        directory: PathBuf,
        dry_run: bool,
        items: Vec<ReportItem>,
        rejected: Vec<RejectedRow>,
    ) -> Self {
        Self {
            directory,
            dry_run,
            items,
            rejected,
            superseded: Vec::new(),
        }
    }

    pub fn with_superseded(mut self, superseded: Vec<SupersededRow>) -> Self {
        self.superseded = superseded;
        self
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_success()).count()
    }

    /// Entries that were skipped or failed.
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.rejected.is_empty()
    }

    pub fn success_messages(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.outcome.is_success())
            .map(|i| i.message(self.dry_run))
            .collect()
    }

    /// Skip and failure descriptions in plan order.
    pub fn failure_messages(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| !i.outcome.is_success())
            .map(|i| i.message(self.dry_run))
            .collect()
    }

    pub fn rejected_messages(&self) -> Vec<String> {
        self.rejected
            .iter()
            .map(|r| format!("Row {}: {}", r.line, r.reason))
            .collect()
    }

    pub fn superseded_messages(&self) -> Vec<String> {
        self.superseded
            .iter()
            .map(|s| {
                format!(
                    "Row {}: '{}' -> '{}' overridden by row {}",
                    s.line, s.old_name, s.new_name, s.replaced_by_line
                )
            })
            .collect()
    }
}
