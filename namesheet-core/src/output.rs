use crate::preview::render_summary;
use crate::report::RenameReport;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": if self.dry_run { "plan" } else { "run" },
            "directory": self.directory,
            "dry_run": self.dry_run,
            "summary": {
                "total": self.total(),
                "succeeded": self.succeeded(),
                "failed": self.failed(),
                "rejected_rows": self.rejected.len(),
                "superseded_rows": self.superseded.len(),
            },
            "entries": self.items,
            "rejected": self.rejected,
            "superseded": self.superseded,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        render_summary(self, false)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
