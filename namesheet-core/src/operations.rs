//! High-level operations that correspond to CLI commands
//!
//! These wire the loader, planner, and engine together and check the
//! preconditions the engine itself does not, separated from CLI concerns like
//! argument parsing and output formatting.

use crate::config::DEFAULT_MAPPING_FILE;
use crate::engine;
use crate::error::{NamesheetError, Result};
use crate::mapping::{load_mapping, HeaderMode};
use crate::plan::{build_plan_with, DuplicatePolicy};
use crate::report::RenameReport;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Folder whose files are renamed
    pub directory: PathBuf,
    /// Mapping spreadsheet; defaults to `rename.xlsx` inside `directory`
    pub mapping: Option<PathBuf>,
    pub header: HeaderMode,
    pub duplicates: DuplicatePolicy,
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            mapping: None,
            header: HeaderMode::default(),
            duplicates: DuplicatePolicy::default(),
            dry_run: false,
        }
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.mapping
            .clone()
            .unwrap_or_else(|| self.directory.join(DEFAULT_MAPPING_FILE))
    }
}

/// Fail unless `directory` exists and is a directory.
pub fn check_directory(directory: &Path) -> Result<()> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(NamesheetError::DirectoryNotFound(directory.to_path_buf()))
    }
}

/// Load the mapping, build the plan, and run it (or dry-run it).
pub fn run_operation(options: &RunOptions) -> Result<RenameReport> {
    check_directory(&options.directory)?;

    let mapping_path = options.mapping_path();
    if !mapping_path.is_file() {
        return Err(NamesheetError::MappingFileNotFound(mapping_path));
    }

    let rows = load_mapping(&mapping_path, options.header)?;
    let plan = build_plan_with(&rows, options.duplicates);
    info!(
        mapping = %mapping_path.display(),
        rows = rows.len(),
        entries = plan.len(),
        rejected = plan.rejected.len(),
        "Built rename plan"
    );

    let report = if options.dry_run {
        engine::dry_run(&options.directory, &plan)
    } else {
        engine::execute(&options.directory, &plan)
    };
    Ok(report)
}
