use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a rename batch.
///
/// Per-file problems hit while executing a plan are not errors; they are
/// recorded as [`crate::RenameOutcome`] values on the report.
#[derive(Debug, Error)]
pub enum NamesheetError {
    /// The target folder is missing or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The mapping spreadsheet does not exist.
    #[error("Mapping file not found: {}", .0.display())]
    MappingFileNotFound(PathBuf),

    /// The spreadsheet could not be opened or parsed.
    #[error("Failed to read spreadsheet {}: {message}", path.display())]
    Spreadsheet { path: PathBuf, message: String },

    /// The spreadsheet has no worksheet to read rows from.
    #[error("Spreadsheet has no worksheets: {}", .0.display())]
    EmptyWorkbook(PathBuf),

    /// A mapping row that cannot become a rename entry.
    #[error("Row {line}: {reason}")]
    InvalidRow { line: usize, reason: InvalidRowReason },
}

/// Why a mapping row was rejected while building a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidRowReason {
    #[error("old name is empty")]
    EmptyOldName,

    #[error("new name is empty")]
    EmptyNewName,

    #[error("'{name}' is not a file name")]
    NotAFileName { name: String },

    #[error("duplicate old name '{name}' (first seen on row {first_line})")]
    DuplicateOldName { name: String, first_line: usize },
}

impl NamesheetError {
    /// True for errors caused by what the user passed in, as opposed to
    /// failures of the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound(_)
                | Self::MappingFileNotFound(_)
                | Self::EmptyWorkbook(_)
                | Self::InvalidRow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NamesheetError>;
