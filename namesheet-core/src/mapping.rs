//! Reading the old/new name mapping out of a spreadsheet.
//!
//! The workbook is parsed by `calamine`; this module only decides which row is
//! a header, which columns hold the names, and turns cells into strings.

use crate::error::{NamesheetError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One raw (old, new) pair as it appears in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    /// 1-based row number in the worksheet
    pub line: usize,
    pub old: String,
    pub new: String,
}

impl MappingRow {
    pub fn new(line: usize, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            line,
            old: old.into(),
            new: new.into(),
        }
    }

    /// Number a list of pairs from row 1, as a headerless sheet would be.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Self> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (old, new))| Self::new(i + 1, *old, *new))
            .collect()
    }
}

/// Whether the first non-empty row of the sheet is a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderMode {
    /// Decide with [`is_headerless`]
    #[default]
    Auto,
    Present,
    Absent,
}

impl FromStr for HeaderMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "present" | "yes" => Ok(Self::Present),
            "absent" | "no" => Ok(Self::Absent),
            _ => Err(format!("Invalid header mode: {}", s)),
        }
    }
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Present => f.write_str("present"),
            Self::Absent => f.write_str("absent"),
        }
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// A row is headerless when every non-empty value in it is non-text.
///
/// A row of only blank cells is not headerless; callers skip blank rows
/// before asking.
pub fn is_headerless(row: &[Data]) -> bool {
    let mut values = row.iter().filter(|c| !is_blank(c)).peekable();
    values.peek().is_some() && values.all(|c| !matches!(c, Data::String(_)))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Locate the `old` and `new` columns by header name, falling back to the
/// first two columns.
fn name_columns(header: &[Data]) -> (usize, usize) {
    let find = |wanted: &str| {
        header
            .iter()
            .position(|c| cell_text(c).trim().eq_ignore_ascii_case(wanted))
    };
    match (find("old"), find("new")) {
        (Some(old), Some(new)) if old != new => (old, new),
        _ => (0, 1),
    }
}

/// Turn worksheet rows into mapping rows.
///
/// `first_line` is the sheet row number of the first item in `rows`. Fully
/// blank rows are dropped; rows with only one name still come through so the
/// planner can report them.
pub fn parse_rows<'a, I>(rows: I, first_line: usize, header: HeaderMode) -> Vec<MappingRow>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| (first_line + i, cells))
        .filter(|(_, cells)| !cells.iter().all(is_blank))
        .peekable();

    let Some((_, first)) = rows.peek().copied() else {
        return Vec::new();
    };

    let has_header = match header {
        HeaderMode::Auto => !is_headerless(first),
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
    };

    let (old_col, new_col) = if has_header {
        rows.next();
        name_columns(first)
    } else {
        (0, 1)
    };
    debug!(has_header, old_col, new_col, "Resolved mapping columns");

    rows.map(|(line, cells)| MappingRow {
        line,
        old: cells.get(old_col).map(cell_text).unwrap_or_default(),
        new: cells.get(new_col).map(cell_text).unwrap_or_default(),
    })
    .collect()
}

/// Read the mapping from the first worksheet of a spreadsheet file.
pub fn load_mapping(path: &Path, header: HeaderMode) -> Result<Vec<MappingRow>> {
    if !path.is_file() {
        return Err(NamesheetError::MappingFileNotFound(path.to_path_buf()));
    }

    let spreadsheet_error = |message: String| NamesheetError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| NamesheetError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    let first_line = range.start().map_or(1, |(row, _)| row as usize + 1);
    let rows = parse_rows(range.rows(), first_line, header);
    debug!(path = %path.display(), rows = rows.len(), "Loaded mapping");
    Ok(rows)
}
