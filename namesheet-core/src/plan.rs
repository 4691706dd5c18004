use crate::error::InvalidRowReason;
use crate::mapping::MappingRow;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A single file to rename inside the target directory.
///
/// Both names are bare file names; any directory part present in the mapping
/// has already been stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub old_name: String,
    pub new_name: String,
}

impl RenameEntry {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

/// A mapping row that was left out of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub line: usize,
    pub old: String,
    pub new: String,
    pub reason: InvalidRowReason,
}

/// A row whose target was replaced by a later row with the same old name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersededRow {
    pub line: usize,
    pub old_name: String,
    pub new_name: String,
    pub replaced_by_line: usize,
}

/// How to treat a mapping that names the same old file more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The last row for an old name wins.
    #[default]
    LastWins,
    /// Rows after the first for an old name are rejected.
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-wins" | "last_wins" => Ok(Self::LastWins),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("Invalid duplicate policy: {}", s)),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastWins => f.write_str("last-wins"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// The deduplicated set of renames for one run.
///
/// `entries` is ordered by the first row that mentioned each old name and
/// every `old_name` appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
    pub rejected: Vec<RejectedRow>,
    pub superseded: Vec<SupersededRow>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reduce a path-like cell value to its final component.
///
/// Both `/` and `\` count as separators on every platform, since mapping
/// sheets are often produced on Windows and consumed elsewhere.
pub fn file_name_of(raw: &str) -> &str {
    raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or("")
}

fn check_name(name: &str, empty: InvalidRowReason) -> Result<(), InvalidRowReason> {
    if name.trim().is_empty() {
        return Err(empty);
    }
    if name == "." || name == ".." {
        return Err(InvalidRowReason::NotAFileName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Build a plan with the default duplicate policy (last row wins).
pub fn build_plan(rows: &[MappingRow]) -> RenamePlan {
    build_plan_with(rows, DuplicatePolicy::default())
}

/// Build a plan from raw mapping rows.
///
/// Invalid rows are skipped and recorded on the plan; they never abort the
/// build.
pub fn build_plan_with(rows: &[MappingRow], policy: DuplicatePolicy) -> RenamePlan {
    // old name -> (line, new name)
    let mut targets: IndexMap<String, (usize, String)> = IndexMap::new();
    let mut rejected = Vec::new();
    let mut superseded = Vec::new();

    for row in rows {
        let old_name = file_name_of(&row.old);
        let new_name = file_name_of(&row.new);

        let checked = check_name(old_name, InvalidRowReason::EmptyOldName)
            .and_then(|()| check_name(new_name, InvalidRowReason::EmptyNewName));
        if let Err(reason) = checked {
            warn!(line = row.line, %reason, "Skipping mapping row");
            rejected.push(RejectedRow {
                line: row.line,
                old: row.old.clone(),
                new: row.new.clone(),
                reason,
            });
            continue;
        }

        if let Some(slot) = targets.get_mut(old_name) {
            match policy {
                DuplicatePolicy::Reject => {
                    let reason = InvalidRowReason::DuplicateOldName {
                        name: old_name.to_string(),
                        first_line: slot.0,
                    };
                    warn!(line = row.line, %reason, "Skipping mapping row");
                    rejected.push(RejectedRow {
                        line: row.line,
                        old: row.old.clone(),
                        new: row.new.clone(),
                        reason,
                    });
                },
                DuplicatePolicy::LastWins => {
                    debug!(
                        line = row.line,
                        old = old_name,
                        "Later row overrides earlier target"
                    );
                    let (line, previous) =
                        std::mem::replace(slot, (row.line, new_name.to_string()));
                    superseded.push(SupersededRow {
                        line,
                        old_name: old_name.to_string(),
                        new_name: previous,
                        replaced_by_line: row.line,
                    });
                },
            }
        } else {
            targets.insert(old_name.to_string(), (row.line, new_name.to_string()));
        }
    }

    let entries = targets
        .into_iter()
        .map(|(old_name, (_, new_name))| RenameEntry { old_name, new_name })
        .collect();

    RenamePlan {
        entries,
        rejected,
        superseded,
    }
}
