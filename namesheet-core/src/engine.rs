//! Executes a [`RenamePlan`] inside one directory.
//!
//! Every entry is tried exactly once, in plan order, and always ends in one
//! [`RenameOutcome`]. Nothing that happens to a single entry stops the batch.

use crate::plan::{RenameEntry, RenamePlan};
use crate::report::{RenameOutcome, RenameReport, ReportItem};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The file namespace the engine renames within.
pub trait Namespace {
    /// Whether something (file, directory, or symlink, even dangling) lives at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    fn is_dry_run(&self) -> bool {
        false
    }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskNamespace;

impl Namespace for DiskNamespace {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// Reads the real filesystem but only records renames.
///
/// Earlier renames in the batch are visible to later entries, so a dry run
/// classifies each entry the way a real run would.
///
/// Planned paths are compared byte for byte. On a case-insensitive filesystem
/// a batch that renames `a.txt` to `A.txt` and then checks `a.txt` again can
/// classify differently here than on disk.
#[derive(Debug, Default)]
pub struct DryRunNamespace {
    vacated: HashSet<PathBuf>,
    created: HashSet<PathBuf>,
}

impl Namespace for DryRunNamespace {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.created.contains(path) {
            return Ok(true);
        }
        if self.vacated.contains(path) {
            return Ok(false);
        }
        DiskNamespace.exists(path)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        self.created.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.created.insert(to.to_path_buf());
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// Rename every entry of `plan` inside `directory` on disk.
pub fn execute(directory: &Path, plan: &RenamePlan) -> RenameReport {
    execute_with(&mut DiskNamespace, directory, plan)
}

/// Classify every entry of `plan` without touching the disk.
pub fn dry_run(directory: &Path, plan: &RenamePlan) -> RenameReport {
    execute_with(&mut DryRunNamespace::default(), directory, plan)
}

/// Run `plan` against an arbitrary namespace.
pub fn execute_with<N>(namespace: &mut N, directory: &Path, plan: &RenamePlan) -> RenameReport
where
    N: Namespace + ?Sized,
{
    info!(
        directory = %directory.display(),
        entries = plan.len(),
        dry_run = namespace.is_dry_run(),
        "Starting rename batch"
    );

    let items: Vec<ReportItem> = plan
        .iter()
        .map(|entry| {
            let outcome = rename_one(&mut *namespace, directory, entry);
            match &outcome {
                RenameOutcome::Succeeded => {
                    debug!(old = %entry.old_name, new = %entry.new_name, "Renamed");
                },
                other => {
                    warn!(
                        old = %entry.old_name,
                        new = %entry.new_name,
                        outcome = %other,
                        "Not renamed"
                    );
                },
            }
            ReportItem {
                entry: entry.clone(),
                outcome,
            }
        })
        .collect();

    let report = RenameReport::new(
        directory.to_path_buf(),
        namespace.is_dry_run(),
        items,
        plan.rejected.clone(),
    )
    .with_superseded(plan.superseded.clone());

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished rename batch"
    );

    report
}

fn rename_one<N>(namespace: &mut N, directory: &Path, entry: &RenameEntry) -> RenameOutcome
where
    N: Namespace + ?Sized,
{
    let old_path = directory.join(&entry.old_name);
    let new_path = directory.join(&entry.new_name);

    match namespace.exists(&old_path) {
        Ok(true) => {},
        Ok(false) => return RenameOutcome::SkippedSourceMissing,
        Err(e) => return RenameOutcome::failed(&e),
    }

    // Never overwrite: an existing destination always wins
    match namespace.exists(&new_path) {
        Ok(false) => {},
        Ok(true) => return RenameOutcome::SkippedAlreadyExists,
        Err(e) => return RenameOutcome::failed(&e),
    }

    match namespace.rename(&old_path, &new_path) {
        Ok(()) => RenameOutcome::Succeeded,
        Err(e) => RenameOutcome::failed(&e),
    }
}
