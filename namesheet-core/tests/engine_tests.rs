use namesheet_core::{
    build_plan, build_plan_with, dry_run, execute, DuplicatePolicy, MappingRow, RenameEntry,
    RenameOutcome,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn outcomes(report: &namesheet_core::RenameReport) -> Vec<RenameOutcome> {
    report.items.iter().map(|i| i.outcome.clone()).collect()
}

#[test]
fn test_renames_every_present_file() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    touch(temp_dir.path(), "b.txt", "b");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt"), ("b.txt", "y.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 0);
    assert!(report.is_clean());
    assert_eq!(listing(temp_dir.path()), vec!["x.txt", "y.txt"]);
    assert_eq!(fs::read_to_string(temp_dir.path().join("x.txt")).unwrap(), "a");
}

#[test]
fn test_missing_source_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt"), ("b.txt", "y.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.items[1].entry, RenameEntry::new("b.txt", "y.txt"));
    assert_eq!(report.items[1].outcome, RenameOutcome::SkippedSourceMissing);
    assert_eq!(report.failure_messages(), vec!["Source file not found: 'b.txt'"]);
}

#[test]
fn test_existing_destination_is_never_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "source");
    touch(temp_dir.path(), "x.txt", "precious");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(outcomes(&report), vec![RenameOutcome::SkippedAlreadyExists]);
    assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "source");
    assert_eq!(fs::read_to_string(temp_dir.path().join("x.txt")).unwrap(), "precious");
    assert_eq!(
        report.failure_messages(),
        vec!["Cannot rename 'a.txt' to 'x.txt' - file already exists"]
    );
}

#[test]
fn test_existing_directory_blocks_destination() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    fs::create_dir(temp_dir.path().join("x.txt")).unwrap();

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(outcomes(&report), vec![RenameOutcome::SkippedAlreadyExists]);
    assert!(temp_dir.path().join("a.txt").is_file());
}

// Duplicate old names: the last row wins by default. The reject policy is the
// alternative and is pinned here too.
#[test]
fn test_duplicate_rows_last_one_wins() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");

    let rows = MappingRow::from_pairs(&[("a.txt", "x.txt"), ("a.txt", "z.txt")]);
    let plan = build_plan(&rows);
    assert_eq!(plan.entries, vec![RenameEntry::new("a.txt", "z.txt")]);

    let report = execute(temp_dir.path(), &plan);
    assert_eq!(outcomes(&report), vec![RenameOutcome::Succeeded]);
    assert_eq!(listing(temp_dir.path()), vec!["z.txt"]);
}

#[test]
fn test_duplicate_rows_rejected_when_asked() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");

    let rows = MappingRow::from_pairs(&[("a.txt", "x.txt"), ("a.txt", "z.txt")]);
    let plan = build_plan_with(&rows, DuplicatePolicy::Reject);
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(listing(temp_dir.path()), vec!["x.txt"]);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line, 2);
    assert!(!report.is_clean());
}

#[test]
fn test_only_basenames_are_used() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");

    let plan = build_plan(&MappingRow::from_pairs(&[(r"C:\data\a.txt", "b.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(report.succeeded(), 1);
    assert_eq!(listing(temp_dir.path()), vec!["b.txt"]);
}

#[test]
fn test_second_run_finds_sources_gone() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    touch(temp_dir.path(), "b.txt", "b");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt"), ("b.txt", "y.txt")]));

    let first = execute(temp_dir.path(), &plan);
    assert!(first.items.iter().all(|i| i.outcome == RenameOutcome::Succeeded));

    let second = execute(temp_dir.path(), &plan);
    assert!(second
        .items
        .iter()
        .all(|i| i.outcome == RenameOutcome::SkippedSourceMissing));
    assert_eq!(listing(temp_dir.path()), vec!["x.txt", "y.txt"]);
}

#[test]
fn test_missing_directory_skips_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let gone = temp_dir.path().join("gone");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt"), ("b.txt", "y.txt")]));
    let report = execute(&gone, &plan);

    assert_eq!(report.total(), 2);
    assert_eq!(
        outcomes(&report),
        vec![
            RenameOutcome::SkippedSourceMissing,
            RenameOutcome::SkippedSourceMissing,
        ]
    );
}

#[test]
fn test_rename_to_same_name_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "a.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(outcomes(&report), vec![RenameOutcome::SkippedAlreadyExists]);
    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_swap_needs_free_name() {
    // a<->b cannot be done in one batch without overwriting
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    touch(temp_dir.path(), "b.txt", "b");

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "b.txt"), ("b.txt", "a.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(report.succeeded(), 0);
    assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "a");
    assert_eq!(fs::read_to_string(temp_dir.path().join("b.txt")).unwrap(), "b");
}

#[test]
fn test_later_entries_see_earlier_renames() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "b.txt", "b");
    touch(temp_dir.path(), "a.txt", "a");

    // b moves out of the way first, then a takes its old name
    let plan = build_plan(&MappingRow::from_pairs(&[("b.txt", "c.txt"), ("a.txt", "b.txt")]));
    let report = execute(temp_dir.path(), &plan);

    assert_eq!(report.succeeded(), 2);
    assert_eq!(fs::read_to_string(temp_dir.path().join("b.txt")).unwrap(), "a");
    assert_eq!(fs::read_to_string(temp_dir.path().join("c.txt")).unwrap(), "b");
}

#[test]
fn test_dry_run_matches_real_run_and_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    touch(temp_dir.path(), "c.txt", "c");
    touch(temp_dir.path(), "z.txt", "z");

    let plan = build_plan(&MappingRow::from_pairs(&[
        ("a.txt", "b.txt"),
        ("b.txt", "d.txt"),
        ("c.txt", "z.txt"),
        ("missing.txt", "q.txt"),
    ]));

    let preview = dry_run(temp_dir.path(), &plan);
    assert!(preview.dry_run);
    assert_eq!(listing(temp_dir.path()), vec!["a.txt", "c.txt", "z.txt"]);

    let real = execute(temp_dir.path(), &plan);
    assert!(!real.dry_run);
    assert_eq!(outcomes(&preview), outcomes(&real));
    assert_eq!(listing(temp_dir.path()), vec!["c.txt", "d.txt", "z.txt"]);
}

#[cfg(unix)]
#[test]
fn test_permission_error_is_recorded_not_raised() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt", "a");
    touch(temp_dir.path(), "b.txt", "b");

    let dir = temp_dir.path();
    fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to observe then
    let write_check = dir.join(".write-check");
    if fs::write(&write_check, "").is_ok() {
        fs::remove_file(&write_check).unwrap();
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let plan = build_plan(&MappingRow::from_pairs(&[("a.txt", "x.txt"), ("b.txt", "y.txt")]));
    let report = execute(dir, &plan);
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(report.total(), 2);
    assert!(report
        .items
        .iter()
        .all(|i| matches!(i.outcome, RenameOutcome::Failed { .. })));
    assert!(report.failure_messages()[0].starts_with("Error renaming 'a.txt': "));
    assert!(dir.join("a.txt").exists());
}
