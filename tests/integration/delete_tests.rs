use dupesweep::actions::{
    delete_duplicates, AssumeYes, DeleteConfig, DeletionStatus, DeletionSummary, LinePrompt,
};
use dupesweep::duplicates::{DuplicateFinder, FileOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn delete_with_answer(root: &Path, answer: &str) -> (DeletionSummary, String) {
    let mut prompt_out = Vec::<u8>::new();
    let mut out = Vec::new();
    let summary = {
        let mut prompt = LinePrompt::new(answer.as_bytes(), &mut prompt_out);
        delete_duplicates(
            &DuplicateFinder::with_defaults(),
            root,
            &mut prompt,
            &DeleteConfig::default(),
            &mut out,
        )
        .unwrap()
    };
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_reference_scenario_confirmed() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a/1.txt", "identical");
    let b = write(dir.path(), "b/1.txt", "identical");
    let c = write(dir.path(), "c/2.txt", "different");

    let (summary, text) = delete_with_answer(dir.path(), "yes\n");

    assert_eq!(summary.status, DeletionStatus::Completed);
    assert_eq!(summary.deleted_count(), 1);
    assert!(a.exists());
    assert!(!b.exists());
    assert!(c.exists());
    assert!(text.contains(&format!("Deleted: {}", b.display())));
    assert!(text.ends_with("Total Deleted Files: 1\n"));
}

#[test]
fn test_uppercase_yes_confirms() {
    let dir = tempdir().unwrap();
    write(dir.path(), "x", "same");
    let y = write(dir.path(), "y", "same");

    let (summary, _) = delete_with_answer(dir.path(), "YES\n");

    assert_eq!(summary.deleted_count(), 1);
    assert!(!y.exists());
}

#[test]
fn test_any_other_answer_declines() {
    for answer in ["no\n", "y\n", "yes!\n", "\n", "", "  yes\n"] {
        let dir = tempdir().unwrap();
        let x = write(dir.path(), "x", "same");
        let y = write(dir.path(), "y", "same");

        let (summary, text) = delete_with_answer(dir.path(), answer);

        assert_eq!(summary.status, DeletionStatus::Cancelled, "answer {answer:?}");
        assert!(x.exists() && y.exists(), "answer {answer:?}");
        assert_eq!(text, "Operation cancelled\n");
    }
}

#[test]
fn test_prompt_text() {
    let dir = tempdir().unwrap();
    write(dir.path(), "x", "same");
    write(dir.path(), "y", "same");

    let mut prompt_out = Vec::new();
    {
        let mut prompt = LinePrompt::new(&b"no\n"[..], &mut prompt_out);
        delete_duplicates(
            &DuplicateFinder::with_defaults(),
            dir.path(),
            &mut prompt,
            &DeleteConfig::default(),
            &mut std::io::sink(),
        )
        .unwrap();
    }

    assert_eq!(
        String::from_utf8(prompt_out).unwrap(),
        "\nDelete duplicates? (yes/no): "
    );
}

#[test]
fn test_missing_root_reports_and_skips_prompt() {
    let dir = tempdir().unwrap();
    let mut asked = false;
    let mut confirm = |_: &str| {
        asked = true;
        true
    };
    let mut out = Vec::new();

    let summary = delete_duplicates(
        &DuplicateFinder::with_defaults(),
        &dir.path().join("does-not-exist"),
        &mut confirm,
        &DeleteConfig::default(),
        &mut out,
    )
    .unwrap();

    assert!(!asked);
    assert_eq!(summary.status, DeletionStatus::NothingToDelete);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Directory does not exist\nNo duplicate files to delete\n"
    );
}

#[test]
fn test_keeps_only_first_of_each_group() {
    let dir = tempdir().unwrap();
    let keep1 = write(dir.path(), "a/one", "1");
    let dup1 = write(dir.path(), "b/one", "1");
    let dup2 = write(dir.path(), "c/one", "1");
    let keep2 = write(dir.path(), "a/two", "2");
    let dup3 = write(dir.path(), "d/two", "2");

    let mut out = Vec::new();
    let summary = delete_duplicates(
        &DuplicateFinder::with_defaults(),
        dir.path(),
        &mut AssumeYes,
        &DeleteConfig::default(),
        &mut out,
    )
    .unwrap();

    assert_eq!(summary.groups, 2);
    assert_eq!(summary.deleted_count(), 3);
    assert_eq!(summary.bytes_freed(), 3);
    assert!(keep1.exists() && keep2.exists());
    assert!(!dup1.exists() && !dup2.exists() && !dup3.exists());
    assert!(String::from_utf8(out)
        .unwrap()
        .ends_with("\nTotal Deleted Files: 3\n"));
}

#[test]
fn test_second_run_finds_nothing() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a", "dup");
    write(dir.path(), "b", "dup");
    let finder = DuplicateFinder::with_defaults();

    let config = DeleteConfig::default();

    delete_duplicates(&finder, dir.path(), &mut AssumeYes, &config, &mut std::io::sink()).unwrap();

    let mut out = Vec::new();
    let summary = delete_duplicates(&finder, dir.path(), &mut AssumeYes, &config, &mut out).unwrap();

    assert_eq!(summary.status, DeletionStatus::NothingToDelete);
    assert_eq!(String::from_utf8(out).unwrap(), "No duplicate files to delete\n");
}

#[test]
fn test_duplicate_removed_between_scan_and_delete() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a", "dup");
    let b = write(dir.path(), "b", "dup");
    let c = write(dir.path(), "c", "dup");

    // The confirmation callback runs after the scan, so removing a file here
    // makes its later removal fail.
    let vanished = b.clone();
    let mut confirm = move |_: &str| {
        fs::remove_file(&vanished).unwrap();
        true
    };
    let mut out = Vec::new();
    let summary = delete_duplicates(
        &DuplicateFinder::with_defaults(),
        dir.path(),
        &mut confirm,
        &DeleteConfig::default(),
        &mut out,
    )
    .unwrap();

    assert!(a.exists());
    assert!(!c.exists());
    assert_eq!(summary.deleted_count(), 1);
    assert_eq!(summary.failed_count(), 1);
    assert!(summary.had_failures());
    assert!(matches!(
        &summary.outcomes[0],
        FileOutcome::SkippedUndeletable { path, .. } if path == &b
    ));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        format!("Deleted: {}\n\nTotal Deleted Files: 1\n", c.display())
    );
}

#[cfg(unix)]
#[test]
fn test_undeletable_duplicate_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let keep = write(dir.path(), "a/keep", "dup");
    let locked = write(dir.path(), "b/locked", "dup");
    let free = write(dir.path(), "c/free", "dup");
    let locked_dir = dir.path().join("b");
    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can remove files from read-only directories.
    let probe = locked_dir.join("probe");
    if fs::write(&probe, "p").is_ok() {
        fs::remove_file(&probe).unwrap();
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping test_undeletable_duplicate_is_skipped: permissions not enforced for this user");
        return;
    }

    let mut out = Vec::new();
    let summary = delete_duplicates(
        &DuplicateFinder::with_defaults(),
        dir.path(),
        &mut AssumeYes,
        &DeleteConfig::default(),
        &mut out,
    )
    .unwrap();
    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(keep.exists());
    assert!(locked.exists());
    assert!(!free.exists());
    assert_eq!(summary.deleted_count(), 1);
    assert_eq!(summary.failed_count(), 1);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("locked"));
    assert!(text.ends_with("Total Deleted Files: 1\n"));
}
