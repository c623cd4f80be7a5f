use dupesweep::duplicates::{DuplicateFinder, FinderConfig};
use dupesweep::scanner::{ScanError, WalkerConfig};
use std::fs;
use tempfile::tempdir;

fn write(root: &std::path::Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();

    assert!(report.index.is_empty());
    assert_eq!(report.files_scanned, 0);
    assert!(report.duplicate_groups().is_empty());
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "content a");
    write(dir.path(), "b.txt", "content b");
    write(dir.path(), "c.txt", "content c");

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();

    assert_eq!(report.index.len(), 3);
    assert_eq!(report.files_scanned, 3);
    assert!(report.duplicate_groups().is_empty());
}

#[test]
fn test_scan_reference_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a/1.txt", "identical");
    write(dir.path(), "b/1.txt", "identical");
    write(dir.path(), "c/2.txt", "something else");

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();
    let groups = report.duplicate_groups();

    assert_eq!(report.index.len(), 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[0].original(), &dir.path().join("a/1.txt"));
    assert_eq!(groups[0].duplicates(), &[dir.path().join("b/1.txt")]);
}

#[test]
fn test_scan_deeply_nested() {
    let dir = tempdir().unwrap();
    let deep = "l1/l2/l3/l4/l5/l6/l7/l8/deep.bin";
    write(dir.path(), deep, "payload");
    write(dir.path(), "shallow.bin", "payload");

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();
    let groups = report.duplicate_groups();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].original(), &dir.path().join(deep));
}

#[test]
fn test_scan_multiple_groups_keep_first_seen_order() {
    let dir = tempdir().unwrap();
    write(dir.path(), "1", "beta");
    write(dir.path(), "2", "alpha");
    write(dir.path(), "3", "alpha");
    write(dir.path(), "4", "beta");
    write(dir.path(), "5", "beta");

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();
    let groups = report.duplicate_groups();

    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups[0].files,
        vec![dir.path().join("1"), dir.path().join("4"), dir.path().join("5")]
    );
    assert_eq!(groups[1].files, vec![dir.path().join("2"), dir.path().join("3")]);
}

#[test]
fn test_scan_same_content_different_names_and_sizes() {
    let dir = tempdir().unwrap();
    write(dir.path(), "short", "abc");
    write(dir.path(), "long", "abcabc");

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();
    assert!(report.duplicate_groups().is_empty());
}

#[test]
fn test_scan_invalid_roots() {
    let dir = tempdir().unwrap();
    write(dir.path(), "file.txt", "x");
    let finder = DuplicateFinder::with_defaults();

    let err = finder.scan(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, ScanError::NotFound(_)));
    assert_eq!(err.to_string(), "Directory does not exist");

    let err = finder.scan(&dir.path().join("file.txt")).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
    assert_eq!(err.to_string(), "Path is not a directory");
}

#[test]
fn test_scan_twice_is_identical() {
    let dir = tempdir().unwrap();
    for i in 0..20 {
        write(dir.path(), &format!("d{}/f{}.txt", i % 4, i), &format!("{}", i % 5));
    }
    let finder = DuplicateFinder::with_defaults();

    let first = finder.scan(dir.path()).unwrap();
    let second = finder.scan(dir.path()).unwrap();

    let keys1: Vec<_> = first.index.fingerprints().cloned().collect();
    let keys2: Vec<_> = second.index.fingerprints().cloned().collect();
    assert_eq!(keys1, keys2);
    assert_eq!(first.duplicate_groups(), second.duplicate_groups());
}

#[test]
fn test_scan_small_chunk_size_same_groups() {
    let dir = tempdir().unwrap();
    let big = "x".repeat(50_000);
    write(dir.path(), "a", &big);
    write(dir.path(), "b", &big);

    let tiny = DuplicateFinder::new(FinderConfig::default().with_chunk_size(3));
    let normal = DuplicateFinder::with_defaults();

    assert_eq!(
        tiny.scan(dir.path()).unwrap().duplicate_groups(),
        normal.scan(dir.path()).unwrap().duplicate_groups()
    );
}

#[test]
fn test_scan_skip_empty() {
    let dir = tempdir().unwrap();
    write(dir.path(), "e1", "");
    write(dir.path(), "e2", "");
    write(dir.path(), "full", "data");

    let config = FinderConfig::default().with_walker_config(WalkerConfig::new(true, true));
    let report = DuplicateFinder::new(config).scan(dir.path()).unwrap();

    assert_eq!(report.files_scanned, 1);
    assert!(report.duplicate_groups().is_empty());
}

#[cfg(unix)]
#[test]
fn test_scan_unreadable_directory_does_not_abort() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    write(dir.path(), "open/a", "dup");
    write(dir.path(), "open/b", "dup");
    write(dir.path(), "closed/c", "dup");
    let closed = dir.path().join("closed");
    fs::set_permissions(&closed, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read_dir(&closed).is_ok() {
        fs::set_permissions(&closed, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping test_scan_unreadable_directory_does_not_abort: permissions not enforced for this user");
        return;
    }

    let report = DuplicateFinder::with_defaults().scan(dir.path()).unwrap();
    fs::set_permissions(&closed, fs::Permissions::from_mode(0o755)).unwrap();

    let groups = report.duplicate_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert!(report.walk_errors >= 1);
    assert!(report.had_errors());
}
