use dupesweep::config::{Config, ENV_PREFIX};
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

// Config::load reads the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with(ENV_PREFIX) {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_config_load_from_toml() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
chunk_size = 65536
sort_entries = false
skip_empty = true
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(config.chunk_size, 65536);
    assert!(!config.sort_entries);
    assert!(config.skip_empty);
    // Keys missing from the file keep their defaults
    assert!(!config.use_trash);
    assert!(config.color);
}

#[test]
fn test_env_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "chunk_size = 1024\nuse_trash = false\n").unwrap();

    std::env::set_var("DUPESWEEP_CHUNK_SIZE", "8192");
    std::env::set_var("DUPESWEEP_USE_TRASH", "true");
    let result = Config::load(Some(path.as_path()));
    clear_env();

    let config = result.unwrap();
    assert_eq!(config.chunk_size, 8192);
    assert!(config.use_trash);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_unknown_key_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "chunk_sise = 10\n").unwrap();

    assert!(Config::load(Some(path.as_path())).is_err());
}

#[test]
fn test_zero_chunk_size_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "chunk_size = 0\n").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("chunk_size"));
}

#[test]
fn test_malformed_toml_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "chunk_size = [\n").unwrap();

    assert!(Config::load(Some(path.as_path())).is_err());
}

#[test]
fn test_oversized_env_chunk_size_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    std::env::set_var("DUPESWEEP_CHUNK_SIZE", "100000000000");
    let result = Config::load(Some(path.as_path()));
    clear_env();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("chunk_size"));
}
