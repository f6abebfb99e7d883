use std::fs;

use crate::config::error::ConfigError;
use crate::config::{ConfigData, FileConfigRepository, MemoryConfigRepository};
use crate::container::facilities::ConfigRepository;

#[test]
fn memory_repository_serves_stored_documents() {
    let mut repo = MemoryConfigRepository::new();
    let mut doc = ConfigData::new();
    doc.set("threads", 4).unwrap();
    repo.store("demo", "cache", doc);

    let fetched = repo.get_configuration("demo", "cache").unwrap();
    assert_eq!(fetched.get::<i64>("threads"), Some(4));
}

#[test]
fn memory_repository_reports_missing_document() {
    let repo = MemoryConfigRepository::new();
    let result = repo.get_configuration("demo", "cache");
    assert!(matches!(
        result,
        Err(ConfigError::NotFound { app, module }) if app == "demo" && module == "cache"
    ));
}

#[test]
fn memory_repository_scopes_documents_per_application() {
    let mut repo = MemoryConfigRepository::new();
    repo.store("demo", "cache", ConfigData::new());

    assert!(repo.get_configuration("demo", "cache").is_ok());
    assert!(repo.get_configuration("other", "cache").is_err());
}

#[test]
fn file_repository_reads_per_module_documents() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("demo");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("cache.toml"), "threads = 4\nname = \"cache\"\n").unwrap();

    let repo = FileConfigRepository::new(dir.path());
    let config = repo.get_configuration("demo", "cache").unwrap();
    assert_eq!(config.get::<i64>("threads"), Some(4));
    assert_eq!(config.get::<String>("name"), Some("cache".to_string()));
}

#[test]
fn file_repository_reports_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileConfigRepository::new(dir.path());

    let result = repo.get_configuration("demo", "cache");
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn file_repository_reports_malformed_document() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("demo");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("cache.toml"), "threads = = 4").unwrap();

    let repo = FileConfigRepository::new(dir.path());
    let result = repo.get_configuration("demo", "cache");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
