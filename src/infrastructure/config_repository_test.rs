use super::*;
use tempfile::TempDir;

fn create_test_repository() -> (ConfigRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repository = ConfigRepository::with_path(temp_dir.path().join("config.json"));
    (repository, temp_dir)
}

#[test]
fn test_missing_file_yields_defaults() {
    let (repository, _temp_dir) = create_test_repository();
    let config = repository.load().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.data_path, PathBuf::from("data/deals.json"));
    assert!(config.log_notifications);
}

#[test]
fn test_load_partial_config() {
    let (repository, _temp_dir) = create_test_repository();
    fs::write(repository.config_path(), r#"{ "data_path": "/srv/deals.json" }"#).unwrap();

    let config = repository.load().unwrap();
    assert_eq!(config.data_path, PathBuf::from("/srv/deals.json"));
    assert!(config.log_notifications);
}

#[test]
fn test_load_full_config() {
    let (repository, _temp_dir) = create_test_repository();
    fs::write(
        repository.config_path(),
        r#"{ "data_path": "deals.json", "log_notifications": false }"#,
    )
    .unwrap();

    let config = repository.load().unwrap();
    assert_eq!(config.data_path, PathBuf::from("deals.json"));
    assert!(!config.log_notifications);
}

#[test]
fn test_invalid_config_is_an_error() {
    let (repository, _temp_dir) = create_test_repository();
    fs::write(repository.config_path(), "not json").unwrap();

    let err = repository.load().unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
