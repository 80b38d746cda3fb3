// Config loading and validation tests

use wbstats::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[database]
path = "data/stats.db"
max_pool_size = 10

[statistics]
anomaly_history_limit = 50

[activity]
recent_events_capacity = 500
monitored_events = ["new_submission", "wb_message"]
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"

[database]
path = "data/stats.db"
max_pool_size = 4
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.path, "data/stats.db");
    assert_eq!(config.database.max_pool_size, 10);
    assert_eq!(config.statistics.anomaly_history_limit, 50);
    assert_eq!(config.activity.recent_events_capacity, 500);
    assert_eq!(
        config.activity.monitored_events,
        ["new_submission", "wb_message"]
    );
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("valid");
    assert_eq!(config.statistics.anomaly_history_limit, 20);
    assert_eq!(config.activity.recent_events_capacity, 1000);
    assert!(
        config
            .activity
            .monitored_events
            .iter()
            .any(|e| e == "new_submission")
    );
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_db_path() {
    let bad = VALID_CONFIG.replace("path = \"data/stats.db\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("database.path"));
}

#[test]
fn test_config_validation_rejects_max_pool_size_zero() {
    let bad = VALID_CONFIG.replace("max_pool_size = 10", "max_pool_size = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_pool_size"));
}

#[test]
fn test_config_validation_rejects_anomaly_limit_zero() {
    let bad = VALID_CONFIG.replace("anomaly_history_limit = 50", "anomaly_history_limit = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("anomaly_history_limit"));
}

#[test]
fn test_config_validation_rejects_recent_events_capacity_zero() {
    let bad = VALID_CONFIG.replace(
        "recent_events_capacity = 500",
        "recent_events_capacity = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("recent_events_capacity"));
}

#[test]
fn test_config_validation_rejects_empty_monitored_events() {
    let bad = VALID_CONFIG.replace(
        "monitored_events = [\"new_submission\", \"wb_message\"]",
        "monitored_events = []",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("monitored_events"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.database.path, "data/stats.db");
}
