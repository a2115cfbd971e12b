mod support;

use std::path::PathBuf;

use aqi_web::config::{AppConfig, ConfigError};

use support::{temp_file, with_scoped_env};

const CLEAR_ALL: [(&str, Option<&str>); 5] = [
    ("AQI_CONFIG", None),
    ("HOST", None),
    ("PORT", None),
    ("AQI_MODEL_PATH", None),
    ("AQI_DATASET_PATH", None),
];

fn with_env(changes: &[(&str, Option<&str>)]) -> Vec<(&'static str, Option<String>)> {
    CLEAR_ALL
        .iter()
        .map(|(key, _)| {
            let value = changes
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| v.map(str::to_string));
            (*key, value)
        })
        .collect()
}

fn load_with(changes: &[(&str, Option<&str>)]) -> Result<AppConfig, ConfigError> {
    let owned = with_env(changes);
    let env: Vec<(&str, Option<&str>)> = owned.iter().map(|(k, v)| (*k, v.as_deref())).collect();
    with_scoped_env(&env, AppConfig::load)
}

#[test]
fn test_env_overrides_defaults() {
    let config = load_with(&[
        ("HOST", Some("0.0.0.0")),
        ("PORT", Some("8081")),
        ("AQI_MODEL_PATH", Some("/models/aqi.json")),
        ("AQI_DATASET_PATH", Some("/data/aqi.csv")),
    ])
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.resources.model_path, PathBuf::from("/models/aqi.json"));
    assert_eq!(config.resources.dataset_path, PathBuf::from("/data/aqi.csv"));
    assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8081");
}

#[test]
fn test_invalid_port_is_rejected() {
    let result = load_with(&[("PORT", Some("eighty"))]);
    match result {
        Err(ConfigError::InvalidPort { name, value }) => {
            assert_eq!(name, "PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("expected InvalidPort, got {:?}", other),
    }
}

#[test]
fn test_config_file_then_env() {
    let file = temp_file(
        r#"
        [server]
        host = "0.0.0.0"
        port = 9000

        [resources]
        model_path = "models/stack.json"

        [trends]
        years = [2022, 2023]
        "#,
    );
    let path = file.path().to_string_lossy().to_string();

    let config = load_with(&[("AQI_CONFIG", Some(path.as_str())), ("PORT", Some("9100"))]).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.resources.model_path, PathBuf::from("models/stack.json"));
    assert_eq!(config.resources.dataset_path, PathBuf::from("final_dataset.csv"));
    assert_eq!(
        config.trend_years().into_iter().collect::<Vec<_>>(),
        vec![2022, 2023]
    );
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = load_with(&[("AQI_CONFIG", Some("/nonexistent/aqi.toml"))]);
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_config_file_with_no_years_fails_validation() {
    let file = temp_file("[trends]\nyears = []\n");
    let path = file.path().to_string_lossy().to_string();
    let result = load_with(&[("AQI_CONFIG", Some(path.as_str()))]);
    assert!(matches!(result, Err(ConfigError::NoTrendYears)));
}
