use std::fs;
use std::path::{Path, PathBuf};

use mockledger_core::{ColumnKind, DatasetConfig, Error, validate_config};

fn sample_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/account_balances.json")
}

#[test]
fn sample_config_loads_and_validates() {
    let config = DatasetConfig::from_path(&sample_config_path()).expect("load sample config");

    assert_eq!(config.base_size, 1000);
    assert_eq!(config.replication_count, 30);
    assert_eq!(config.columns.len(), 8);

    let kinds: Vec<ColumnKind> = config.columns.iter().map(|column| column.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ColumnKind::Date,
            ColumnKind::Money,
            ColumnKind::Code,
            ColumnKind::Code,
            ColumnKind::Code,
            ColumnKind::Code,
            ColumnKind::Counter,
            ColumnKind::Code,
        ]
    );
    assert_eq!(config.display_name("CA"), "ClientAccountID");
    assert_eq!(config.display_name("date"), "date");

    let warnings = validate_config(&config).expect("sample config is valid");
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn unknown_column_kind_fails_at_load() {
    let path = temp_file("unknown_kind.json");
    fs::write(
        &path,
        r#"{"base_size": 1, "replication_count": 0, "columns": [{"name": "rate", "kind": "PERCENT", "cardinality": 5}]}"#,
    )
    .expect("write config");

    let err = DatasetConfig::from_path(&path).expect_err("unknown kind must fail");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn unsupported_extension_is_rejected() {
    let path = temp_file("config.yaml");
    fs::write(&path, "base_size: 1").expect("write config");

    let err = DatasetConfig::from_path(&path).expect_err("yaml is not supported");
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn config_round_trips_through_json() {
    let config = DatasetConfig::from_path(&sample_config_path()).expect("load sample config");
    let json = serde_json::to_string(&config).expect("serialize config");
    let parsed = DatasetConfig::from_json_str(&json).expect("parse serialized config");
    assert_eq!(parsed, config);
}

fn temp_file(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("mockledger_core_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.join(name)
}
