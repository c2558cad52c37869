use std::path::{Path, PathBuf};

use customer_landing_ingest::config::{IngestionConfig, DEFAULT_ENV};

#[test]
fn unset_env_defaults_to_dev() {
    let config = IngestionConfig::from_lookup(|_| None);
    assert_eq!(config.env, DEFAULT_ENV);
    assert_eq!(config, IngestionConfig::default());
}

#[test]
fn env_label_is_taken_verbatim() {
    let config = IngestionConfig::from_lookup(|key| {
        assert_eq!(key, "ENV");
        Some("prod eu-west".to_string())
    });
    assert_eq!(config.env, "prod eu-west");

    let empty = IngestionConfig::from_lookup(|_| Some(String::new()));
    assert_eq!(empty.env, "");
}

#[test]
fn default_layout_is_relative() {
    let config = IngestionConfig::new("dev");
    assert_eq!(config.source_file, PathBuf::from("data/source/customers.csv"));
    assert_eq!(config.landing_dir, PathBuf::from("data/landing"));
    assert_eq!(config.logs_dir, PathBuf::from("logs"));
    assert_eq!(config.log_file(), PathBuf::from("logs/ingestion.log"));
}

#[test]
fn rooted_config_keeps_layout() {
    let config = IngestionConfig::new("dev").rooted_at("/srv/ingest");
    assert_eq!(config.source_file, Path::new("/srv/ingest/data/source/customers.csv"));
    assert_eq!(config.landing_dir, Path::new("/srv/ingest/data/landing"));
    assert_eq!(config.log_file(), Path::new("/srv/ingest/logs/ingestion.log"));
}
