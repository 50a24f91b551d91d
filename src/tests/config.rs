use super::Config;
use crate::error::ConfigError;
use crate::scroll::Speed;
use crate::sync::LookupFallback;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.speed(), Speed::Fast);
    assert_eq!(cfg.fallback(), LookupFallback::Ancestor);
}

#[test]
fn test_partial_config_overrides_fields() {
    let cfg = Config::parse("threshold = 787.0\nscroll_speed = \"slow\"\n").unwrap();

    assert!((cfg.threshold - 787.0).abs() < f64::EPSILON);
    assert_eq!(cfg.speed(), Speed::Slow);
    assert!((cfg.sidebar_min_width - 200.0).abs() < f64::EPSILON);
    assert!((cfg.layout_rules().threshold - 787.0).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_policy_falls_back_to_ancestor() {
    let cfg = Config {
        lookup_fallback: "nearest".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.fallback(), LookupFallback::Ancestor);

    let cfg = Config {
        lookup_fallback: "ignore".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.fallback(), LookupFallback::Ignore);
}

#[test]
fn test_malformed_file_loads_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "threshold = [").unwrap();

    assert_eq!(Config::load(Some(file.path())), Config::default());
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert_eq!(Config::load(Some(&path)), Config::default());
}

#[test]
fn test_misspelled_speed_is_rejected() {
    assert_eq!(
        Config::parse("scroll_speed = \"slwo\"\n"),
        Err(ConfigError::UnknownValue {
            setting: "scroll_speed",
            value: "slwo".to_string(),
        })
    );
}

#[test]
fn test_unknown_fallback_is_rejected() {
    assert_eq!(
        Config::parse("lookup_fallback = \"nearest\"\n"),
        Err(ConfigError::UnknownValue {
            setting: "lookup_fallback",
            value: "nearest".to_string(),
        })
    );
}

#[test]
fn test_malformed_toml_is_reported() {
    assert!(matches!(
        Config::parse("threshold = ["),
        Err(ConfigError::Malformed(_))
    ));
}

#[test]
fn test_file_with_unknown_value_loads_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "threshold = 700.0\nscroll_speed = \"slwo\"").unwrap();

    assert_eq!(Config::load(Some(file.path())), Config::default());
}
