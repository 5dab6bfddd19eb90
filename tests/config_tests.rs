mod common;
use common::temp_config;
use quakemap::config::migrate::{migrate_config_file, missing_keys};
use quakemap::config::{ACCESS_TOKEN_ENV, Config};
use quakemap::errors::AppError;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_config("missing_defaults");
    let cfg = Config::load(Path::new(&path)).expect("load");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.map.base_layers.len(), 2);
    assert_eq!(cfg.map.base_layers[0].style_id, "mapbox.streets");
    assert_eq!(cfg.map.center, [37.09, -95.71]);
    assert_eq!(cfg.map.zoom, 5);
    assert!(cfg.access_token.is_none());
}

#[test]
fn test_partial_file_fills_defaults() {
    let cfg = Config::from_yaml("feed:\n  url: http://example.test/feed.geojson\n").expect("parse");
    assert_eq!(cfg.feed.url, "http://example.test/feed.geojson");
    assert!(cfg.feed.retry_once);
    assert_eq!(cfg.map, Config::default().map);
}

#[test]
fn test_empty_base_layers_rejected() {
    let err = Config::from_yaml("map:\n  base_layers: []\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_init_writes_and_refuses_overwrite() {
    let path = temp_config("init_overwrite");
    let p = Path::new(&path);

    Config::init(p, false).expect("first init");
    assert_eq!(Config::load(p).expect("reload"), Config::default());

    assert!(matches!(Config::init(p, false), Err(AppError::Config(_))));
    Config::init(p, true).expect("forced init");
}

#[test]
fn test_explicit_token_wins() {
    let cfg = Config {
        access_token: Some("from-file".into()),
        ..Config::default()
    };
    assert_eq!(
        cfg.resolve_access_token(Some("from-flag")).as_deref(),
        Some("from-flag")
    );
}

#[test]
fn test_file_token_used_without_flag_or_env() {
    if std::env::var(ACCESS_TOKEN_ENV).is_ok() {
        return;
    }
    let cfg = Config {
        access_token: Some("from-file".into()),
        ..Config::default()
    };
    assert_eq!(cfg.resolve_access_token(None).as_deref(), Some("from-file"));
    assert_eq!(cfg.resolve_access_token(Some("   ")).as_deref(), Some("from-file"));
    assert_eq!(Config::default().resolve_access_token(None), None);
}

#[test]
fn test_missing_keys_lists_dotted_paths() {
    let missing = missing_keys("feed:\n  url: http://x\n").expect("check");
    assert!(missing.contains(&"feed.retry_once".to_string()));
    assert!(missing.contains(&"feed.timeout_secs".to_string()));
    assert!(missing.contains(&"access_token".to_string()));
    assert!(missing.contains(&"map".to_string()));
    assert!(!missing.contains(&"feed.url".to_string()));

    let full = Config::default().to_yaml().expect("yaml");
    assert!(missing_keys(&full).expect("check").is_empty());
}

#[test]
fn test_migrate_adds_missing_and_keeps_user_values() {
    let path = temp_config("migrate_keep");
    fs::write(&path, "feed:\n  url: http://mine/feed.geojson\n  retry_once: false\n")
        .expect("write");

    let added = migrate_config_file(Path::new(&path)).expect("migrate");
    assert!(added.contains(&"map".to_string()));

    let cfg = Config::load(Path::new(&path)).expect("reload");
    assert_eq!(cfg.feed.url, "http://mine/feed.geojson");
    assert!(!cfg.feed.retry_once);

    let again = migrate_config_file(Path::new(&path)).expect("second migrate");
    assert!(again.is_empty());
}
