use std::fs;

use tempfile::TempDir;
use wktmap_settings::{
    draw_options, global_config, init_global_config, MapConfig, SettingsError, POLYGON_SHAPE_STYLE,
};

#[test]
fn test_json_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");

    let mut config = MapConfig::new();
    config.language = "fr".to_string();
    config.shape_style.fill_opacity = 0.5;
    config.save_to_file(&path).expect("Failed to save config");

    let loaded = MapConfig::load_from_file(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = MapConfig::new();
    config.tile_layer.max_zoom = 17;
    config.shape_style.dash_array = None;
    config.save_to_file(&path).expect("Failed to save config");

    let loaded = MapConfig::load_from_file(&path).expect("Failed to load config");
    assert_eq!(loaded.tile_layer.max_zoom, 17);
    assert_eq!(loaded.shape_style.dash_array, None);
}

#[test]
fn test_load_handwritten_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r##"
language = "nl"

[shapeStyle]
color = "#FF0000"
weight = 2.0
opacity = 0.8
fillOpacity = 0.1
"##,
    )
    .unwrap();

    let config = MapConfig::load_from_file(&path).expect("Failed to load config");
    assert_eq!(config.language, "nl");
    assert_eq!(config.shape_style.color, "#FF0000");
    assert_eq!(config.shape_style.dash_array, None);
    assert_eq!(config.tile_layer.min_zoom, 2);
}

#[test]
fn test_load_rejects_invalid_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"tileLayer": {"minZoom": 12, "maxZoom": 4, "crossOrigin": ""}}"#).unwrap();

    let err = MapConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::InvalidSetting { ref key, .. } if key == "tileLayer.minZoom"
    ));
}

#[test]
fn test_load_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let missing = temp_dir.path().join("missing.json");
    assert!(matches!(
        MapConfig::load_from_file(&missing),
        Err(SettingsError::IoError(_))
    ));

    let broken = temp_dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        MapConfig::load_from_file(&broken),
        Err(SettingsError::JsonError(_))
    ));

    let broken = temp_dir.path().join("broken.toml");
    fs::write(&broken, "language = ").unwrap();
    assert!(matches!(
        MapConfig::load_from_file(&broken),
        Err(SettingsError::TomlError(_))
    ));

    let yaml = temp_dir.path().join("config.yaml");
    assert!(matches!(
        MapConfig::new().save_to_file(&yaml),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_or_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = MapConfig::load_or_default(&temp_dir.path().join("none.json")).unwrap();
    assert_eq!(config, MapConfig::default());
}

#[test]
fn test_global_config_installed_once() {
    let mut config = MapConfig::new();
    config.shape_style.color = "#123456".into();
    init_global_config(config).expect("first init succeeds");

    assert_eq!(global_config().shape_style.color, "#123456");
    assert!(matches!(
        init_global_config(MapConfig::new()),
        Err(SettingsError::AlreadyInitialized)
    ));

    let options = draw_options("shape");
    assert_eq!(options.polygon.shape_options.style.color, "#123456");
    assert_ne!(options.polygon.shape_options.style, POLYGON_SHAPE_STYLE);
}
