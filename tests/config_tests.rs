use std::path::Path;

use swatchpad::cli::{ConfigOverrides, PadOverrides, ShadowArgs};
use swatchpad::config::{AppConfig, ConfigError};
use swatchpad::offset::PadGeometry;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.pad, PadGeometry::default());
    assert_eq!(config.pad.max_offset, 50);
    assert_eq!(config.picker.initial, "#ff6b6b");
    assert!(config.picker.persist);
    assert_eq!(config.shadow.color, "#1e293b");
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[pad]
width = 200.0
handle = 24.0

[shadow]
offset_x = -5
blur = 20
color = "rgba(0, 0, 0, 0.5)"

[picker]
initial = "#4ECDC4"
persist = false
"##;

    let config = AppConfig::from_toml(toml_str).unwrap();
    assert_eq!(config.pad.width, 200.0);
    assert_eq!(config.pad.height, 140.0);
    assert_eq!(config.pad.handle, 24.0);
    assert_eq!(config.shadow.offset_x, -5);
    assert_eq!(config.shadow.offset_y, 10);
    assert_eq!(config.shadow.blur, 20);
    assert_eq!(config.shadow.color, "rgba(0, 0, 0, 0.5)");
    assert_eq!(config.picker.initial, "#4ECDC4");
    assert!(!config.picker.persist);
}

#[test]
fn test_invalid_shadow_color_is_rejected() {
    let result = AppConfig::from_toml("[shadow]\ncolor = \"blurple-ish\"\n");
    assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("swatchpad.toml");

    let mut config = AppConfig::default();
    config.shadow.blur = 33;
    config.pad.max_offset = 30;
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded.shadow.blur, 33);
    assert_eq!(loaded.pad.max_offset, 30);
}

#[test]
fn test_layered_cli_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[shadow]\nblur = 5\nspread = 3\n").unwrap();

    let overrides = ConfigOverrides {
        shadow: Some(ShadowArgs {
            blur: Some(12),
            ..Default::default()
        }),
        pad: Some(PadOverrides {
            max_offset: Some(25),
            ..Default::default()
        }),
    };

    let config = AppConfig::layered(Some(&path), &overrides).unwrap();
    assert_eq!(config.shadow.blur, 12);
    assert_eq!(config.shadow.spread, 3);
    assert_eq!(config.shadow.offset_x, 10);
    assert_eq!(config.pad.max_offset, 25);
    assert_eq!(config.pad.width, 140.0);
}

#[test]
fn test_layered_missing_explicit_file_fails() {
    let result = AppConfig::layered(
        Some(Path::new("/definitely/not/here/swatchpad.toml")),
        &ConfigOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_initial_shadow_is_clamped() {
    let config = AppConfig::from_toml("[shadow]\noffset_x = 90\nblur = 75\n").unwrap();
    let shadow = config.initial_shadow();
    assert_eq!(shadow.offset_x, 50);
    assert_eq!(shadow.blur, 50);
}
