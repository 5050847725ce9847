//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_fractal_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, fractal_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[fractal]
depth = 6
color = "#ff0000"

[camera]
distance = 8.0
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.fractal.depth, 6);
    assert_eq!(config.fractal.color, "#ff0000");
    assert_eq!(config.camera.distance, 8.0);
    // Defaults preserved
    assert!(config.fractal.enabled);
    assert_eq!(config.window.title, "Fractal");
    assert_eq!(config.graph.resolution, 50);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, fractal_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_out_of_range_depth_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fractal]\ndepth = 12\n").unwrap();

    // Validation only warns here; the boundary check happens in `load_config`.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.fractal.depth, 12);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fractal").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.fractal.depth, 4);
    assert_eq!(config.background.color, "#101418");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::FractalConfig;

    let content = default_config_toml();
    let config: FractalConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.fractal.depth, 4);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("fractal"));
        assert!(path_str.ends_with("config.toml"));
    }
}
