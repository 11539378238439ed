//! Configuration loading tests

use std::io::Write;
use std::path::Path;

use sketchforge::config::{OutputConfig, Validate};
use sketchforge::utils::logging::LogFormat;
use sketchforge::{Config, SketchStyle, StyleParams};
use tempfile::NamedTempFile;
use tokio_test::{assert_err, assert_ok};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_full_file() {
    let file = write_config(
        r#"
gemini:
  api_key: from-file
  base_url: http://localhost:8089
  request_timeout: 30
  connect_timeout: 5
defaults:
  style: coloring-book
  detail: 10
  shading: 20
  stroke: 30
  roughness: 40
logging:
  level: warn
  format: json
output:
  suffix: -lineart
"#,
    );

    let config = assert_ok!(Config::from_file(file.path()).await);
    assert_eq!(
        *config.defaults(),
        StyleParams::new(SketchStyle::ColoringBook, 10, 20, 30, 40).unwrap()
    );
    assert_eq!(config.gemini().endpoint(), "http://localhost:8089/v1beta/models/gemini-2.5-flash-image:generateContent");
    assert_eq!(config.logging().level, "warn");
    assert_eq!(config.logging().format, LogFormat::Json);
    assert_eq!(
        config.output().output_path(Path::new("shots/cat.jpeg"), "png"),
        Path::new("shots/cat-lineart.png")
    );
}

#[tokio::test]
async fn test_unknown_style_is_rejected() {
    let file = write_config("defaults:\n  style: watercolor\n");
    assert_err!(Config::from_file(file.path()).await);
}

#[tokio::test]
async fn test_invalid_timeouts_are_rejected() {
    let file = write_config("gemini:\n  request_timeout: 5\n  connect_timeout: 50\n");
    let err = assert_err!(Config::from_file(file.path()).await);
    assert!(err.to_string().contains("gemini"));
}

#[tokio::test]
async fn test_load_without_file() {
    let config = assert_ok!(Config::load(None).await);
    assert!(Validate::validate(&config.app).is_ok());
    assert_eq!(config.gemini().request_timeout, 120);
}

#[test]
fn test_output_directory_wins() {
    let output = OutputConfig {
        directory: Some("renders".into()),
        ..OutputConfig::default()
    };
    assert_eq!(
        output.output_path(Path::new("/tmp/in/dog.png"), "jpg"),
        Path::new("renders/dog-sketch.jpg")
    );
}
