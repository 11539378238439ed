//! Error type behavior across the public API

use sketchforge::{EncodedImage, ProviderError, SketchError, UNKNOWN_ERROR};

#[test]
fn test_provider_messages_are_bare() {
    let err = ProviderError::timeout("gemini", "Request timed out after 120s");
    assert_eq!(err.message(), "Request timed out after 120s");
    assert!(err.to_string().contains("gemini"));

    assert_eq!(ProviderError::network("gemini", "  ").message(), UNKNOWN_ERROR);
}

#[test]
fn test_no_image_message() {
    let err = ProviderError::no_image("gemini", Some("just text".to_string()));
    assert_eq!(err.message(), "No image returned: just text");
    assert!(!err.is_retryable());

    let blank = ProviderError::no_image("gemini", Some("   ".to_string()));
    assert_eq!(blank.message(), "No image returned");
}

#[test]
fn test_configuration_errors_become_config() {
    let err: SketchError = ProviderError::configuration("gemini", "API key missing").into();
    assert!(matches!(err, SketchError::Config(_)));

    let err: SketchError = ProviderError::rate_limit("gemini", Some(3)).into();
    assert!(matches!(err, SketchError::Provider(_)));
}

#[test]
fn test_generation_errors_are_labeled() {
    let err = SketchError::generation("sketch generation", &ProviderError::other("gemini", ""));
    assert_eq!(err.to_string(), "sketch generation failed: Unknown error");
    assert_eq!(err.user_message(), UNKNOWN_ERROR);
}

#[test]
fn test_invalid_images() {
    assert!(matches!(
        EncodedImage::from_data_url("data:image/png;base64,not base64!"),
        Err(SketchError::InvalidImage(_))
    ));
    assert!(matches!(
        EncodedImage::from_bytes("application/pdf", b"%PDF"),
        Err(SketchError::InvalidImage(_))
    ));
}

#[tokio::test]
async fn test_unsupported_file_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    tokio::fs::write(&path, b"hello").await.unwrap();

    assert!(matches!(
        EncodedImage::from_path(&path).await,
        Err(SketchError::InvalidImage(_))
    ));
    assert!(matches!(
        EncodedImage::from_path(dir.path().join("missing.png")).await,
        Err(SketchError::Io(_))
    ));
}
