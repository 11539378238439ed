//! E2E tests against the real Gemini API
//!
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use crate::common::ImageFactory;
    use crate::skip_without_api_key;
    use sketchforge::core::providers::gemini::create_gemini_provider_from_env;
    use sketchforge::{SketchGenerator, StyleParams};

    #[tokio::test]
    #[ignore]
    async fn test_live_sketch() {
        skip_without_api_key!();

        let provider = create_gemini_provider_from_env().unwrap();
        let result = provider
            .generate(&ImageFactory::pixel(), &StyleParams::default())
            .await;

        // A 1x1 pixel may legitimately yield a text-only answer
        match result {
            Ok(image) => assert!(image.mime_type().starts_with("image/")),
            Err(e) => assert!(
                matches!(e, sketchforge::ProviderError::NoImage { .. }),
                "Unexpected failure: {:?}",
                e
            ),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_text_to_image() {
        skip_without_api_key!();

        let provider = create_gemini_provider_from_env().unwrap();
        let image = provider
            .generate_from_text("a simple pencil drawing of a teacup")
            .await
            .unwrap();
        assert!(!image.decode().unwrap().is_empty());
    }
}
