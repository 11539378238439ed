//! Test fixtures and data factories

use sketchforge::EncodedImage;

/// A valid 1x1 PNG, base64 encoded
pub const PIXEL_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";

/// Distinct source image `n`; its bytes read `photo-<n>`
pub fn photo(n: usize) -> EncodedImage {
    ImageFactory::tagged("image/jpeg", &format!("photo-{}", n))
}

/// `count` distinct source images, numbered from 0
pub fn photos(count: usize) -> Vec<EncodedImage> {
    (0..count).map(photo).collect()
}

/// Factory for test images
pub struct ImageFactory;

impl ImageFactory {
    /// The real 1x1 PNG
    pub fn pixel() -> EncodedImage {
        EncodedImage::from_base64("image/png", PIXEL_PNG).unwrap()
    }

    /// An image whose decoded bytes are exactly `tag`
    pub fn tagged(mime_type: &str, tag: &str) -> EncodedImage {
        EncodedImage::from_bytes(mime_type, tag.as_bytes()).unwrap()
    }

    /// Decoded bytes of an image as text, for images built with [`tagged`](Self::tagged)
    pub fn tag_of(image: &EncodedImage) -> String {
        String::from_utf8(image.decode().unwrap()).unwrap()
    }
}
