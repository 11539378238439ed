//! Core type definition module
//!
//! Image payloads, sketch styles and rendering parameters

pub mod image;
pub mod style;

// Re-export all public types
pub use image::{EncodedImage, mime_for_path};
pub use style::{SLIDER_MAX, SketchStyle, Slider, StyleParams};
