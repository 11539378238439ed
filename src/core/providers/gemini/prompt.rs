//! Prompt construction for the sketch operations

use crate::core::types::{SketchStyle, StyleParams};

/// Instruction sent alongside the source photo
pub fn sketch_prompt(params: &StyleParams) -> String {
    format!(
        "Transform this image into a {name} style sketch: {description}. \
         Detail level: {detail}%. Shading intensity: {shading}%. \
         Stroke width: {stroke}%. Roughness: {roughness}%. \
         Keep the composition and subject of the original photo. \
         Return the finished sketch as an image.",
        name = params.style.display_name(),
        description = params.style.description(),
        detail = params.detail,
        shading = params.shading,
        stroke = params.stroke,
        roughness = params.roughness,
    )
}

/// Instruction sent alongside an existing sketch
pub fn refine_prompt(instruction: &str, style: SketchStyle) -> String {
    format!(
        "Modify this {name} sketch: {instruction}. \
         Keep the {name} style ({description}). Return the modified sketch as an image.",
        name = style.display_name(),
        description = style.description(),
        instruction = instruction.trim(),
    )
}

/// Text-to-image requests forward the user's description with an output hint
pub fn text_prompt(prompt: &str) -> String {
    format!("Generate an image of: {}", prompt.trim())
}
