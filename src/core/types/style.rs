//! Sketch styles and rendering parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, SketchError};

/// Upper bound of every slider
pub const SLIDER_MAX: u8 = 100;

/// Rendering preset passed to the generation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SketchStyle {
    #[default]
    VectorPencil,
    Line,
    Drawing,
    Engraving,
    Outline,
    Flat,
    Hatching,
    Stipple,
    ColoringBook,
    Ghibli,
}

impl SketchStyle {
    /// All presets, in menu order
    pub const ALL: [SketchStyle; 10] = [
        SketchStyle::VectorPencil,
        SketchStyle::Line,
        SketchStyle::Drawing,
        SketchStyle::Engraving,
        SketchStyle::Outline,
        SketchStyle::Flat,
        SketchStyle::Hatching,
        SketchStyle::Stipple,
        SketchStyle::ColoringBook,
        SketchStyle::Ghibli,
    ];

    /// Wire identifier, e.g. `coloring-book`
    pub fn id(&self) -> &'static str {
        match self {
            Self::VectorPencil => "vector-pencil",
            Self::Line => "line",
            Self::Drawing => "drawing",
            Self::Engraving => "engraving",
            Self::Outline => "outline",
            Self::Flat => "flat",
            Self::Hatching => "hatching",
            Self::Stipple => "stipple",
            Self::ColoringBook => "coloring-book",
            Self::Ghibli => "ghibli",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VectorPencil => "Pencil Sketch",
            Self::Line => "Line Art",
            Self::Drawing => "Drawing",
            Self::Engraving => "Engraving",
            Self::Outline => "Outline",
            Self::Flat => "Flat",
            Self::Hatching => "Hatching",
            Self::Stipple => "Stipple",
            Self::ColoringBook => "Coloring Book",
            Self::Ghibli => "Ghibli Style",
        }
    }

    /// Short description of the technique; it is quoted in the generation prompt
    pub fn description(&self) -> &'static str {
        match self {
            Self::VectorPencil => {
                "authentic graphite pencil strokes, ideal for portraits and detailed studies"
            }
            Self::Line => {
                "clean, detailed line art that focuses on shapes and contours instead of shading"
            }
            Self::Drawing => "a clean, classic pen-and-ink illustration with confident lines and forms",
            Self::Engraving => {
                "finely detailed linework that evokes the mood of old woodcuts and engravings"
            }
            Self::Outline => "a minimal style that keeps only the main contour lines of the subject",
            Self::Flat => "a bold 2D graphic style using only solid black and white areas",
            Self::Hatching => {
                "classic technique where shadows are built from parallel and cross-hatched lines"
            }
            Self::Stipple => {
                "the image is built from thousands of tiny dots; denser dots give darker tones"
            }
            Self::ColoringBook => "clean black outlines with white fills, ready to be colored in",
            Self::Ghibli => {
                "a magical, colorful anime style with richly painted backgrounds in the spirit of Studio Ghibli films"
            }
        }
    }
}

impl fmt::Display for SketchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SketchStyle {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.id() == needle)
            .ok_or_else(|| {
                SketchError::validation(format!(
                    "Unknown sketch style '{}'. Expected one of: {}",
                    s,
                    Self::ALL.map(|st| st.id()).join(", ")
                ))
            })
    }
}

/// One of the four numeric controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slider {
    Detail,
    Shading,
    Stroke,
    Roughness,
}

impl Slider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Shading => "shading",
            Self::Stroke => "stroke",
            Self::Roughness => "roughness",
        }
    }
}

/// Style preset plus slider values, each in `0..=100`.
///
/// Deserialization goes through [`StyleParams::new`], so out-of-range values
/// in a config file are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStyleParams")]
pub struct StyleParams {
    pub style: SketchStyle,
    pub detail: u8,
    pub shading: u8,
    pub stroke: u8,
    pub roughness: u8,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            style: SketchStyle::VectorPencil,
            detail: 93,
            shading: 40,
            stroke: 50,
            roughness: 50,
        }
    }
}

impl StyleParams {
    pub fn new(style: SketchStyle, detail: u8, shading: u8, stroke: u8, roughness: u8) -> Result<Self> {
        let params = Self {
            style,
            detail,
            shading,
            stroke,
            roughness,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        for (slider, value) in [
            (Slider::Detail, self.detail),
            (Slider::Shading, self.shading),
            (Slider::Stroke, self.stroke),
            (Slider::Roughness, self.roughness),
        ] {
            if value > SLIDER_MAX {
                return Err(SketchError::validation(format!(
                    "{} must be between 0 and {}, got {}",
                    slider.name(),
                    SLIDER_MAX,
                    value
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, slider: Slider) -> u8 {
        match slider {
            Slider::Detail => self.detail,
            Slider::Shading => self.shading,
            Slider::Stroke => self.stroke,
            Slider::Roughness => self.roughness,
        }
    }

    /// Set a slider, clamping to the valid range
    pub fn with_slider(mut self, slider: Slider, value: u8) -> Self {
        let value = value.min(SLIDER_MAX);
        match slider {
            Slider::Detail => self.detail = value,
            Slider::Shading => self.shading = value,
            Slider::Stroke => self.stroke = value,
            Slider::Roughness => self.roughness = value,
        }
        self
    }

    pub fn with_style(mut self, style: SketchStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Deserialize)]
struct RawStyleParams {
    #[serde(default)]
    style: Option<SketchStyle>,
    detail: Option<u8>,
    shading: Option<u8>,
    stroke: Option<u8>,
    roughness: Option<u8>,
}

impl TryFrom<RawStyleParams> for StyleParams {
    type Error = SketchError;

    fn try_from(raw: RawStyleParams) -> Result<Self> {
        let defaults = StyleParams::default();
        StyleParams::new(
            raw.style.unwrap_or(defaults.style),
            raw.detail.unwrap_or(defaults.detail),
            raw.shading.unwrap_or(defaults.shading),
            raw.stroke.unwrap_or(defaults.stroke),
            raw.roughness.unwrap_or(defaults.roughness),
        )
    }
}
