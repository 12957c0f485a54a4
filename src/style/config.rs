//! Serde-facing face configuration with defaults matching the built-in face.

use crate::foundation::core::DisplayMode;
use crate::foundation::error::{SprocketError, SprocketResult};
use crate::style::registry::{CapStyle, HandKind};

/// Configured visual parameters for one primitive in one mode.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct HandStyleConfig {
    /// Straight-alpha color, `[r, g, b, a]`.
    pub color_rgba8: [u8; 4],
    /// Stroke width in reference units (320-unit face).
    pub stroke_width: f64,
    /// Whether the primitive is anti-aliased by default.
    #[serde(default = "default_true")]
    pub anti_alias: bool,
    /// Cap shape for line strokes.
    #[serde(default)]
    pub cap: CapStyle,
}

fn default_true() -> bool {
    true
}

/// Per-mode style table.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ModeStyleConfig {
    /// Hour hand.
    pub hour: HandStyleConfig,
    /// Minute hand.
    pub minute: HandStyleConfig,
    /// Second hand.
    pub second: HandStyleConfig,
    /// Dial marker dots.
    pub marker: HandStyleConfig,
}

/// Style configuration for both display modes.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Opaque background fill, `[r, g, b, a]`.
    pub background_rgba8: [u8; 4],
    /// Interactive-mode styles.
    pub interactive: ModeStyleConfig,
    /// Ambient-mode styles.
    pub ambient: ModeStyleConfig,
}

impl StyleConfig {
    /// Configured entry for a primitive in a mode.
    pub fn hand(&self, kind: HandKind, mode: DisplayMode) -> &HandStyleConfig {
        let table = match mode {
            DisplayMode::Interactive => &self.interactive,
            DisplayMode::Ambient => &self.ambient,
        };
        match kind {
            HandKind::Hour => &table.hour,
            HandKind::Minute => &table.minute,
            HandKind::Second => &table.second,
            HandKind::Marker => &table.marker,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        let hand = |color: [u8; 4], width: f64, anti_alias: bool| HandStyleConfig {
            color_rgba8: color,
            stroke_width: width,
            anti_alias,
            cap: CapStyle::Round,
        };
        Self {
            background_rgba8: [12, 12, 14, 255],
            interactive: ModeStyleConfig {
                hour: hand([224, 224, 224, 255], 8.0, true),
                minute: hand([240, 240, 240, 255], 5.0, true),
                second: hand([255, 116, 42, 255], 3.0, true),
                marker: hand([158, 158, 158, 255], 0.0, true),
            },
            ambient: ModeStyleConfig {
                hour: hand([168, 168, 168, 255], 6.0, true),
                minute: hand([192, 192, 192, 255], 4.0, true),
                second: hand([160, 92, 48, 255], 2.0, true),
                marker: hand([128, 128, 128, 255], 0.0, true),
            },
        }
    }
}

/// Where an ornament image comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrnamentSource {
    /// Procedurally generated gear; no file IO.
    #[default]
    Generated,
    /// Decoded from an image file (path relative to the assets root).
    File {
        /// Relative path to the encoded image.
        path: String,
    },
}

/// Ornament configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OrnamentConfig {
    /// Source of the mirrored medium-gear pair image.
    #[serde(default)]
    pub medium_gear: OrnamentSource,
    /// Source of the centered big-gear image.
    #[serde(default)]
    pub big_gear: OrnamentSource,
    /// Tint used when generating gears procedurally, `[r, g, b, a]`.
    #[serde(default = "default_gear_rgba8")]
    pub gear_rgba8: [u8; 4],
}

fn default_gear_rgba8() -> [u8; 4] {
    [146, 116, 58, 255]
}

impl Default for OrnamentConfig {
    fn default() -> Self {
        Self {
            medium_gear: OrnamentSource::Generated,
            big_gear: OrnamentSource::Generated,
            gear_rgba8: default_gear_rgba8(),
        }
    }
}

/// Top-level face configuration: styles plus ornament sources.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FaceConfig {
    /// Style tables for both modes.
    #[serde(default)]
    pub style: StyleConfig,
    /// Ornament sources.
    #[serde(default)]
    pub ornaments: OrnamentConfig,
}

impl FaceConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> SprocketResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SprocketError::validation(format!("face config: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
