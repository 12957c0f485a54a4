//! The immutable `(hand, mode) → style` lookup table.

use crate::foundation::core::{DisplayMode, Rgba8};
use crate::foundation::error::{SprocketError, SprocketResult};
use crate::style::config::StyleConfig;

/// The stroked or dotted primitives a style can be looked up for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandKind {
    /// Hour hand.
    Hour,
    /// Minute hand.
    Minute,
    /// Second hand (interactive mode only).
    Second,
    /// Dial marker dots.
    Marker,
}

impl HandKind {
    const ALL: [HandKind; 4] = [Self::Hour, Self::Minute, Self::Second, Self::Marker];

    fn index(self) -> usize {
        match self {
            Self::Hour => 0,
            Self::Minute => 1,
            Self::Second => 2,
            Self::Marker => 3,
        }
    }
}

/// Line-end cap shape for hand strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    /// Semicircular cap past the endpoint.
    #[default]
    Round,
    /// Flat cap at the endpoint.
    Butt,
}

/// Resolved visual parameters for one primitive.
///
/// Immutable value record; the render path only ever copies these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandStyle {
    /// Stroke/fill color.
    pub color: Rgba8,
    /// Stroke width in reference units (scaled with the face).
    pub stroke_width: f64,
    /// Whether the primitive is anti-aliased.
    pub anti_alias: bool,
    /// Cap shape for line strokes.
    pub cap: CapStyle,
}

/// Immutable lookup table `(HandKind × DisplayMode) → HandStyle`.
///
/// Constructed once from [`StyleConfig`], read thereafter. The render path
/// never mutates entries: forced low fidelity is applied by recomputing an
/// effective style per lookup.
#[derive(Clone, Debug)]
pub struct StyleSet {
    background: Rgba8,
    interactive: [HandStyle; 4],
    ambient: [HandStyle; 4],
}

impl StyleSet {
    /// Build and validate the registry from configuration.
    pub fn from_config(cfg: &StyleConfig) -> SprocketResult<Self> {
        let build = |mode: DisplayMode| -> SprocketResult<[HandStyle; 4]> {
            let mut out = [HandStyle {
                color: Rgba8::opaque(0, 0, 0),
                stroke_width: 1.0,
                anti_alias: true,
                cap: CapStyle::Round,
            }; 4];
            for kind in HandKind::ALL {
                let entry = cfg.hand(kind, mode);
                if !entry.stroke_width.is_finite() || entry.stroke_width < 0.0 {
                    return Err(SprocketError::validation(format!(
                        "stroke width for {kind:?}/{mode:?} must be finite and >= 0"
                    )));
                }
                out[kind.index()] = HandStyle {
                    color: Rgba8::from_array(entry.color_rgba8),
                    stroke_width: entry.stroke_width,
                    anti_alias: entry.anti_alias,
                    cap: entry.cap,
                };
            }
            Ok(out)
        };

        Ok(Self {
            background: Rgba8::from_array(cfg.background_rgba8),
            interactive: build(DisplayMode::Interactive)?,
            ambient: build(DisplayMode::Ambient)?,
        })
    }

    /// Background fill color.
    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Base style for a primitive in a mode.
    pub fn hand(&self, kind: HandKind, mode: DisplayMode) -> &HandStyle {
        match mode {
            DisplayMode::Interactive => &self.interactive[kind.index()],
            DisplayMode::Ambient => &self.ambient[kind.index()],
        }
    }

    /// Effective style: base style with the forced-low-fidelity override.
    ///
    /// When `low_fidelity_forced` is set, anti-aliasing is disabled regardless
    /// of the mode's default. Returns a fresh value; the registry entry is
    /// untouched.
    pub fn effective(&self, kind: HandKind, mode: DisplayMode, low_fidelity_forced: bool) -> HandStyle {
        let mut style = *self.hand(kind, mode);
        if low_fidelity_forced {
            style.anti_alias = false;
        }
        style
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/registry.rs"]
mod tests;
