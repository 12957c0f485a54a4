use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::{RawImage, decode_image, premultiply_rgba8_in_place, scale_image};
use crate::assets::procedural::generate_gear;
use crate::foundation::core::{Rgba8, SurfaceBounds};
use crate::foundation::error::{SprocketError, SprocketResult};
use crate::scene::layout::REFERENCE_HALF_WIDTH;
use crate::style::config::{OrnamentConfig, OrnamentSource};

/// A premultiplied-RGBA8 image ready for blitting.
///
/// The pixel buffer is `Arc`-shared: ornaments are read-only after
/// construction and reused across every frame without copying.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Premultiply a decoded straight-alpha image.
    pub fn from_raw(raw: &RawImage) -> Self {
        let mut bytes = raw.rgba8.clone();
        premultiply_rgba8_in_place(&mut bytes);
        Self {
            width: raw.width,
            height: raw.height,
            rgba8_premul: Arc::new(bytes),
        }
    }
}

/// One rotating gear ornament: prepared image plus placement and rate.
///
/// `rate` multiplies the continuous second angle, so the ornament glides with
/// sub-second precision while the second hand ticks.
#[derive(Clone, Debug)]
pub struct Ornament {
    /// Prepared image, already scaled to the rendered size.
    pub image: PreparedImage,
    /// Rendered diameter in reference units (320-unit face).
    pub size: f64,
    /// Horizontal pivot offset from face center in reference units.
    /// The medium gear is drawn twice, mirrored at `±offset_x`.
    pub offset_x: f64,
    /// Rotation-rate multiplier relative to the continuous second angle.
    pub rate: f64,
}

/// The fixed ornament pair of the face, loaded once at engine construction.
#[derive(Clone, Debug)]
pub struct OrnamentSet {
    /// Mirrored medium-gear pair (drawn at `±offset_x`).
    pub medium_gear: Ornament,
    /// Centered big gear.
    pub big_gear: Ornament,
}

impl OrnamentSet {
    /// Medium gear diameter in reference units.
    pub const MEDIUM_SIZE: f64 = 168.0;
    /// Big gear diameter in reference units.
    pub const BIG_SIZE: f64 = 283.0;
    /// Medium-gear pivot offset from center in reference units.
    pub const MEDIUM_OFFSET_X: f64 = 160.0;
    /// Medium gears turn at −30°/s: −5× the second angle (which is 6°/s).
    pub const MEDIUM_RATE: f64 = -5.0;
    /// The big gear turns at +6°/s: 1× the second angle.
    pub const BIG_RATE: f64 = 1.0;

    /// Load, decode, and scale both ornaments for a face of the given bounds.
    ///
    /// `assets_root` resolves [`OrnamentSource::File`] paths; it may be `None`
    /// when both sources are generated. A missing or undecodable image is
    /// fatal: a half-initialized ornament set would corrupt later rendering.
    pub fn load(
        cfg: &OrnamentConfig,
        assets_root: Option<&Path>,
        bounds: SurfaceBounds,
    ) -> SprocketResult<Self> {
        let scale = bounds.half_width() / REFERENCE_HALF_WIDTH;
        let tint = Rgba8::from_array(cfg.gear_rgba8);

        let prepare = |source: &OrnamentSource,
                       size_units: f64,
                       teeth: u32|
         -> SprocketResult<PreparedImage> {
            let target = (size_units * scale).round().max(1.0) as u32;
            let raw = match source {
                OrnamentSource::Generated => generate_gear(target, teeth, tint),
                OrnamentSource::File { path } => {
                    let root = assets_root.ok_or_else(|| {
                        SprocketError::asset(format!(
                            "ornament '{path}' needs an assets root directory"
                        ))
                    })?;
                    let full = root.join(path);
                    let bytes = std::fs::read(&full)
                        .with_context(|| format!("read ornament '{}'", full.display()))?;
                    let decoded = decode_image(&bytes)?;
                    scale_image(&decoded, target, target)?
                }
            };
            Ok(PreparedImage::from_raw(&raw))
        };

        Ok(Self {
            medium_gear: Ornament {
                image: prepare(&cfg.medium_gear, Self::MEDIUM_SIZE, 12)?,
                size: Self::MEDIUM_SIZE,
                offset_x: Self::MEDIUM_OFFSET_X,
                rate: Self::MEDIUM_RATE,
            },
            big_gear: Ornament {
                image: prepare(&cfg.big_gear, Self::BIG_SIZE, 20)?,
                size: Self::BIG_SIZE,
                offset_x: 0.0,
                rate: Self::BIG_RATE,
            },
        })
    }

    /// Build a set from already-prepared images (tests, embedded artwork).
    pub fn from_images(medium: PreparedImage, big: PreparedImage) -> Self {
        Self {
            medium_gear: Ornament {
                image: medium,
                size: Self::MEDIUM_SIZE,
                offset_x: Self::MEDIUM_OFFSET_X,
                rate: Self::MEDIUM_RATE,
            },
            big_gear: Ornament {
                image: big,
                size: Self::BIG_SIZE,
                offset_x: 0.0,
                rate: Self::BIG_RATE,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ornaments.rs"]
mod tests;
