use crate::foundation::error::{SprocketError, SprocketResult};

pub use kurbo::{Affine, Point, Vec2};

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceBounds {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceBounds {
    /// Create validated bounds with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> SprocketResult<Self> {
        if width == 0 || height == 0 {
            return Err(SprocketError::validation(
                "surface width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Center of the surface.
    ///
    /// Window insets are ignored so that, on round displays with a chin, the
    /// face is centered on the entire surface rather than the usable portion.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Half the surface width, the base radius all face geometry derives from.
    pub fn half_width(self) -> f64 {
        f64::from(self.width) / 2.0
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel values as an array, `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a color from a `[r, g, b, a]` array.
    pub const fn from_array(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// Display mode of the face.
///
/// Ambient is the low-power state: no ornaments, no second hand, coarse
/// markers, and anti-aliasing disabled on low-bit-color devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Full-fidelity, continuously animated display state.
    Interactive,
    /// Low-power display state showing a simplified face.
    Ambient,
}

impl DisplayMode {
    /// Map a host-supplied ambient flag to a display mode.
    pub fn from_ambient_flag(ambient: bool) -> Self {
        if ambient { Self::Ambient } else { Self::Interactive }
    }

    /// Return `true` for [`DisplayMode::Interactive`].
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

/// Whether the face is currently visible to the user.
///
/// Orthogonal to [`DisplayMode`]; continuous animation requires
/// `Visible ∧ Interactive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The face is on screen.
    Visible,
    /// The face is off screen or covered.
    Hidden,
}

impl Visibility {
    /// Map a host-supplied boolean to a visibility state.
    pub fn from_bool(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }

    /// Return `true` for [`Visibility::Visible`].
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
