//! Face geometry: reference constants scaled to the actual surface.

use crate::foundation::core::{DisplayMode, Point, SurfaceBounds};

/// Half-width of the 320-unit reference face all constants are anchored to.
pub const REFERENCE_HALF_WIDTH: f64 = 160.0;

const SECOND_INSET: f64 = 20.0;
const MINUTE_INSET: f64 = 40.0;
const HOUR_INSET: f64 = 80.0;
const MARKER_RADIUS: f64 = 7.0;
const SECOND_CAP_RADIUS: f64 = 5.0;

/// Face geometry for one surface size.
///
/// Every length and offset is a reference constant multiplied by
/// `half_width / 160`, so the design scales proportionally to arbitrary
/// surface sizes. At the 320-unit reference size the values match the
/// original fixed-pixel layout exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    /// Face center.
    pub center: Point,
    /// Scale factor from reference units to surface pixels.
    pub scale: f64,
    /// Second-hand length (half-width − 20 units).
    pub second_length: f64,
    /// Minute-hand length (half-width − 40 units).
    pub minute_length: f64,
    /// Hour-hand length (half-width − 80 units).
    pub hour_length: f64,
    /// Marker dot radius (7 units).
    pub marker_radius: f64,
    /// Radius of the filled cap at the second-hand tip (5 units).
    pub cap_radius: f64,
}

impl FaceLayout {
    /// Derive the layout for a surface.
    pub fn new(bounds: SurfaceBounds) -> Self {
        let half = bounds.half_width();
        let scale = half / REFERENCE_HALF_WIDTH;
        Self {
            center: bounds.center(),
            scale,
            second_length: half - SECOND_INSET * scale,
            minute_length: half - MINUTE_INSET * scale,
            hour_length: half - HOUR_INSET * scale,
            marker_radius: MARKER_RADIUS * scale,
            cap_radius: SECOND_CAP_RADIUS * scale,
        }
    }

    /// Radius of the circle the twelve dial markers sit on.
    ///
    /// Pulled in by one marker radius in ambient mode so the dots don't clip
    /// the edge when the second hand and gears aren't providing visual margin.
    pub fn marker_ring(&self, mode: DisplayMode) -> f64 {
        let half = REFERENCE_HALF_WIDTH * self.scale;
        match mode {
            DisplayMode::Interactive => half,
            DisplayMode::Ambient => half - self.marker_radius,
        }
    }

    /// Point at `radius` from center along `angle` (radians, 0 = up,
    /// clockwise positive).
    pub fn point_at(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + angle.sin() * radius,
            self.center.y - angle.cos() * radius,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
