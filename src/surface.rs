//! The native 2D drawing surface boundary.
//!
//! The host supplies a [`DrawSurface`]; the composer drives it with a fixed,
//! ordered primitive sequence. Methods are infallible: the surface handle is
//! assumed valid for the duration of one render call and the core performs no
//! internal retry (failures at this boundary are the host's to handle by not
//! invoking the render call).

use crate::assets::ornaments::PreparedImage;
use crate::foundation::core::{Point, Rgba8};
use crate::style::registry::HandStyle;

/// Primitive sink the scene composer renders into.
///
/// Transform state: [`DrawSurface::push_rotation`] saves the current transform
/// and rotates about a pivot; [`DrawSurface::pop_transform`] restores the save.
/// Calls are balanced by the composer so rotation never leaks into subsequent
/// draws.
pub trait DrawSurface {
    /// Full-surface opaque background fill.
    fn clear(&mut self, color: Rgba8);

    /// Stroke a line from `from` to `to` with the given style.
    fn line(&mut self, from: Point, to: Point, style: &HandStyle);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, anti_alias: bool);

    /// Blit an image with its top-left corner at `top_left`, under the
    /// current transform.
    fn image(&mut self, image: &PreparedImage, top_left: Point);

    /// Save the current transform and rotate by `angle` radians (clockwise
    /// positive) about `pivot`.
    fn push_rotation(&mut self, angle: f64, pivot: Point);

    /// Restore the transform saved by the matching
    /// [`DrawSurface::push_rotation`].
    fn pop_transform(&mut self);
}

/// One recorded draw call.
///
/// Image pixel data is reduced to its dimensions so commands stay cheap to
/// clone and compare.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Background fill.
    Clear {
        /// Fill color.
        color: Rgba8,
    },
    /// Line stroke.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Effective style used.
        style: HandStyle,
    },
    /// Filled circle.
    FillCircle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8,
        /// Whether the edge is anti-aliased.
        anti_alias: bool,
    },
    /// Image blit under the current transform.
    Image {
        /// Top-left corner.
        top_left: Point,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
    /// Transform save + rotation about a pivot.
    PushRotation {
        /// Rotation angle in radians, clockwise positive.
        angle: f64,
        /// Rotation pivot.
        pivot: Point,
    },
    /// Transform restore.
    PopTransform,
}

/// A [`DrawSurface`] that records the draw-call sequence instead of
/// rasterizing.
///
/// This is the interception point the mode invariants are verified through
/// (no ornament blit or second hand in ambient mode, balanced transform
/// save/restore); hosts can use it the same way in their own tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in emission order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Drop all recorded commands, keeping capacity.
    pub fn clear_cmds(&mut self) {
        self.cmds.clear();
    }

    /// Number of recorded image blits.
    pub fn image_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Image { .. }))
            .count()
    }

    /// Number of recorded line strokes.
    pub fn line_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count()
    }

    /// `true` when every push has a matching pop and no pop underflows.
    pub fn transform_stack_balanced(&self) -> bool {
        let mut depth = 0i64;
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::PushRotation { .. } => depth += 1,
                DrawCmd::PopTransform => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba8) {
        self.cmds.push(DrawCmd::Clear { color });
    }

    fn line(&mut self, from: Point, to: Point, style: &HandStyle) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            style: *style,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, anti_alias: bool) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
            anti_alias,
        });
    }

    fn image(&mut self, image: &PreparedImage, top_left: Point) {
        self.cmds.push(DrawCmd::Image {
            top_left,
            width: image.width,
            height: image.height,
        });
    }

    fn push_rotation(&mut self, angle: f64, pivot: Point) {
        self.cmds.push(DrawCmd::PushRotation { angle, pivot });
    }

    fn pop_transform(&mut self) {
        self.cmds.push(DrawCmd::PopTransform);
    }
}
