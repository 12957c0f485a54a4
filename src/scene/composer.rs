//! The scene composer: one angle set in, one ordered draw sequence out.

use std::f64::consts::TAU;

use crate::assets::ornaments::{Ornament, OrnamentSet};
use crate::clock::AngleSet;
use crate::foundation::core::{DisplayMode, Point, SurfaceBounds, Vec2};
use crate::scene::layout::FaceLayout;
use crate::style::registry::{HandKind, StyleSet};
use crate::surface::DrawSurface;

/// Composes one clock-face frame as an ordered draw sequence.
///
/// The drawing order (back to front) is a hard invariant:
///
/// 1. full-surface background fill
/// 2. interactive only: mirrored medium gears, then the centered big gear
/// 3. twelve dial markers
/// 4. minute hand
/// 5. hour hand
/// 6. interactive only: ticking second hand with a filled tip cap
#[derive(Clone, Debug)]
pub struct SceneComposer {
    styles: StyleSet,
    ornaments: OrnamentSet,
}

impl SceneComposer {
    /// Build a composer from the immutable style registry and ornament set.
    pub fn new(styles: StyleSet, ornaments: OrnamentSet) -> Self {
        Self { styles, ornaments }
    }

    /// The style registry in use.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// The ornament set in use.
    pub fn ornaments(&self) -> &OrnamentSet {
        &self.ornaments
    }

    /// Render one frame.
    ///
    /// `angles` must come from a single time snapshot. `low_fidelity` disables
    /// anti-aliasing on every primitive regardless of the mode's defaults.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        bounds: SurfaceBounds,
        angles: &AngleSet,
        mode: DisplayMode,
        low_fidelity: bool,
    ) {
        tracing::trace!(?mode, low_fidelity, "composing face frame");
        let layout = FaceLayout::new(bounds);

        surface.clear(self.styles.background());

        if mode.is_interactive() {
            self.blit_ornament(surface, &layout, &self.ornaments.medium_gear, 1.0, angles);
            self.blit_ornament(surface, &layout, &self.ornaments.medium_gear, -1.0, angles);
            self.blit_ornament(surface, &layout, &self.ornaments.big_gear, 1.0, angles);
        }

        self.draw_markers(surface, &layout, mode, low_fidelity);
        self.draw_hand(surface, &layout, HandKind::Minute, mode, low_fidelity, angles.minute, layout.minute_length);
        self.draw_hand(surface, &layout, HandKind::Hour, mode, low_fidelity, angles.hour, layout.hour_length);

        if mode.is_interactive() {
            self.draw_second_hand(surface, &layout, mode, low_fidelity, angles);
        }
    }

    /// Blit one ornament rotated about its own pivot.
    ///
    /// `mirror` is `±1.0` and flips the pivot offset for the left/right copy
    /// of the medium gear. The rotation is scoped so it cannot leak into
    /// subsequent draws.
    fn blit_ornament(
        &self,
        surface: &mut dyn DrawSurface,
        layout: &FaceLayout,
        ornament: &Ornament,
        mirror: f64,
        angles: &AngleSet,
    ) {
        let pivot = layout.center + Vec2::new(mirror * ornament.offset_x * layout.scale, 0.0);
        let angle = angles.second * ornament.rate;
        let top_left = Point::new(
            pivot.x - f64::from(ornament.image.width) / 2.0,
            pivot.y - f64::from(ornament.image.height) / 2.0,
        );
        rotated(surface, angle, pivot, |s| {
            s.image(&ornament.image, top_left);
        });
    }

    fn draw_markers(
        &self,
        surface: &mut dyn DrawSurface,
        layout: &FaceLayout,
        mode: DisplayMode,
        low_fidelity: bool,
    ) {
        let style = self.styles.effective(HandKind::Marker, mode, low_fidelity);
        let ring = layout.marker_ring(mode);
        for i in (0..60u32).step_by(5) {
            let angle = f64::from(i) / 60.0 * TAU;
            let center = layout.point_at(angle, ring);
            surface.fill_circle(center, layout.marker_radius, style.color, style.anti_alias);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_hand(
        &self,
        surface: &mut dyn DrawSurface,
        layout: &FaceLayout,
        kind: HandKind,
        mode: DisplayMode,
        low_fidelity: bool,
        angle: f64,
        length: f64,
    ) {
        let mut style = self.styles.effective(kind, mode, low_fidelity);
        style.stroke_width *= layout.scale;
        let tip = layout.point_at(angle, length);
        surface.line(layout.center, tip, &style);
    }

    /// Second hand uses the quantized tick angle; only the gears glide.
    fn draw_second_hand(
        &self,
        surface: &mut dyn DrawSurface,
        layout: &FaceLayout,
        mode: DisplayMode,
        low_fidelity: bool,
        angles: &AngleSet,
    ) {
        let mut style = self.styles.effective(HandKind::Second, mode, low_fidelity);
        style.stroke_width *= layout.scale;
        let tip = layout.point_at(angles.second_tick, layout.second_length);
        surface.line(layout.center, tip, &style);
        surface.fill_circle(tip, layout.cap_radius, style.color, style.anti_alias);
    }
}

/// Run `f` under a rotation transform, guaranteeing the matching pop on every
/// exit path.
fn rotated(
    surface: &mut dyn DrawSurface,
    angle: f64,
    pivot: Point,
    f: impl FnOnce(&mut dyn DrawSurface),
) {
    surface.push_rotation(angle, pivot);
    f(surface);
    surface.pop_transform();
}
