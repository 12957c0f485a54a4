//! `vello_cpu`-backed [`DrawSurface`] and frame readback.

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::ornaments::PreparedImage;
use crate::foundation::core::{Affine, Point, Rgba8, SurfaceBounds};
use crate::foundation::error::{SprocketError, SprocketResult};
use crate::style::registry::{CapStyle, HandStyle};
use crate::surface::DrawSurface;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this
/// explicit at API boundaries. For an opaque clock face the distinction only
/// matters to downstream encoders.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight-alpha RGBA8 (e.g. for PNG export).
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
        }
        out
    }
}

/// CPU [`DrawSurface`] powered by `vello_cpu`.
///
/// Rasterization is always anti-aliased; the per-primitive `anti_alias` flag
/// exists for backends (and devices) that can actually switch it off, and is
/// honored as a no-op here.
pub struct CpuSurface {
    bounds: SurfaceBounds,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    saved: Vec<Affine>,
    // Ornament images are immutable and Arc-shared, so the buffer address
    // identifies the image for the lifetime of the set.
    image_paints: HashMap<usize, vello_cpu::Image>,
}

impl CpuSurface {
    /// Create a surface for the given bounds.
    pub fn new(bounds: SurfaceBounds) -> SprocketResult<Self> {
        let w: u16 = bounds
            .width
            .try_into()
            .map_err(|_| SprocketError::render("surface width exceeds u16"))?;
        let h: u16 = bounds
            .height
            .try_into()
            .map_err(|_| SprocketError::render("surface height exceeds u16"))?;
        Ok(Self {
            bounds,
            ctx: vello_cpu::RenderContext::new(w, h),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            image_paints: HashMap::new(),
        })
    }

    /// Flush pending draws and read the frame back.
    ///
    /// The surface can keep drawing afterwards; each call reads the current
    /// raster state.
    pub fn finish(&mut self) -> SprocketResult<FrameRGBA> {
        let w: u16 = self
            .bounds
            .width
            .try_into()
            .map_err(|_| SprocketError::render("surface width exceeds u16"))?;
        let h: u16 = self
            .bounds
            .height
            .try_into()
            .map_err(|_| SprocketError::render("surface height exceeds u16"))?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: self.bounds.width,
            height: self.bounds.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn paint_for(&mut self, image: &PreparedImage) -> SprocketResult<vello_cpu::Image> {
        let key = Arc::as_ptr(&image.rgba8_premul) as usize;
        if let Some(paint) = self.image_paints.get(&key).cloned() {
            return Ok(paint);
        }
        let paint = image_to_paint(image)?;
        self.image_paints.insert(key, paint.clone());
        Ok(paint)
    }

    fn set_cpu_transform(&mut self, transform: Affine) {
        self.ctx.set_transform(affine_to_cpu(transform));
    }
}

impl DrawSurface for CpuSurface {
    fn clear(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.bounds.width),
            f64::from(self.bounds.height),
        ));
    }

    fn line(&mut self, from: Point, to: Point, style: &HandStyle) {
        let path = capsule_path(from, to, style.stroke_width, style.cap);
        self.set_cpu_transform(self.transform);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            style.color.r,
            style.color.g,
            style.color.b,
            style.color.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(&path));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, _anti_alias: bool) {
        let mut path = kurbo::BezPath::new();
        append_circle(&mut path, center, radius);
        self.set_cpu_transform(self.transform);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a));
        self.ctx.fill_path(&bezpath_to_cpu(&path));
    }

    fn image(&mut self, image: &PreparedImage, top_left: Point) {
        let Ok(paint) = self.paint_for(image) else {
            // Prepared images are validated at construction; an inconsistent
            // buffer cannot be reported from the infallible draw path, so the
            // blit is skipped.
            return;
        };
        let (w, h) = (f64::from(image.width), f64::from(image.height));
        self.set_cpu_transform(self.transform * Affine::translate(top_left.to_vec2()));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }

    fn push_rotation(&mut self, angle: f64, pivot: Point) {
        self.saved.push(self.transform);
        self.transform = self.transform * Affine::rotate_about(angle, pivot);
    }

    fn pop_transform(&mut self) {
        self.transform = self.saved.pop().unwrap_or(Affine::IDENTITY);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn append_circle(path: &mut kurbo::BezPath, center: Point, radius: f64) {
    use kurbo::Shape;

    let circle = kurbo::Circle::new(center, radius.max(0.0));
    for el in circle.path_elements(0.1) {
        path.push(el);
    }
}

/// Build a fillable stroke outline for a line segment.
///
/// The body is a quad of the stroke width; round caps add a disc at each
/// endpoint. Styles are opaque, so the overlapping subpaths composite
/// seamlessly under a nonzero fill.
fn capsule_path(from: Point, to: Point, width: f64, cap: CapStyle) -> kurbo::BezPath {
    let half = (width / 2.0).max(0.0);
    let mut path = kurbo::BezPath::new();

    let d = to - from;
    let len = d.hypot();
    if len > f64::EPSILON && half > 0.0 {
        let n = kurbo::Vec2::new(-d.y / len, d.x / len) * half;
        path.move_to(from + n);
        path.line_to(to + n);
        path.line_to(to - n);
        path.line_to(from - n);
        path.close_path();
    }
    if matches!(cap, CapStyle::Round) && half > 0.0 {
        append_circle(&mut path, from, half);
        append_circle(&mut path, to, half);
    }
    path
}

fn image_to_paint(image: &PreparedImage) -> SprocketResult<vello_cpu::Image> {
    let expected = (image.width as usize)
        .saturating_mul(image.height as usize)
        .saturating_mul(4);
    if image.rgba8_premul.len() != expected {
        return Err(SprocketError::render("image byte length mismatch"));
    }
    let w: u16 = image
        .width
        .try_into()
        .map_err(|_| SprocketError::render("image width exceeds u16"))?;
    let h: u16 = image
        .height
        .try_into()
        .map_err(|_| SprocketError::render("image height exceeds u16"))?;

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (image.width as usize) * (image.height as usize),
    );
    for px in image.rgba8_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
