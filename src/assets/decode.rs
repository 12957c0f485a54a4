use anyhow::Context;

use crate::foundation::error::{SprocketError, SprocketResult};

/// A decoded straight-alpha RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major.
    pub rgba8: Vec<u8>,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> SprocketResult<RawImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode ornament image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RawImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

/// Resample an image to the target size with bilinear filtering.
///
/// Ornaments are scaled exactly once, at construction; the render path blits
/// at the prepared size.
pub fn scale_image(img: &RawImage, width: u32, height: u32) -> SprocketResult<RawImage> {
    if width == 0 || height == 0 {
        return Err(SprocketError::validation(
            "scale target width/height must be > 0",
        ));
    }
    if img.width == width && img.height == height {
        return Ok(img.clone());
    }
    let buf = image::RgbaImage::from_raw(img.width, img.height, img.rgba8.clone())
        .ok_or_else(|| SprocketError::asset("image byte length does not match dimensions"))?;
    let scaled = image::imageops::resize(&buf, width, height, image::imageops::FilterType::Triangle);
    Ok(RawImage {
        width,
        height,
        rgba8: scaled.into_raw(),
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
