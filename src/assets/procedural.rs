use std::f64::consts::TAU;

use crate::assets::decode::RawImage;
use crate::foundation::core::Rgba8;

/// Generate a gear ornament image procedurally.
///
/// A flat gear silhouette: a toothed outer ring, four spokes, and a hub,
/// tinted with `color`. `diameter` is the full image size in pixels; the
/// tooth tips reach the image edge. Keeps the crate free of binary fixtures —
/// hosts with real artwork use [`crate::decode_image`] instead.
pub fn generate_gear(diameter: u32, teeth: u32, color: Rgba8) -> RawImage {
    let d = diameter.max(4);
    let teeth = teeth.max(3);
    let size = d as usize;
    let mut rgba8 = vec![0u8; size * size * 4];

    let c = (d as f64 - 1.0) / 2.0;
    let outer = d as f64 / 2.0 - 1.0;
    let root = outer * 0.84;
    let rim_inner = outer * 0.60;
    let hub = outer * 0.16;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - c;
            let dy = y as f64 - c;
            let r = (dx * dx + dy * dy).sqrt();
            if r > outer {
                continue;
            }

            let theta = dy.atan2(dx).rem_euclid(TAU);
            // Square-wave tooth profile: half of each pitch is a tooth.
            let pitch_phase = (theta / TAU * f64::from(teeth)).fract();
            let boundary = if pitch_phase < 0.5 { outer } else { root };

            let in_ring = r >= rim_inner && r <= boundary;
            let in_hub = r <= hub;
            let spoke = (2.0 * theta).cos().abs() >= 0.92 && r < rim_inner;
            if !(in_ring || in_hub || spoke) {
                continue;
            }

            let idx = (y * size + x) * 4;
            rgba8[idx] = color.r;
            rgba8[idx + 1] = color.g;
            rgba8[idx + 2] = color.b;
            rgba8[idx + 3] = color.a;
        }
    }

    RawImage {
        width: d,
        height: d,
        rgba8,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/procedural.rs"]
mod tests;
