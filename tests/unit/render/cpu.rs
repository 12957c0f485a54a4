use super::*;

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn clear_fills_every_pixel() {
    let bounds = SurfaceBounds::new(16, 16).unwrap();
    let mut surface = CpuSurface::new(bounds).unwrap();
    surface.clear(Rgba8::opaque(12, 12, 14));

    let frame = surface.finish().unwrap();
    assert_eq!((frame.width, frame.height), (16, 16));
    assert!(frame.premultiplied);
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(px(&frame, x, y), [12, 12, 14, 255], "pixel {x},{y}");
        }
    }
}

#[test]
fn filled_circle_covers_its_center() {
    let bounds = SurfaceBounds::new(16, 16).unwrap();
    let mut surface = CpuSurface::new(bounds).unwrap();
    surface.clear(Rgba8::opaque(0, 0, 0));
    surface.fill_circle(Point::new(8.0, 8.0), 4.0, Rgba8::opaque(250, 10, 10), true);

    let frame = surface.finish().unwrap();
    assert_eq!(px(&frame, 8, 8), [250, 10, 10, 255]);
    assert_eq!(px(&frame, 0, 0), [0, 0, 0, 255]);
}

#[test]
fn line_covers_pixels_along_its_axis() {
    let bounds = SurfaceBounds::new(16, 16).unwrap();
    let mut surface = CpuSurface::new(bounds).unwrap();
    surface.clear(Rgba8::opaque(0, 0, 0));
    let style = HandStyle {
        color: Rgba8::opaque(10, 200, 10),
        stroke_width: 4.0,
        anti_alias: true,
        cap: CapStyle::Round,
    };
    surface.line(Point::new(8.0, 12.0), Point::new(8.0, 3.0), &style);

    let frame = surface.finish().unwrap();
    assert_eq!(px(&frame, 8, 8), [10, 200, 10, 255]);
    assert_eq!(px(&frame, 1, 1), [0, 0, 0, 255]);
}

#[test]
fn pushed_rotation_is_scoped() {
    let bounds = SurfaceBounds::new(16, 16).unwrap();
    let mut surface = CpuSurface::new(bounds).unwrap();
    surface.clear(Rgba8::opaque(0, 0, 0));

    // Half-turn about the center, then restore before drawing.
    surface.push_rotation(std::f64::consts::PI, Point::new(8.0, 8.0));
    surface.pop_transform();
    surface.fill_circle(Point::new(4.0, 4.0), 2.0, Rgba8::opaque(200, 200, 0), true);

    let frame = surface.finish().unwrap();
    assert_eq!(px(&frame, 4, 4), [200, 200, 0, 255]);
    // The mirrored position stays background.
    assert_eq!(px(&frame, 12, 12), [0, 0, 0, 255]);
}

#[test]
fn straight_alpha_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![100, 50, 0, 128],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(straight[3], 128);
    // 100 * 255 / 128 ≈ 199, 50 * 255 / 128 ≈ 100.
    assert!((198..=200).contains(&straight[0]));
    assert!((99..=101).contains(&straight[1]));

    let opaque = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![10, 20, 30, 255],
        premultiplied: true,
    };
    assert_eq!(opaque.to_straight_rgba8(), vec![10, 20, 30, 255]);
}
