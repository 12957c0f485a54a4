use super::*;

#[test]
fn bounds_reject_zero_dimensions() {
    assert!(SurfaceBounds::new(0, 100).is_err());
    assert!(SurfaceBounds::new(100, 0).is_err());
    assert!(SurfaceBounds::new(320, 320).is_ok());
}

#[test]
fn bounds_center_and_half_width() {
    let b = SurfaceBounds::new(320, 320).unwrap();
    assert_eq!(b.center(), Point::new(160.0, 160.0));
    assert_eq!(b.half_width(), 160.0);

    // Chin-style non-square surface: center stays on the full surface.
    let b = SurfaceBounds::new(320, 290).unwrap();
    assert_eq!(b.center(), Point::new(160.0, 145.0));
}

#[test]
fn rgba8_array_roundtrip() {
    let c = Rgba8::new(1, 2, 3, 4);
    assert_eq!(Rgba8::from_array(c.to_array()), c);
    assert_eq!(Rgba8::opaque(9, 8, 7).a, 255);
}

#[test]
fn mode_and_visibility_helpers() {
    assert!(DisplayMode::Interactive.is_interactive());
    assert!(!DisplayMode::Ambient.is_interactive());
    assert_eq!(DisplayMode::from_ambient_flag(true), DisplayMode::Ambient);
    assert_eq!(
        DisplayMode::from_ambient_flag(false),
        DisplayMode::Interactive
    );

    assert!(Visibility::from_bool(true).is_visible());
    assert!(!Visibility::from_bool(false).is_visible());
}
