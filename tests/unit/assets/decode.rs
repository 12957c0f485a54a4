use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut buf = image::RgbaImage::new(width, height);
    for px in buf.pixels_mut() {
        *px = image::Rgba(rgba);
    }
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(buf)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn decode_roundtrips_png_bytes() {
    let bytes = png_bytes(3, 2, [10, 20, 30, 255]);
    let img = decode_image(&bytes).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.rgba8.len(), 3 * 2 * 4);
    assert_eq!(&img.rgba8[0..4], &[10, 20, 30, 255]);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn scale_resamples_to_target_size() {
    let img = decode_image(&png_bytes(2, 2, [50, 100, 150, 255])).unwrap();
    let scaled = scale_image(&img, 4, 4).unwrap();
    assert_eq!((scaled.width, scaled.height), (4, 4));
    assert_eq!(scaled.rgba8.len(), 4 * 4 * 4);
    // Uniform input stays uniform under bilinear resampling.
    assert_eq!(&scaled.rgba8[0..4], &[50, 100, 150, 255]);
}

#[test]
fn scale_to_same_size_is_identity() {
    let img = decode_image(&png_bytes(2, 2, [1, 2, 3, 4])).unwrap();
    let same = scale_image(&img, 2, 2).unwrap();
    assert_eq!(same, img);
}

#[test]
fn scale_rejects_zero_target() {
    let img = decode_image(&png_bytes(2, 2, [0, 0, 0, 255])).unwrap();
    assert!(scale_image(&img, 0, 2).is_err());
}

#[test]
fn premultiply_scales_color_channels() {
    let mut px = [200u8, 100, 0, 128, 10, 10, 10, 0];
    premultiply_rgba8_in_place(&mut px);
    // 200 * 128 / 255 ≈ 100, 100 * 128 / 255 ≈ 50.
    assert_eq!(px[0], 100);
    assert_eq!(px[1], 50);
    assert_eq!(px[3], 128);
    // Zero alpha clears the color channels.
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
}
