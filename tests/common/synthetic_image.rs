/// Generates a solid-color RGBA image.
pub fn solid_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    img
}

/// Light background with a dark high-contrast horizontal band covering the
/// given row range.
pub fn banded_rgba(
    width: usize,
    height: usize,
    band_rows: std::ops::Range<usize>,
    background: u8,
    band: u8,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for _ in 0..width {
            let v = if band_rows.contains(&y) { band } else { background };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Scenery-like frame: a uniform field crossed by thin dark horizontal
/// lines every `spacing` rows — long straight edges, no fabric texture.
pub fn striped_scene_rgba(width: usize, height: usize, spacing: usize) -> Vec<u8> {
    assert!(spacing > 2, "stripes must be separated");
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for _ in 0..width {
            let v = if y % spacing == 0 { 0u8 } else { 200u8 };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}
