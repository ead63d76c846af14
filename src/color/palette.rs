//! Fixed reference palette for nearest-color classification.
//!
//! Declaration order matters: classification scans the palette in order with
//! a strict `<` minimum, so the earlier entry wins exact distance ties.
//! Downstream heuristics depend on that determinism.

/// A named reference color with its own acceptance radius.
#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
    /// Maximum Euclidean RGB distance at which a pixel may adopt this name.
    pub threshold: f32,
}

const fn color(name: &'static str, rgb: [u8; 3], threshold: f32) -> PaletteColor {
    PaletteColor {
        name,
        rgb,
        threshold,
    }
}

/// Returned when no palette entry accepts the pixel.
pub const NEUTRAL: &str = "neutral";

/// Ordered reference palette. Order is a tie-break contract; do not sort.
pub const PALETTE: [PaletteColor; 13] = [
    color("black", [20, 20, 20], 60.0),
    color("white", [240, 240, 240], 60.0),
    color("gray", [128, 128, 128], 55.0),
    color("red", [200, 40, 40], 75.0),
    color("orange", [230, 140, 40], 65.0),
    color("yellow", [230, 220, 60], 75.0),
    color("green", [60, 160, 70], 85.0),
    color("blue", [50, 80, 200], 85.0),
    color("navy", [30, 40, 90], 60.0),
    color("purple", [130, 60, 170], 75.0),
    color("pink", [240, 150, 180], 70.0),
    color("brown", [120, 80, 50], 65.0),
    color("beige", [210, 190, 160], 60.0),
];
