//! Nearest-color classification over a fixed, ordered palette.

pub mod classifier;
pub mod palette;

pub use classifier::{
    classify, ColorHistogram, ColorSample, MAX_DOMINANT_COLORS, MIN_COLOR_PERCENTAGE,
    SUBJECT_BRIGHTNESS_HIGH, SUBJECT_BRIGHTNESS_LOW,
};
pub use palette::{PaletteColor, NEUTRAL, PALETTE};
