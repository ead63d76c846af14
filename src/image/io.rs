//! Decode helpers bridging encoded bytes to the analyzer's pixel buffer.
//!
//! The analyzer's worst case is quadratic in image dimension, so decoding
//! pre-scales anything larger than a maximum dimension before analysis.

use super::RgbaBuffer;
use crate::error::AnalysisError;
use image::imageops::FilterType;

/// Decode arbitrary encoded image bytes into an owned RGBA buffer,
/// downscaling so that `max(width, height) <= max_dimension` while keeping
/// the aspect ratio. Decode failures surface as [`AnalysisError::Decode`].
pub fn decode_rgba(bytes: &[u8], max_dimension: u32) -> Result<RgbaBuffer, AnalysisError> {
    let decoded = image::load_from_memory(bytes)?;
    let scaled = if decoded.width().max(decoded.height()) > max_dimension {
        decoded.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        decoded
    };
    let rgba = scaled.into_rgba8();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    RgbaBuffer::new(w, h, rgba.into_raw())
}
