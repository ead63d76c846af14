#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod error;
pub mod image;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod classify;
pub mod color;
pub mod edges;
pub mod features;
pub mod regions;
pub mod texture;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, GarmentAnalyzer};
pub use crate::error::AnalysisError;
pub use crate::types::{AnalysisDetails, DetectedFeatures, GarmentType, ValidationReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use garment_analyzer::prelude::*;
///
/// # fn main() {
/// let (w, h) = (400usize, 600usize);
/// let rgba = vec![0u8; w * h * 4];
/// let img = ImageRgba8::new(w, h, &rgba).unwrap();
///
/// let analyzer = GarmentAnalyzer::new(AnalyzerParams {
///     validate_content: false,
///     ..Default::default()
/// });
///
/// let features = analyzer.analyze(&img).unwrap();
/// println!("fit={} confidence={}", features.fit, features.confidence);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{AnalyzerParams, DetectedFeatures, GarmentAnalyzer, GarmentType};
}
