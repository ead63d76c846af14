//! Analyzer configuration.
//!
//! The per-pass thresholds (Sobel cutoffs, contour caps, palette radii,
//! validator weights) are named constants in their modules — they are
//! behavioral contract, not tuning surface. What callers may vary lives
//! here.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Caller-facing knobs for [`super::GarmentAnalyzer`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Decoded images are downscaled so `max(w, h)` does not exceed this,
    /// bounding analysis cost to O(max_dimension²).
    pub max_dimension: u32,
    /// Run the clothing-content gate before feature extraction. Disable for
    /// trusted input (e.g. a curated catalog) to skip the gate's cost.
    pub validate_content: bool,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            max_dimension: 800,
            validate_content: true,
        }
    }
}

impl AnalyzerParams {
    /// Load parameters from a JSON file; missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}
