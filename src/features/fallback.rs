//! Deterministic degraded-mode record.
//!
//! When a caller chooses to mask an internal analysis failure instead of
//! propagating it, this is the record to show: plausible defaults, clearly
//! labeled as a fallback, at a confidence no real analysis produces.

use crate::types::{AnalysisDetails, DetectedFeatures, GarmentType};

/// Confidence of the fallback record; well below [`super::BASE_CONFIDENCE`]
/// so consumers can tell degraded output from a weak real analysis.
pub const FALLBACK_CONFIDENCE: u8 = 30;

/// The fixed fallback record. Always identical; never randomized.
pub fn fallback_features() -> DetectedFeatures {
    DetectedFeatures {
        neckline: "crew neck".to_string(),
        sleeves: "short sleeves".to_string(),
        top_style: "casual top".to_string(),
        bottom_style: "straight pants".to_string(),
        dress_style: "shift dress".to_string(),
        rise: "mid-rise".to_string(),
        fit: "loose".to_string(),
        colors: vec!["neutral".to_string()],
        confidence: FALLBACK_CONFIDENCE,
        analysis_details: Some(AnalysisDetails {
            garment_type: GarmentType::Top,
            pattern_detected: "fallback".to_string(),
            fabric_texture: "unknown".to_string(),
            silhouette: "unknown".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_deterministic_and_labeled() {
        let a = fallback_features();
        let b = fallback_features();
        assert_eq!(a, b);
        assert_eq!(a.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(
            a.analysis_details.unwrap().pattern_detected,
            "fallback"
        );
    }
}
