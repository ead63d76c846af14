use serde::Serialize;

/// Coarse classification of what kind of clothing the image depicts.
///
/// Serialized names (`top`, `bottom`, `dress`, `full_outfit`) are part of the
/// output contract consumed by the recommendation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    Top,
    Bottom,
    Dress,
    FullOutfit,
}

impl GarmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Top => "top",
            GarmentType::Bottom => "bottom",
            GarmentType::Dress => "dress",
            GarmentType::FullOutfit => "full_outfit",
        }
    }
}

/// Secondary diagnostics attached to a feature record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisDetails {
    pub garment_type: GarmentType,
    pub pattern_detected: String,
    pub fabric_texture: String,
    pub silhouette: String,
}

/// The single externally visible output of an analysis call.
///
/// All categorical attributes are string-valued; downstream styling code
/// matches on them by equality/containment, so the vocabulary is effectively
/// a schema. Created once per call, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectedFeatures {
    pub neckline: String,
    pub sleeves: String,
    pub top_style: String,
    pub bottom_style: String,
    pub dress_style: String,
    pub rise: String,
    pub fit: String,
    /// Dominant color names, strongest first.
    pub colors: Vec<String>,
    /// Heuristic trust score in [0, 100]; not a calibrated probability.
    pub confidence: u8,
    pub analysis_details: Option<AnalysisDetails>,
}

/// Outcome of the clothing-content gate.
///
/// A failed validation is a first-class result, not an exception: it carries
/// a confidence score, the reasons that held it back, and graded suggestion
/// text the UI must surface verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_clothing: bool,
    /// Plausibility score in [0, 100].
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub suggestion: Option<String>,
}
