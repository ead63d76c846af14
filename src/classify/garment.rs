//! Garment-type classification.
//!
//! A pure, first-match-wins decision over already-computed region statistics
//! and the image aspect ratio. The branch order is contract: tall images are
//! tested first, then wide, then the near-square bottom-dominance check.

use crate::regions::{RegionKind, RegionProfile};
use crate::types::GarmentType;

/// Weight folding edge density into a region's composite score.
pub const COMPOSITE_EDGE_WEIGHT: f32 = 50.0;

/// Aspect ratios strictly below this are "tall" (portrait).
pub const TALL_ASPECT: f32 = 0.7;

/// Aspect ratios strictly above this are "wide" (landscape).
pub const WIDE_ASPECT: f32 = 1.3;

/// Tall images whose top/bottom composites differ by at most this classify
/// as a dress (one continuous garment), otherwise a full outfit.
pub const DRESS_SCORE_DELTA: f32 = 15.0;

/// Near-square images classify as a bottom only when the bottom composite
/// exceeds the top composite by this multiplicative margin.
pub const BOTTOM_DOMINANCE_RATIO: f32 = 1.5;

/// Texture-plus-edges composite used to compare regions.
fn composite_score(profile: &RegionProfile, kind: RegionKind) -> f32 {
    let stats = profile.get(kind);
    stats.texture_complexity + stats.edge_density * COMPOSITE_EDGE_WEIGHT
}

/// Decision core over precomputed composite scores. Exposed separately so
/// the threshold boundaries can be tested on both sides.
pub fn classify_from_scores(top_score: f32, bottom_score: f32, aspect: f32) -> GarmentType {
    if aspect < TALL_ASPECT {
        if (top_score - bottom_score).abs() <= DRESS_SCORE_DELTA {
            return GarmentType::Dress;
        }
        return GarmentType::FullOutfit;
    }
    if aspect > WIDE_ASPECT {
        if bottom_score > top_score {
            return GarmentType::Bottom;
        }
        return GarmentType::Top;
    }
    if bottom_score > top_score * BOTTOM_DOMINANCE_RATIO {
        return GarmentType::Bottom;
    }
    GarmentType::Top
}

/// Classify the garment type from region statistics and image dimensions.
pub fn classify_garment(profile: &RegionProfile, width: usize, height: usize) -> GarmentType {
    let aspect = if height == 0 {
        0.0
    } else {
        width as f32 / height as f32
    };
    let top_score = composite_score(profile, RegionKind::Top);
    let bottom_score = composite_score(profile, RegionKind::Bottom);
    log::debug!(
        "garment classify: aspect={aspect:.3} top_score={top_score:.2} bottom_score={bottom_score:.2}"
    );
    classify_from_scores(top_score, bottom_score, aspect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_boundary_is_strict() {
        // Just inside the tall band: close scores mean dress.
        assert_eq!(classify_from_scores(10.0, 12.0, 0.699), GarmentType::Dress);
        // Exactly at the threshold the tall branch must NOT fire.
        assert_eq!(classify_from_scores(10.0, 12.0, 0.7), GarmentType::Top);
    }

    #[test]
    fn tall_with_diverging_scores_is_full_outfit() {
        assert_eq!(
            classify_from_scores(80.0, 10.0, 0.5),
            GarmentType::FullOutfit
        );
        // Delta exactly at the limit still counts as a dress.
        assert_eq!(
            classify_from_scores(40.0, 40.0 + DRESS_SCORE_DELTA, 0.5),
            GarmentType::Dress
        );
    }

    #[test]
    fn wide_boundary_is_strict() {
        // Bottom is stronger but under the near-square dominance ratio:
        // the wide branch picks bottom, the near-square branch picks top.
        assert_eq!(classify_from_scores(30.0, 40.0, 1.301), GarmentType::Bottom);
        assert_eq!(classify_from_scores(30.0, 40.0, 1.3), GarmentType::Top);
    }

    #[test]
    fn wide_prefers_higher_composite() {
        assert_eq!(classify_from_scores(50.0, 10.0, 2.0), GarmentType::Top);
        assert_eq!(classify_from_scores(10.0, 50.0, 2.0), GarmentType::Bottom);
        // Exact tie resolves to top.
        assert_eq!(classify_from_scores(25.0, 25.0, 2.0), GarmentType::Top);
    }

    #[test]
    fn near_square_needs_dominant_bottom() {
        assert_eq!(classify_from_scores(20.0, 31.0, 1.0), GarmentType::Bottom);
        // Exactly at the ratio the strict > fails.
        assert_eq!(classify_from_scores(20.0, 30.0, 1.0), GarmentType::Top);
    }
}
