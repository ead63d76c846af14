//! Silhouette classification: a coarse shape category derived from edge and
//! contour statistics, consumed by the style rule tables.

use crate::regions::RegionProfile;

/// Mean contour density above which the garment reads as "structured"
/// (crisp seams, collars, tailored panels).
pub const STRUCTURED_CONTOUR_DENSITY: f32 = 0.03;

/// Minimum mean edge density backing the structured call.
pub const STRUCTURED_EDGE_DENSITY: f32 = 0.05;

/// Mean edge density above which a garment hugs the body ("fitted") rather
/// than draping ("flowing").
pub const FITTED_EDGE_DENSITY: f32 = 0.02;

/// First-match silhouette decision: structured, then fitted, else flowing.
pub fn classify_silhouette(profile: &RegionProfile) -> &'static str {
    let contours = profile.mean_contour_density();
    let edges = profile.mean_edge_density();
    if contours > STRUCTURED_CONTOUR_DENSITY && edges > STRUCTURED_EDGE_DENSITY {
        "structured"
    } else if edges > FITTED_EDGE_DENSITY {
        "fitted"
    } else {
        "flowing"
    }
}
