//! Final attribute extraction.
//!
//! Maps region statistics, garment type, texture and color signals into the
//! named attributes of [`DetectedFeatures`] through independent per-attribute
//! rule tables, then scores overall confidence.

use super::rules::{first_match, Rule};
use crate::color::ColorSample;
use crate::regions::{RegionKind, RegionProfile, RegionStats};
use crate::texture::TextureSummary;
use crate::types::{AnalysisDetails, DetectedFeatures, GarmentType};

/// Confidence starts here and accumulates signal bonuses.
pub const BASE_CONFIDENCE: u8 = 60;

/// Confidence never exceeds this, however strong the signals.
pub const MAX_CONFIDENCE: u8 = 95;

/// Everything the attribute rules may look at. Assembled once per call and
/// consumed by [`extract_features`].
pub struct FeatureContext {
    pub profile: RegionProfile,
    pub garment: GarmentType,
    pub silhouette: &'static str,
    pub texture: TextureSummary,
    pub colors: Vec<ColorSample>,
    pub contour_count: usize,
    /// Whole-image fraction of edge pixels.
    pub edge_fraction: f32,
}

impl FeatureContext {
    fn top(&self) -> &RegionStats {
        self.profile.get(RegionKind::Top)
    }

    fn sides_texture(&self) -> f32 {
        (self.profile.get(RegionKind::LeftSide).texture_complexity
            + self.profile.get(RegionKind::RightSide).texture_complexity)
            / 2.0
    }
}

// Neckline: top-region edge structure. Low-edge tops read as strapless;
// strong contours against a bright backdrop read as a collar.
const NECKLINE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "collared",
        applies: |c| c.top().contour_density > 0.08 && c.top().brightness > 140.0,
    },
    Rule {
        value: "v-neck",
        applies: |c| c.top().contour_density > 0.02 && c.top().brightness < 100.0,
    },
    Rule {
        value: "scoop neck",
        applies: |c| c.top().edge_density > 0.02,
    },
    Rule {
        value: "strapless",
        applies: |c| c.top().edge_density < 0.005,
    },
];

// Sleeves: textured side regions with visible upper-arm edges.
const SLEEVE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "long sleeves",
        applies: |c| {
            c.sides_texture() > 30.0
                && c.profile.get(RegionKind::UpperMiddle).edge_density > 0.03
        },
    },
    Rule {
        value: "sleeveless",
        applies: |c| {
            c.sides_texture() < 8.0
                && c.profile.get(RegionKind::UpperMiddle).edge_density < 0.01
        },
    },
    Rule {
        value: "3/4 sleeves",
        applies: |c| c.sides_texture() > 20.0,
    },
];

const TOP_STYLE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "structured blazer",
        applies: |c| c.silhouette == "structured" && c.top().brightness < 120.0,
    },
    Rule {
        value: "button-down shirt",
        applies: |c| c.silhouette == "structured",
    },
    Rule {
        value: "flowy blouse",
        applies: |c| c.silhouette == "flowing",
    },
    Rule {
        value: "fitted top",
        applies: |c| c.silhouette == "fitted",
    },
];

const BOTTOM_STYLE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "jeans",
        applies: |c| c.silhouette == "structured" && c.profile.mean_texture_complexity() > 25.0,
    },
    Rule {
        value: "trousers",
        applies: |c| c.silhouette == "structured",
    },
    Rule {
        value: "flowy skirt",
        applies: |c| {
            c.silhouette == "flowing"
                && c.profile.get(RegionKind::LowerMiddle).color_variance > 500.0
        },
    },
    Rule {
        value: "leggings",
        applies: |c| c.silhouette == "fitted",
    },
];

const DRESS_STYLE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "bodycon dress",
        applies: |c| c.silhouette == "fitted",
    },
    Rule {
        value: "a-line dress",
        applies: |c| c.silhouette == "flowing",
    },
    Rule {
        value: "sheath dress",
        applies: |c| c.silhouette == "structured",
    },
];

// Rise: a visible waistband shows as extra edge mass in the middle band and
// a brightness break against the bottom.
const RISE_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "high-rise",
        applies: |c| {
            let middle = c.profile.get(RegionKind::Middle);
            let bottom = c.profile.get(RegionKind::Bottom);
            middle.edge_density > bottom.edge_density + 0.05
                && middle.brightness + 10.0 < bottom.brightness
        },
    },
    Rule {
        value: "low-rise",
        applies: |c| {
            let middle = c.profile.get(RegionKind::Middle);
            let bottom = c.profile.get(RegionKind::Bottom);
            bottom.edge_density > middle.edge_density + 0.05
        },
    },
];

const FIT_RULES: &[Rule<FeatureContext>] = &[
    Rule {
        value: "fitted",
        applies: |c| {
            c.profile.mean_edge_density() > 0.15 && c.profile.mean_texture_complexity() > 25.0
        },
    },
    Rule {
        value: "tailored",
        applies: |c| c.profile.mean_edge_density() > 0.10,
    },
    Rule {
        value: "relaxed",
        applies: |c| c.profile.mean_texture_complexity() > 15.0,
    },
];

const NECKLINE_FALLBACK: &str = "crew neck";
const SLEEVES_FALLBACK: &str = "short sleeves";
const TOP_STYLE_FALLBACK: &str = "casual top";
const BOTTOM_STYLE_FALLBACK: &str = "straight pants";
const DRESS_STYLE_FALLBACK: &str = "shift dress";
const RISE_FALLBACK: &str = "mid-rise";
const FIT_FALLBACK: &str = "loose";

fn pattern_label(ctx: &FeatureContext) -> &'static str {
    if ctx.texture.pattern == "textured" {
        "patterned"
    } else if ctx.colors.len() >= 3 {
        "multicolor"
    } else {
        "solid"
    }
}

fn fabric_label(ctx: &FeatureContext) -> &'static str {
    if ctx.texture.uniformity > 70.0 {
        "smooth knit"
    } else if ctx.texture.uniformity >= 40.0 {
        "woven"
    } else {
        "textured knit"
    }
}

/// Composite confidence: base plus bonuses for strong edge, color and
/// texture signals, capped.
fn confidence(ctx: &FeatureContext) -> u8 {
    let mut score = BASE_CONFIDENCE as u32;
    if ctx.edge_fraction > 0.08 {
        score += 10;
    }
    if ctx.colors.len() >= 2 && ctx.colors[0].percentage > 30.0 {
        score += 10;
    }
    if ctx.texture.complexity > 500.0 {
        score += 10;
    }
    if ctx.contour_count > 10 {
        score += 5;
    }
    score.min(MAX_CONFIDENCE as u32) as u8
}

/// Run every attribute table and assemble the final record.
pub fn extract_features(ctx: &FeatureContext) -> DetectedFeatures {
    let neckline = first_match(NECKLINE_RULES, ctx, NECKLINE_FALLBACK);
    let sleeves = first_match(SLEEVE_RULES, ctx, SLEEVES_FALLBACK);
    let top_style = first_match(TOP_STYLE_RULES, ctx, TOP_STYLE_FALLBACK);
    let bottom_style = first_match(BOTTOM_STYLE_RULES, ctx, BOTTOM_STYLE_FALLBACK);
    let dress_style = first_match(DRESS_STYLE_RULES, ctx, DRESS_STYLE_FALLBACK);
    let rise = first_match(RISE_RULES, ctx, RISE_FALLBACK);
    let fit = first_match(FIT_RULES, ctx, FIT_FALLBACK);
    log::debug!(
        "features: garment={} neckline={neckline} sleeves={sleeves} fit={fit}",
        ctx.garment.as_str()
    );
    DetectedFeatures {
        neckline: neckline.to_string(),
        sleeves: sleeves.to_string(),
        top_style: top_style.to_string(),
        bottom_style: bottom_style.to_string(),
        dress_style: dress_style.to_string(),
        rise: rise.to_string(),
        fit: fit.to_string(),
        colors: ctx.colors.iter().map(|c| c.name.to_string()).collect(),
        confidence: confidence(ctx),
        analysis_details: Some(AnalysisDetails {
            garment_type: ctx.garment,
            pattern_detected: pattern_label(ctx).to_string(),
            fabric_texture: fabric_label(ctx).to_string(),
            silhouette: ctx.silhouette.to_string(),
        }),
    }
}
