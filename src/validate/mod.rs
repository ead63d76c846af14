//! Clothing-content gate.
//!
//! Before the (comparatively expensive) full feature extraction runs, five
//! weighted plausibility signals score how likely the image is to show
//! clothing at all:
//!
//! - fabric texture: local intensity variance inside a plausible fabric band
//!   (30 points)
//! - garment silhouette: neckline edge mass in the upper-third center plus
//!   vertical sleeve edges along the sides (25 points)
//! - color-area consistency: block-wise dominant colors, 1–5 distinct
//!   dominants with a consistent leader (20 points)
//! - subject-vs-background focus: center variance over border variance,
//!   plus skin-tone presence (15 points)
//! - anti-patterns: absence of long straight architecture/horizon lines
//!   (10 points)
//!
//! The acceptance threshold is deliberately strict: a false rejection costs
//! the user a retake, a false acceptance produces fabricated styling advice.

use crate::color::classify;
use crate::color::palette::PALETTE;
use crate::edges::{Contour, EdgeMap};
use crate::image::ImageRgba8;
use crate::regions::{RegionKind, RegionProfile};
use crate::types::ValidationReport;

/// Minimum confidence for `is_clothing`.
pub const CLOTHING_CONFIDENCE_THRESHOLD: u8 = 75;

/// Local-variance band considered plausible for fabric.
pub const FABRIC_VARIANCE_LOW: f32 = 15.0;
pub const FABRIC_VARIANCE_HIGH: f32 = 2500.0;

/// Strong-edge density band plausible for a neckline arc in the
/// upper-third center of the frame.
pub const NECKLINE_DENSITY_LOW: f32 = 0.01;
pub const NECKLINE_DENSITY_HIGH: f32 = 0.40;

/// Center region variance must exceed the border mean by this factor for
/// the image to read as "subject in focus".
pub const FOCUS_VARIANCE_RATIO: f32 = 1.3;

/// Minimum fraction of skin-tone pixels counting toward the focus signal.
pub const SKIN_FRACTION_MIN: f32 = 0.02;

/// Contours at least this long with a bounding box this thin count as
/// straight lines; images dominated by them are rejected.
pub const STRAIGHT_LINE_MIN_SPAN: usize = 20;
pub const STRAIGHT_LINE_MAX_THICKNESS: usize = 3;
pub const STRAIGHT_LINE_REJECT_FRACTION: f32 = 0.4;

const FABRIC_POINTS: f32 = 30.0;
const NECKLINE_POINTS: f32 = 12.0;
const SLEEVE_POINTS_PER_SIDE: f32 = 6.5;
const COLOR_POINTS: f32 = 20.0;
const FOCUS_POINTS: f32 = 10.0;
const SKIN_POINTS: f32 = 5.0;
const ANTI_PATTERN_POINTS: f32 = 10.0;

/// Run the gate. Pure over its inputs; never runs feature extraction.
pub fn validate_content(
    img: &ImageRgba8<'_>,
    edges: &EdgeMap,
    contours: &[Contour],
    profile: &RegionProfile,
) -> ValidationReport {
    let mut reasons = Vec::new();
    let mut score = 0.0f32;

    score += fabric_texture_score(img, &mut reasons);
    score += silhouette_score(img, edges, &mut reasons);
    score += color_consistency_score(img, &mut reasons);
    score += focus_score(img, profile, &mut reasons);
    score += anti_pattern_score(contours, &mut reasons);

    let confidence = score.round().clamp(0.0, 100.0) as u8;
    let is_clothing = confidence >= CLOTHING_CONFIDENCE_THRESHOLD;
    log::debug!("content validation: confidence={confidence} is_clothing={is_clothing}");
    let suggestion = if is_clothing {
        None
    } else {
        Some(suggestion_for(confidence).to_string())
    };
    ValidationReport {
        is_clothing,
        confidence,
        reasons,
        suggestion,
    }
}

/// Graded advice text; three bands, strongest rejection last.
fn suggestion_for(confidence: u8) -> &'static str {
    if confidence >= 60 {
        "This looks close to a clothing photo. Try a tighter crop around the garment on an even background."
    } else if confidence >= 40 {
        "We couldn't confidently find clothing here. Photograph the garment flat or on a hanger, filling most of the frame."
    } else {
        "This image doesn't appear to show clothing. Please upload a photo of a single garment on a plain background."
    }
}

/// Mean/variance of the 3×3 neighborhood intensity at an interior pixel.
fn local_variance(img: &ImageRgba8<'_>, x: usize, y: usize) -> f32 {
    let mut sum = 0.0f32;
    let mut sum_sq = 0.0f32;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            let v = img.intensity((x as isize + dx) as usize, (y as isize + dy) as usize);
            sum += v;
            sum_sq += v * v;
        }
    }
    let mean = sum / 9.0;
    (sum_sq / 9.0 - mean * mean).max(0.0)
}

/// Fabric plausibility: fraction of coarse samples whose local variance
/// falls inside the fabric band.
fn fabric_texture_score(img: &ImageRgba8<'_>, reasons: &mut Vec<String>) -> f32 {
    if img.w < 3 || img.h < 3 {
        return 0.0;
    }
    let mut samples = 0usize;
    let mut in_band = 0usize;
    for y in (1..img.h - 1).step_by(8) {
        for x in (1..img.w - 1).step_by(8) {
            samples += 1;
            let variance = local_variance(img, x, y);
            if (FABRIC_VARIANCE_LOW..=FABRIC_VARIANCE_HIGH).contains(&variance) {
                in_band += 1;
            }
        }
    }
    if samples == 0 {
        return 0.0;
    }
    let fraction = in_band as f32 / samples as f32;
    let points = fraction * FABRIC_POINTS;
    if fraction < 0.3 {
        reasons.push("surface variance does not look like fabric".to_string());
    }
    points
}

/// Neckline arc plus vertical sleeve edges.
fn silhouette_score(img: &ImageRgba8<'_>, edges: &EdgeMap, reasons: &mut Vec<String>) -> f32 {
    let mut points = 0.0f32;

    // Neckline: strong-edge density over the upper-third center.
    let (x0, x1) = (img.w / 3, img.w * 2 / 3);
    let y1 = img.h / 3;
    let mut samples = 0usize;
    let mut strong = 0usize;
    for y in (0..y1).step_by(2) {
        for x in (x0..x1).step_by(2) {
            samples += 1;
            if edges.is_strong_edge(x, y) {
                strong += 1;
            }
        }
    }
    let neckline_density = if samples == 0 {
        0.0
    } else {
        strong as f32 / samples as f32
    };
    if (NECKLINE_DENSITY_LOW..=NECKLINE_DENSITY_HIGH).contains(&neckline_density) {
        points += NECKLINE_POINTS;
    } else {
        reasons.push("no neckline-like edge structure in the upper third".to_string());
    }

    // Sleeves: at least one column per side strip with a substantial
    // vertical run of edge pixels.
    let min_run = img.h / 6;
    let strip = (img.w / 5).max(1);
    let mut sides_hit = 0u32;
    for side in [0..strip, img.w.saturating_sub(strip)..img.w] {
        let mut found = false;
        for x in side {
            let run = (0..img.h).filter(|&y| edges.is_edge(x, y)).count();
            if run >= min_run && min_run > 0 {
                found = true;
                break;
            }
        }
        if found {
            sides_hit += 1;
        }
    }
    points += sides_hit as f32 * SLEEVE_POINTS_PER_SIDE;
    if sides_hit == 0 {
        reasons.push("no vertical sleeve-like edges along the sides".to_string());
    }
    points
}

/// Block-wise dominant-color consistency: clothing photos have a small set
/// of dominant colors with one clear leader.
fn color_consistency_score(img: &ImageRgba8<'_>, reasons: &mut Vec<String>) -> f32 {
    const GRID: usize = 4;
    if img.w < GRID || img.h < GRID {
        return 0.0;
    }
    let block_w = img.w / GRID;
    let block_h = img.h / GRID;
    // Slot counts over the palette plus a trailing neutral slot, to keep
    // argmax deterministic (first-declared wins ties).
    let mut block_dominants: Vec<usize> = Vec::with_capacity(GRID * GRID);
    for by in 0..GRID {
        for bx in 0..GRID {
            let mut counts = vec![0usize; PALETTE.len() + 1];
            for y in (by * block_h..(by + 1) * block_h).step_by(4) {
                for x in (bx * block_w..(bx + 1) * block_w).step_by(4) {
                    let [r, g, b] = img.rgb(x, y);
                    let name = classify(r, g, b);
                    let slot = PALETTE
                        .iter()
                        .position(|c| c.name == name)
                        .unwrap_or(PALETTE.len());
                    counts[slot] += 1;
                }
            }
            let dominant = counts
                .iter()
                .enumerate()
                .max_by_key(|&(i, &c)| (c, usize::MAX - i))
                .map(|(i, _)| i)
                .unwrap_or(PALETTE.len());
            block_dominants.push(dominant);
        }
    }

    let mut slot_counts = vec![0usize; PALETTE.len() + 1];
    for &slot in &block_dominants {
        slot_counts[slot] += 1;
    }
    let distinct = slot_counts.iter().filter(|&&c| c > 0).count();
    let leader = slot_counts.iter().copied().max().unwrap_or(0);
    let consistency = leader as f32 / block_dominants.len() as f32;

    if (1..=5).contains(&distinct) {
        consistency * COLOR_POINTS
    } else {
        reasons.push("color layout is too fragmented for a garment".to_string());
        0.0
    }
}

/// Classic RGB skin-tone test.
fn is_skin_tone(r: u8, g: u8, b: u8) -> bool {
    let min = r.min(g).min(b);
    r > 95 && g > 40 && b > 20 && r > g && r > b && (r as i16 - min as i16) > 15
}

/// Subject focus: center variance over border variance, plus skin presence.
fn focus_score(img: &ImageRgba8<'_>, profile: &RegionProfile, reasons: &mut Vec<String>) -> f32 {
    let mut points = 0.0f32;
    let center = profile.get(RegionKind::Center).color_variance;
    let border = [
        RegionKind::Top,
        RegionKind::Bottom,
        RegionKind::LeftSide,
        RegionKind::RightSide,
    ]
    .iter()
    .map(|&k| profile.get(k).color_variance)
    .sum::<f32>()
        / 4.0;
    if center > border * FOCUS_VARIANCE_RATIO {
        points += FOCUS_POINTS;
    } else {
        reasons.push("no clear subject stands out from the background".to_string());
    }

    let mut samples = 0usize;
    let mut skin = 0usize;
    for y in (0..img.h).step_by(4) {
        for x in (0..img.w).step_by(4) {
            samples += 1;
            let [r, g, b] = img.rgb(x, y);
            if is_skin_tone(r, g, b) {
                skin += 1;
            }
        }
    }
    if samples > 0 && skin as f32 / samples as f32 > SKIN_FRACTION_MIN {
        points += SKIN_POINTS;
    }
    points
}

/// Architecture/nature/vehicle anti-pattern: a large share of long, thin,
/// straight contours means horizons, walls or body panels, not drape.
fn anti_pattern_score(contours: &[Contour], reasons: &mut Vec<String>) -> f32 {
    if contours.is_empty() {
        return ANTI_PATTERN_POINTS;
    }
    let straight = contours
        .iter()
        .filter(|c| {
            let (bw, bh) = c.bounding_box();
            bw.max(bh) >= STRAIGHT_LINE_MIN_SPAN && bw.min(bh) <= STRAIGHT_LINE_MAX_THICKNESS
        })
        .count();
    let fraction = straight as f32 / contours.len() as f32;
    if fraction > STRAIGHT_LINE_REJECT_FRACTION {
        reasons.push("dominated by long straight lines (architecture or scenery)".to_string());
        0.0
    } else {
        ANTI_PATTERN_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::find_contours;
    use crate::regions::analyze_regions;

    fn run(data: &[u8], w: usize, h: usize) -> ValidationReport {
        let img = ImageRgba8::new(w, h, data).unwrap();
        let edges = EdgeMap::compute(&img);
        let contours = find_contours(&edges);
        let profile = analyze_regions(&img, &edges);
        validate_content(&img, &edges, &contours, &profile)
    }

    #[test]
    fn flat_gray_frame_is_rejected_with_suggestion() {
        let data: Vec<u8> = std::iter::repeat([128u8, 128, 128, 255])
            .take(160 * 160)
            .flatten()
            .collect();
        let report = run(&data, 160, 160);
        assert!(!report.is_clothing);
        assert!(report.confidence < CLOTHING_CONFIDENCE_THRESHOLD);
        assert!(report.suggestion.is_some());
        assert!(!report.reasons.is_empty());
    }

    #[test]
    fn straight_line_scene_loses_anti_pattern_points() {
        // Horizontal stripes every 20 rows: long thin contours.
        let (w, h) = (200usize, 200usize);
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for _ in 0..w {
                let v = if y % 20 == 0 { 0u8 } else { 200u8 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let report = run(&data, w, h);
        assert!(!report.is_clothing);
        assert!(report
            .reasons
            .iter()
            .any(|r| r.contains("straight lines")));
    }

    #[test]
    fn suggestion_bands_are_graded() {
        assert!(suggestion_for(70).contains("close"));
        assert!(suggestion_for(50).contains("couldn't confidently"));
        assert!(suggestion_for(10).contains("doesn't appear"));
    }

    #[test]
    fn skin_tone_rule_accepts_typical_tones() {
        assert!(is_skin_tone(200, 150, 120));
        assert!(!is_skin_tone(120, 150, 200));
        assert!(!is_skin_tone(90, 90, 90));
    }
}
