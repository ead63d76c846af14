//! The analysis pipeline end-to-end.
//!
//! Stage order per call:
//! 1. decode + pre-scale (for the byte entry point),
//! 2. Sobel edge map, then contour tracing over it,
//! 3. whole-image texture summary and region statistics (independent pure
//!    passes over the immutable buffer; regions run in parallel),
//! 4. optional clothing-content gate — a rejection stops here,
//! 5. garment-type classification and per-attribute feature rules.
//!
//! Every pass is a pure function of the buffer and named constants, so a
//! repeated call on the same pixels returns an identical record. The only
//! sequential dependency is edge map → contours → contour-derived counts.

use super::params::AnalyzerParams;
use crate::classify::{classify_garment, classify_silhouette};
use crate::color::ColorHistogram;
use crate::edges::{find_contours, EdgeMap};
use crate::error::AnalysisError;
use crate::features::{extract_features, fallback_features, FeatureContext};
use crate::image::{decode_rgba, ImageRgba8, Region};
use crate::regions::analyze_regions;
use crate::texture::analyze_texture;
use crate::types::{DetectedFeatures, ValidationReport};
use crate::validate::validate_content;
use log::debug;

/// Stride for the whole-image dominant-color scan.
const COLOR_SCAN_STRIDE: usize = 4;

/// Ready-to-use analyzer. Construction is explicit and cheap; the analyzer
/// holds no per-image state, so one instance can serve any number of calls.
pub struct GarmentAnalyzer {
    params: AnalyzerParams,
}

impl Default for GarmentAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerParams::default())
    }
}

impl GarmentAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Decode encoded image bytes, pre-scale, and analyze.
    ///
    /// The decoded buffer lives exactly as long as this call; it is dropped
    /// on every exit path.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<DetectedFeatures, AnalysisError> {
        let buffer = decode_rgba(bytes, self.params.max_dimension)?;
        self.analyze(&buffer.as_view())
    }

    /// Analyze an already-decoded pixel buffer.
    pub fn analyze(&self, img: &ImageRgba8<'_>) -> Result<DetectedFeatures, AnalysisError> {
        if img.w == 0 || img.h == 0 {
            return Err(AnalysisError::Analysis(format!(
                "cannot analyze a {}x{} image",
                img.w, img.h
            )));
        }

        let edges = EdgeMap::compute(img);
        let contours = find_contours(&edges);
        debug!(
            "edges: fraction={:.4} contours={}",
            edges.edge_fraction(),
            contours.len()
        );

        let texture = analyze_texture(img);
        debug!(
            "texture: complexity={:.1} uniformity={:.1} pattern={}",
            texture.complexity, texture.uniformity, texture.pattern
        );

        let profile = analyze_regions(img, &edges);

        if self.params.validate_content {
            let report = validate_content(img, &edges, &contours, &profile);
            if !report.is_clothing {
                return Err(AnalysisError::NotClothing(report));
            }
        }

        let garment = classify_garment(&profile, img.w, img.h);
        let silhouette = classify_silhouette(&profile);
        let colors = self.scan_colors(img);

        let ctx = FeatureContext {
            garment,
            silhouette,
            texture,
            colors,
            contour_count: contours.len(),
            edge_fraction: edges.edge_fraction(),
            profile,
        };
        Ok(extract_features(&ctx))
    }

    /// Run only the clothing-content gate.
    pub fn validate(&self, img: &ImageRgba8<'_>) -> ValidationReport {
        let edges = EdgeMap::compute(img);
        let contours = find_contours(&edges);
        let profile = analyze_regions(img, &edges);
        validate_content(img, &edges, &contours, &profile)
    }

    /// The fixed degraded-mode record callers may substitute for an
    /// [`AnalysisError::Analysis`] when they prefer graceful degradation.
    /// Never used implicitly.
    pub fn fallback_features(&self) -> DetectedFeatures {
        fallback_features()
    }

    fn scan_colors(&self, img: &ImageRgba8<'_>) -> Vec<crate::color::ColorSample> {
        let whole = Region {
            x: 0,
            y: 0,
            w: img.w,
            h: img.h,
        };
        let mut hist = ColorHistogram::new();
        for (x, y) in whole.samples(img.w, img.h, COLOR_SCAN_STRIDE) {
            let [r, g, b] = img.rgb(x, y);
            hist.push(r, g, b);
        }
        hist.dominant()
    }
}
