//! Per-region aggregate statistics.

use crate::color::{ColorHistogram, ColorSample};

/// Brightness reported for a region that produced no samples.
pub const NEUTRAL_BRIGHTNESS: f32 = 128.0;

/// Divisor folding brightness variance into the texture composite.
const VARIANCE_DIVISOR: f32 = 40.0;

/// Weight folding edge density into the texture composite.
const EDGE_DENSITY_WEIGHT: f32 = 50.0;

/// Read-only aggregate over one region; computed once per analysis call and
/// discarded after feature extraction.
#[derive(Clone, Debug)]
pub struct RegionStats {
    /// Mean brightness in [0, 255].
    pub brightness: f32,
    /// Fraction of sampled pixels over the edge threshold, in [0, 1].
    pub edge_density: f32,
    /// Fraction of sampled pixels over the strong-edge threshold, in [0, 1].
    pub contour_density: f32,
    /// Population variance of brightness.
    pub color_variance: f32,
    /// Top dominant colors, strongest first.
    pub dominant_colors: Vec<ColorSample>,
    /// Composite of variance and edge density, bounded to [0, 100].
    pub texture_complexity: f32,
}

impl RegionStats {
    /// Defaults for a degenerate (unsampled) region: mid brightness, no
    /// edges, no texture. Never NaN.
    pub fn neutral() -> Self {
        Self {
            brightness: NEUTRAL_BRIGHTNESS,
            edge_density: 0.0,
            contour_density: 0.0,
            color_variance: 0.0,
            dominant_colors: Vec::new(),
            texture_complexity: 0.0,
        }
    }
}

/// Running sums for one region scan. Owned by a single region pass; regions
/// never share accumulators, which is what makes the per-region passes
/// trivially parallel.
pub(crate) struct StatsAccumulator {
    count: usize,
    sum_brightness: f64,
    sum_brightness_sq: f64,
    edge_hits: usize,
    contour_hits: usize,
    histogram: ColorHistogram,
}

impl StatsAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            sum_brightness: 0.0,
            sum_brightness_sq: 0.0,
            edge_hits: 0,
            contour_hits: 0,
            histogram: ColorHistogram::new(),
        }
    }

    pub(crate) fn push(&mut self, rgb: [u8; 3], is_edge: bool, is_contour: bool) {
        let brightness = (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 3.0;
        self.count += 1;
        self.sum_brightness += brightness;
        self.sum_brightness_sq += brightness * brightness;
        if is_edge {
            self.edge_hits += 1;
        }
        if is_contour {
            self.contour_hits += 1;
        }
        self.histogram.push(rgb[0], rgb[1], rgb[2]);
    }

    pub(crate) fn finish(self) -> RegionStats {
        if self.count == 0 {
            return RegionStats::neutral();
        }
        let n = self.count as f64;
        let mean = self.sum_brightness / n;
        let variance = (self.sum_brightness_sq / n - mean * mean).max(0.0);
        let edge_density = self.edge_hits as f32 / self.count as f32;
        let contour_density = self.contour_hits as f32 / self.count as f32;
        let texture_complexity =
            (variance as f32 / VARIANCE_DIVISOR + edge_density * EDGE_DENSITY_WEIGHT).min(100.0);
        RegionStats {
            brightness: mean as f32,
            edge_density,
            contour_density,
            color_variance: variance as f32,
            dominant_colors: self.histogram.dominant(),
            texture_complexity,
        }
    }
}
