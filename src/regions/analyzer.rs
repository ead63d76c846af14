//! Region statistics pass.
//!
//! Runs the strided sampler over every declared region, folding brightness,
//! edge/contour hits and the color histogram into [`RegionStats`]. Each
//! region owns its accumulator, so the eight scans run in parallel.

use super::layout::{region_layout, RegionKind};
use super::stats::{RegionStats, StatsAccumulator};
use crate::edges::EdgeMap;
use crate::image::{ImageRgba8, Region};
use rayon::prelude::*;

/// Sampling stride used for region scans.
pub const REGION_STRIDE: usize = 2;

/// Statistics for all eight semantic regions of one image.
#[derive(Clone, Debug)]
pub struct RegionProfile {
    stats: Vec<RegionStats>,
}

impl RegionProfile {
    pub fn get(&self, kind: RegionKind) -> &RegionStats {
        &self.stats[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionKind, &RegionStats)> {
        RegionKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    /// Mean edge density across all regions.
    pub fn mean_edge_density(&self) -> f32 {
        self.stats.iter().map(|s| s.edge_density).sum::<f32>() / self.stats.len() as f32
    }

    /// Mean contour density across all regions.
    pub fn mean_contour_density(&self) -> f32 {
        self.stats.iter().map(|s| s.contour_density).sum::<f32>() / self.stats.len() as f32
    }

    /// Mean texture complexity across all regions.
    pub fn mean_texture_complexity(&self) -> f32 {
        self.stats.iter().map(|s| s.texture_complexity).sum::<f32>() / self.stats.len() as f32
    }

}

fn scan_region(img: &ImageRgba8<'_>, edges: &EdgeMap, region: Region) -> RegionStats {
    let mut acc = StatsAccumulator::new();
    for (x, y) in region.samples(img.w, img.h, REGION_STRIDE) {
        let rgb = img.rgb(x, y);
        acc.push(rgb, edges.is_edge(x, y), edges.is_strong_edge(x, y));
    }
    acc.finish()
}

/// Compute [`RegionStats`] for every declared region, in parallel.
pub fn analyze_regions(img: &ImageRgba8<'_>, edges: &EdgeMap) -> RegionProfile {
    let layout = region_layout(img.w, img.h);
    let stats: Vec<RegionStats> = layout
        .par_iter()
        .map(|&(_, region)| scan_region(img, edges, region))
        .collect();
    RegionProfile { stats }
}
