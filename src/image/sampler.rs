//! Axis-aligned regions and strided pixel sampling.
//!
//! Regions are declared as fractions of the full image and recomputed per
//! image size; fractional rounding means a region may overhang the buffer by
//! a pixel, so the sampler clips rather than errors.

/// Axis-aligned rectangle in pixel-buffer coordinates. May overlap other
/// regions; clipped to buffer bounds when sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Region {
    /// Build a region from fractional coordinates of a `width`×`height`
    /// image. Fractions are clamped to [0, 1].
    pub fn from_fractions(
        width: usize,
        height: usize,
        fx: f32,
        fy: f32,
        fw: f32,
        fh: f32,
    ) -> Self {
        let x = (width as f32 * fx.clamp(0.0, 1.0)) as usize;
        let y = (height as f32 * fy.clamp(0.0, 1.0)) as usize;
        let w = (width as f32 * fw.clamp(0.0, 1.0)).ceil() as usize;
        let h = (height as f32 * fh.clamp(0.0, 1.0)).ceil() as usize;
        Self { x, y, w, h }
    }

    /// Strided coordinate generator over the intersection of this region and
    /// a `bounds_w`×`bounds_h` buffer. Steps by `stride` (≥1) in both axes
    /// and silently skips out-of-bounds coordinates. Pure; no side effects.
    pub fn samples(
        &self,
        bounds_w: usize,
        bounds_h: usize,
        stride: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let stride = stride.max(1);
        let (x0, y0) = (self.x, self.y);
        let x_end = x0.saturating_add(self.w).min(bounds_w);
        let y_end = y0.saturating_add(self.h).min(bounds_h);
        (y0..y_end)
            .step_by(stride)
            .flat_map(move |y| (x0..x_end).step_by(stride).map(move |x| (x, y)))
    }
}
