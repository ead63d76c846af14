//! Sobel gradient magnitudes over grayscale intensity.
//!
//! - Convolves the standard 3×3 kernel pair with the 8-neighborhood of each
//!   pixel; out-of-bounds neighbors are skipped (zero contribution), not
//!   clamped or wrapped.
//! - Intensity is the plain channel mean `(r + g + b) / 3`.
//! - Two thresholds classify a magnitude: `EDGE_THRESHOLD` marks an edge
//!   pixel, the higher `CONTOUR_THRESHOLD` marks a strong edge eligible for
//!   contour tracing.
//!
//! Complexity: O(W·H); memory: one float per pixel.

use crate::image::ImageRgba8;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Magnitude above which a pixel counts as an edge.
pub const EDGE_THRESHOLD: f32 = 30.0;

/// Magnitude above which a pixel counts as a strong (contour) edge.
pub const CONTOUR_THRESHOLD: f32 = 50.0;

/// Sobel magnitude at a single pixel: `sqrt(gx² + gy²)`.
pub fn sobel_magnitude(img: &ImageRgba8<'_>, x: usize, y: usize) -> f32 {
    let mut gx = 0.0f32;
    let mut gy = 0.0f32;
    for ky in 0..3usize {
        let ny = y as isize + ky as isize - 1;
        if ny < 0 || ny >= img.h as isize {
            continue;
        }
        for kx in 0..3usize {
            let nx = x as isize + kx as isize - 1;
            if nx < 0 || nx >= img.w as isize {
                continue;
            }
            let v = img.intensity(nx as usize, ny as usize);
            gx += v * SOBEL_KERNEL_X[ky][kx];
            gy += v * SOBEL_KERNEL_Y[ky][kx];
        }
    }
    (gx * gx + gy * gy).sqrt()
}

/// Materialized per-pixel Sobel magnitudes for one analysis call.
///
/// Owned by the edge/contour pass; row-major, same dimensions as the source
/// buffer.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub w: usize,
    pub h: usize,
    mag: Vec<f32>,
}

impl EdgeMap {
    /// Compute all magnitudes for `img`.
    pub fn compute(img: &ImageRgba8<'_>) -> Self {
        let mut mag = vec![0.0f32; img.w * img.h];
        for y in 0..img.h {
            let row = &mut mag[y * img.w..(y + 1) * img.w];
            for (x, out) in row.iter_mut().enumerate() {
                *out = sobel_magnitude(img, x, y);
            }
        }
        Self {
            w: img.w,
            h: img.h,
            mag,
        }
    }

    #[inline]
    pub fn magnitude(&self, x: usize, y: usize) -> f32 {
        self.mag[y * self.w + x]
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.magnitude(x, y) > EDGE_THRESHOLD
    }

    #[inline]
    pub fn is_strong_edge(&self, x: usize, y: usize) -> bool {
        self.magnitude(x, y) > CONTOUR_THRESHOLD
    }

    /// Fraction of all pixels over the edge threshold.
    pub fn edge_fraction(&self) -> f32 {
        if self.mag.is_empty() {
            return 0.0;
        }
        let edges = self.mag.iter().filter(|&&m| m > EDGE_THRESHOLD).count();
        edges as f32 / self.mag.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageRgba8;

    fn solid(w: usize, h: usize, v: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        data
    }

    #[test]
    fn uniform_image_has_zero_magnitude_everywhere() {
        let data = solid(8, 8, 120);
        let img = ImageRgba8::new(8, 8, &data).unwrap();
        let map = EdgeMap::compute(&img);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(map.magnitude(x, y), 0.0);
            }
        }
        assert_eq!(map.edge_fraction(), 0.0);
    }

    #[test]
    fn step_edge_reaches_kernel_maximum() {
        // Left half black, right half white: the column adjacent to the step
        // sees the full 4*255 horizontal response.
        let w = 8;
        let h = 8;
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..h {
            for x in 0..w {
                let v = if x < w / 2 { 0u8 } else { 255u8 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let img = ImageRgba8::new(w, h, &data).unwrap();
        let map = EdgeMap::compute(&img);
        let step_mag = map.magnitude(w / 2, h / 2);
        assert!(
            (step_mag - 4.0 * 255.0).abs() < 1e-3,
            "expected full kernel response, got {step_mag}"
        );
        assert!(map.is_strong_edge(w / 2, h / 2));
    }

    #[test]
    fn one_by_one_image_is_safe() {
        let data = solid(1, 1, 200);
        let img = ImageRgba8::new(1, 1, &data).unwrap();
        let map = EdgeMap::compute(&img);
        assert_eq!(map.magnitude(0, 0), 0.0);
    }
}
