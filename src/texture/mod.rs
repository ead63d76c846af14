//! Local-pattern texture descriptor.
//!
//! At each sample point the center intensity is compared against its 8
//! neighbors, building an 8-bit pattern (bit set when the neighbor is
//! brighter). The pattern reduces to a per-point complexity: the number of
//! bit-to-bit transitions scanning bits 0 through 7 in order. The scan does
//! NOT wrap from bit 7 back to bit 0 — the non-circular count is deliberate
//! reference behavior, not an oversight.

use crate::image::ImageRgba8;

/// Sample grid step in both axes.
pub const TEXTURE_STRIDE: usize = 4;

/// Whole-image complexity above which the pattern tag is `"textured"`.
pub const TEXTURED_COMPLEXITY: f32 = 1500.0;

/// Whole-image complexity below which the pattern tag is `"smooth"`.
pub const SMOOTH_COMPLEXITY: f32 = 300.0;

/// Neighbor offsets in bit order: bit 0 is the upper-left neighbor,
/// proceeding row by row.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 8-bit neighbor-comparison pattern at an interior pixel.
/// Caller guarantees `1 <= x < w-1` and `1 <= y < h-1`.
pub fn local_pattern(img: &ImageRgba8<'_>, x: usize, y: usize) -> u8 {
    let center = img.intensity(x, y);
    let mut pattern = 0u8;
    for (bit, (dx, dy)) in NEIGHBORS.iter().enumerate() {
        let nx = (x as isize + dx) as usize;
        let ny = (y as isize + dy) as usize;
        if img.intensity(nx, ny) > center {
            pattern |= 1 << bit;
        }
    }
    pattern
}

/// Count 0↔1 boundaries over bits 0..7 in order; bit 7 does not compare
/// back against bit 0.
pub fn pattern_transitions(pattern: u8) -> u32 {
    let mut transitions = 0;
    for bit in 0..7 {
        if (pattern >> bit) & 1 != (pattern >> (bit + 1)) & 1 {
            transitions += 1;
        }
    }
    transitions
}

/// Whole-image texture measures.
#[derive(Clone, Copy, Debug)]
pub struct TextureSummary {
    /// Sum of per-point transition counts over the sample grid.
    pub complexity: f32,
    /// `100 - min(complexity / 20, 100)`.
    pub uniformity: f32,
    /// `"smooth"`, `"patterned"` or `"textured"`.
    pub pattern: &'static str,
}

/// Sample a coarse interior grid (stride [`TEXTURE_STRIDE`], one-pixel
/// border) and aggregate pattern complexity.
pub fn analyze_texture(img: &ImageRgba8<'_>) -> TextureSummary {
    let mut complexity = 0.0f32;
    if img.w >= 3 && img.h >= 3 {
        for y in (1..img.h - 1).step_by(TEXTURE_STRIDE) {
            for x in (1..img.w - 1).step_by(TEXTURE_STRIDE) {
                complexity += pattern_transitions(local_pattern(img, x, y)) as f32;
            }
        }
    }
    let uniformity = 100.0 - (complexity / 20.0).min(100.0);
    let pattern = if complexity > TEXTURED_COMPLEXITY {
        "textured"
    } else if complexity < SMOOTH_COMPLEXITY {
        "smooth"
    } else {
        "patterned"
    };
    TextureSummary {
        complexity,
        uniformity,
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageRgba8;

    #[test]
    fn transition_count_is_non_circular() {
        // 0b1000_0001: set bits at both ends. Circular counting would see 4
        // boundaries; the non-circular scan sees 2 (bits 0→1 and 6→7).
        assert_eq!(pattern_transitions(0b1000_0001), 2);
        assert_eq!(pattern_transitions(0b0000_0000), 0);
        assert_eq!(pattern_transitions(0b1111_1111), 0);
        assert_eq!(pattern_transitions(0b0101_0101), 7);
    }

    #[test]
    fn flat_image_is_smooth_with_full_uniformity() {
        let data: Vec<u8> = std::iter::repeat([90u8, 90, 90, 255])
            .take(32 * 32)
            .flatten()
            .collect();
        let img = ImageRgba8::new(32, 32, &data).unwrap();
        let summary = analyze_texture(&img);
        assert_eq!(summary.complexity, 0.0);
        assert_eq!(summary.uniformity, 100.0);
        assert_eq!(summary.pattern, "smooth");
    }

    #[test]
    fn checkerboard_is_textured() {
        let (w, h) = (64usize, 64usize);
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for x in 0..w {
                let v = if (x + y) % 2 == 0 { 20u8 } else { 220u8 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let img = ImageRgba8::new(w, h, &data).unwrap();
        let summary = analyze_texture(&img);
        assert!(summary.complexity > TEXTURED_COMPLEXITY);
        assert_eq!(summary.pattern, "textured");
        assert_eq!(summary.uniformity, 0.0);
    }

    #[test]
    fn tiny_image_yields_neutral_summary() {
        let data = vec![10u8, 10, 10, 255];
        let img = ImageRgba8::new(1, 1, &data).unwrap();
        let summary = analyze_texture(&img);
        assert_eq!(summary.complexity, 0.0);
        assert_eq!(summary.pattern, "smooth");
    }
}
