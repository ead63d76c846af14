use crate::error::AnalysisError;

/// Borrowed, immutable view over an interleaved RGBA byte buffer.
///
/// Origin top-left, row-major, tightly packed. The length invariant
/// `data.len() == w * h * 4` is checked at construction so every later
/// access can index without re-validating.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// Wrap a raw buffer, enforcing the length invariant.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, AnalysisError> {
        let expected = w * h * 4;
        if data.len() != expected {
            return Err(AnalysisError::Analysis(format!(
                "pixel buffer length {} does not match {}x{} RGBA ({expected} bytes)",
                data.len(),
                w,
                h
            )));
        }
        Ok(Self { w, h, data })
    }

    /// RGB channels at `(x, y)`. Caller guarantees in-bounds coordinates.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Grayscale intensity `(r + g + b) / 3` in [0, 255].
    #[inline]
    pub fn intensity(&self, x: usize, y: usize) -> f32 {
        let [r, g, b] = self.rgb(x, y);
        (r as f32 + g as f32 + b as f32) / 3.0
    }
}

/// Owned RGBA buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, AnalysisError> {
        // Validate through the view constructor so the invariant lives once.
        ImageRgba8::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`ImageRgba8`] view.
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8 {
            w: self.width,
            h: self.height,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_invariant_enforced() {
        let data = vec![0u8; 4 * 4 * 4];
        assert!(ImageRgba8::new(4, 4, &data).is_ok());
        assert!(ImageRgba8::new(4, 5, &data).is_err());
        assert!(ImageRgba8::new(0, 0, &[]).is_ok());
    }

    #[test]
    fn intensity_averages_channels() {
        let data = vec![30u8, 60, 90, 255];
        let img = ImageRgba8::new(1, 1, &data).unwrap();
        assert_eq!(img.intensity(0, 0), 60.0);
    }
}
