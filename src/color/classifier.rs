//! Nearest-color classification and dominant-color aggregation.

use super::palette::{NEUTRAL, PALETTE};

/// Pixels with average brightness inside this band count as subject; the
/// rest are treated as background (deep shadow / blown-out backdrop) and
/// excluded from dominant-color percentages.
pub const SUBJECT_BRIGHTNESS_LOW: f32 = 40.0;
pub const SUBJECT_BRIGHTNESS_HIGH: f32 = 240.0;

/// Colors below this share of subject pixels are dropped from the output.
pub const MIN_COLOR_PERCENTAGE: f32 = 5.0;

/// At most this many dominant colors are reported, strongest first.
pub const MAX_DOMINANT_COLORS: usize = 5;

/// Map an RGB triple to the nearest in-threshold palette name.
///
/// Scans the palette in declaration order keeping a strict `<` minimum over
/// entries whose own threshold accepts the pixel; exact ties therefore
/// resolve to the earlier entry. Returns `"neutral"` when nothing qualifies.
pub fn classify(r: u8, g: u8, b: u8) -> &'static str {
    let mut best_name = NEUTRAL;
    let mut best_dist = f32::INFINITY;
    for entry in &PALETTE {
        let dr = r as f32 - entry.rgb[0] as f32;
        let dg = g as f32 - entry.rgb[1] as f32;
        let db = b as f32 - entry.rgb[2] as f32;
        let dist = (dr * dr + dg * dg + db * db).sqrt();
        if dist <= entry.threshold && dist < best_dist {
            best_dist = dist;
            best_name = entry.name;
        }
    }
    best_name
}

/// A named color with its RGB centroid and share of counted pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSample {
    pub name: &'static str,
    pub centroid: [u8; 3],
    pub percentage: f32,
}

#[derive(Clone, Copy, Default)]
struct Bucket {
    count: usize,
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
}

impl Bucket {
    fn push(&mut self, r: u8, g: u8, b: u8) {
        self.count += 1;
        self.sum_r += r as u64;
        self.sum_g += g as u64;
        self.sum_b += b as u64;
    }

    fn centroid(&self) -> [u8; 3] {
        if self.count == 0 {
            return [0, 0, 0];
        }
        let n = self.count as u64;
        [
            (self.sum_r / n) as u8,
            (self.sum_g / n) as u8,
            (self.sum_b / n) as u8,
        ]
    }
}

/// Accumulates classified pixels into per-name buckets.
///
/// Subject/background separation uses the brightness band above; when an
/// image has no subject pixels at all (e.g. an entirely black frame) the
/// aggregation falls back to every sampled pixel so a dominant color is
/// still reported.
#[derive(Clone)]
pub struct ColorHistogram {
    // One bucket per palette entry plus a trailing one for "neutral",
    // split by the subject/background test.
    subject: Vec<Bucket>,
    all: Vec<Bucket>,
    subject_total: usize,
    all_total: usize,
}

impl Default for ColorHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorHistogram {
    pub fn new() -> Self {
        let slots = PALETTE.len() + 1;
        Self {
            subject: vec![Bucket::default(); slots],
            all: vec![Bucket::default(); slots],
            subject_total: 0,
            all_total: 0,
        }
    }

    fn slot(name: &str) -> usize {
        PALETTE
            .iter()
            .position(|c| c.name == name)
            .unwrap_or(PALETTE.len())
    }

    fn name_of(slot: usize) -> &'static str {
        PALETTE.get(slot).map(|c| c.name).unwrap_or(NEUTRAL)
    }

    pub fn push(&mut self, r: u8, g: u8, b: u8) {
        let slot = Self::slot(classify(r, g, b));
        self.all[slot].push(r, g, b);
        self.all_total += 1;
        let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
        if (SUBJECT_BRIGHTNESS_LOW..=SUBJECT_BRIGHTNESS_HIGH).contains(&brightness) {
            self.subject[slot].push(r, g, b);
            self.subject_total += 1;
        }
    }

    /// Dominant colors above [`MIN_COLOR_PERCENTAGE`], top
    /// [`MAX_DOMINANT_COLORS`], sorted descending by share.
    pub fn dominant(&self) -> Vec<ColorSample> {
        let (buckets, total) = if self.subject_total > 0 {
            (&self.subject, self.subject_total)
        } else {
            (&self.all, self.all_total)
        };
        if total == 0 {
            return Vec::new();
        }
        let mut samples: Vec<ColorSample> = buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| b.count > 0)
            .map(|(slot, b)| ColorSample {
                name: Self::name_of(slot),
                centroid: b.centroid(),
                percentage: b.count as f32 * 100.0 / total as f32,
            })
            .filter(|s| s.percentage >= MIN_COLOR_PERCENTAGE)
            .collect();
        samples.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        samples.truncate(MAX_DOMINANT_COLORS);
        samples
    }
}
