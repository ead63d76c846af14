//! Declarative semantic region layout.
//!
//! Eight overlapping rectangles declared as fractions of the full image and
//! recomputed per image size. Overlap is intentional: the upper-middle band
//! shares rows with both top and middle so neckline/sleeve heuristics see
//! context on both sides of a boundary.

use crate::image::Region;

/// Semantic regions the statistics pass aggregates over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    Top,
    UpperMiddle,
    Middle,
    LowerMiddle,
    Bottom,
    LeftSide,
    RightSide,
    Center,
}

impl RegionKind {
    pub const ALL: [RegionKind; 8] = [
        RegionKind::Top,
        RegionKind::UpperMiddle,
        RegionKind::Middle,
        RegionKind::LowerMiddle,
        RegionKind::Bottom,
        RegionKind::LeftSide,
        RegionKind::RightSide,
        RegionKind::Center,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            RegionKind::Top => 0,
            RegionKind::UpperMiddle => 1,
            RegionKind::Middle => 2,
            RegionKind::LowerMiddle => 3,
            RegionKind::Bottom => 4,
            RegionKind::LeftSide => 5,
            RegionKind::RightSide => 6,
            RegionKind::Center => 7,
        }
    }

    /// Fractional rectangle `(fx, fy, fw, fh)` of the full image.
    fn fractions(self) -> (f32, f32, f32, f32) {
        match self {
            RegionKind::Top => (0.0, 0.0, 1.0, 0.25),
            RegionKind::UpperMiddle => (0.0, 0.15, 1.0, 0.35),
            RegionKind::Middle => (0.0, 0.35, 1.0, 0.30),
            RegionKind::LowerMiddle => (0.0, 0.55, 1.0, 0.30),
            RegionKind::Bottom => (0.0, 0.75, 1.0, 0.25),
            RegionKind::LeftSide => (0.0, 0.20, 0.25, 0.60),
            RegionKind::RightSide => (0.75, 0.20, 0.25, 0.60),
            RegionKind::Center => (0.25, 0.25, 0.50, 0.50),
        }
    }

    pub fn region(self, width: usize, height: usize) -> Region {
        let (fx, fy, fw, fh) = self.fractions();
        Region::from_fractions(width, height, fx, fy, fw, fh)
    }
}

/// Concrete regions for a `width`×`height` image, in [`RegionKind::ALL`]
/// order.
pub fn region_layout(width: usize, height: usize) -> [(RegionKind, Region); 8] {
    RegionKind::ALL.map(|kind| (kind, kind.region(width, height)))
}
