//! Semantic region statistics: the main signal source every downstream
//! heuristic keys off.

pub mod analyzer;
pub mod layout;
pub mod stats;

pub use analyzer::{analyze_regions, RegionProfile, REGION_STRIDE};
pub use layout::{region_layout, RegionKind};
pub use stats::RegionStats;
