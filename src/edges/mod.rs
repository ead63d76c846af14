//! Edge processing: Sobel magnitudes and bounded contour tracing.
//!
//! Building blocks for the region statistics and the content validator:
//!
//! - Per-pixel Sobel magnitude with a materialized [`EdgeMap`].
//! - Two named thresholds split pixels into edges and strong (contour)
//!   edges; the exact values are behavioral contract, not tuning guesses.
//! - A stack-based flood tracer grows bounded contours over the strong-edge
//!   map.

pub mod contours;
pub mod sobel;

pub use contours::{find_contours, trace_contour, Contour, MAX_CONTOUR_POINTS, MIN_CONTOUR_POINTS};
pub use sobel::{sobel_magnitude, EdgeMap, CONTOUR_THRESHOLD, EDGE_THRESHOLD};
