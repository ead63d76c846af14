//! Contour tracing over the strong-edge map.
//!
//! A contour is a connected run of strong-edge pixels grown by an explicit
//! stack-based flood walk (no recursion, so deep contours cannot overflow
//! the call stack). Growth order depends on LIFO pop order and is not part
//! of the contract; downstream consumers only read counts and lengths.

use super::sobel::EdgeMap;

/// Hard cap on points collected per contour; bounds worst-case cost.
pub const MAX_CONTOUR_POINTS: usize = 100;

/// Contours shorter than this are discarded as noise.
pub const MIN_CONTOUR_POINTS: usize = 5;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Ordered pixel coordinates of one traced contour.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<(usize, usize)>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box `(w, h)`; the validator's straight-line check keys off
    /// how thin this box is relative to its length.
    pub fn bounding_box(&self) -> (usize, usize) {
        if self.points.is_empty() {
            return (0, 0);
        }
        let (mut min_x, mut max_x) = (usize::MAX, 0);
        let (mut min_y, mut max_y) = (usize::MAX, 0);
        for &(x, y) in &self.points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        (max_x - min_x + 1, max_y - min_y + 1)
    }
}

/// Grow one contour from `(start_x, start_y)` with a bounded flood walk.
///
/// Pops a coordinate; skips it when already visited or below the strong-edge
/// threshold; otherwise marks it, records it, and pushes all 8 neighbors.
/// Stops growing at [`MAX_CONTOUR_POINTS`] even if connected pixels remain.
pub fn trace_contour(
    edges: &EdgeMap,
    visited: &mut [bool],
    start_x: usize,
    start_y: usize,
) -> Contour {
    let mut points = Vec::new();
    let mut stack = vec![(start_x, start_y)];

    while let Some((x, y)) = stack.pop() {
        if points.len() >= MAX_CONTOUR_POINTS {
            break;
        }
        let idx = y * edges.w + x;
        if visited[idx] || !edges.is_strong_edge(x, y) {
            continue;
        }
        visited[idx] = true;
        points.push((x, y));
        for (dx, dy) in NEIGH_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx >= 0 && ny >= 0 && (nx as usize) < edges.w && (ny as usize) < edges.h {
                stack.push((nx as usize, ny as usize));
            }
        }
    }
    Contour { points }
}

/// Scan the edge map in raster order, tracing a contour from every
/// unvisited strong-edge pixel and keeping those of at least
/// [`MIN_CONTOUR_POINTS`] points.
pub fn find_contours(edges: &EdgeMap) -> Vec<Contour> {
    let mut visited = vec![false; edges.w * edges.h];
    let mut contours = Vec::new();
    for y in 0..edges.h {
        for x in 0..edges.w {
            if visited[y * edges.w + x] || !edges.is_strong_edge(x, y) {
                continue;
            }
            let contour = trace_contour(edges, &mut visited, x, y);
            if contour.len() >= MIN_CONTOUR_POINTS {
                contours.push(contour);
            }
        }
    }
    contours
}
