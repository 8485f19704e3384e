//! Rectangles → zone polygons.
//!
//! Purpose
//! - Group rectangles into maximal edge-adjacent components and replace each
//!   component by the polygon(s) bounding its union, with all shared interior
//!   edges removed.
//!
//! Pipeline
//! - `detect_intersections` (optional, diagnostic side channel; callers log it)
//! - `group_adjacent` → singleton groups use `Rect::polygon` directly;
//!   larger groups go through `extract_boundaries`.
//!
//! Limits
//! - Only exact edge contact merges. Overlapping rectangles stay in separate
//!   groups unless they also share an edge, in which case extraction may fail
//!   with `BoundaryError` or produce a wrong outline.
//! - Zero-extent rectangles are accepted but their output is degenerate.
//!
//! Code cross-refs: `geom::{Rect, Polygon}`

mod boundary;
mod group;
mod intersect;

pub use boundary::{boundary_points, extract_boundaries, BoundaryError};
pub use group::{group_adjacent, group_adjacent_indices};
pub use intersect::detect_intersections;

use crate::geom::{Polygon, Rect};

/// Full pipeline: polygons for every adjacency group, groups in input order.
pub fn rects_to_polygons(rects: &[Rect]) -> Result<Vec<Polygon>, BoundaryError> {
    let mut polygons = Vec::new();
    for g in group_adjacent(rects) {
        match g.as_slice() {
            [only] => polygons.push(only.polygon()),
            _ => polygons.extend(extract_boundaries(&g)?),
        }
    }
    Ok(polygons)
}

#[cfg(test)]
mod tests;
