//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for the CLI, benches and examples;
//!   breaking changes are allowed.

// Geometry
pub use crate::geom::{union_area, Point, Polygon, Rect};
// Merge pipeline
pub use crate::merge::{
    boundary_points, detect_intersections, extract_boundaries, group_adjacent,
    group_adjacent_indices, rects_to_polygons, BoundaryError,
};
// Random tilings
pub use crate::tiling::{draw_tiling, ReplayToken as TilingReplay, TilingCfg};

/// Total signed area of `polys` (outer loops count positive, holes negative).
///
/// Post: equals `union_area` of the rectangles the loops were extracted from.
pub fn net_area(polys: &[Polygon]) -> i64 {
    polys.iter().map(Polygon::signed_area).sum()
}
