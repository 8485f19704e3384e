//! Rectangle sets → zone polygons.
//!
//! Groups axis-aligned rectangles into maximal edge-adjacent components and
//! replaces each component by the polygon(s) bounding its union. Everything is
//! exact integer geometry, synchronous and in memory; parsing and output
//! formats live in the `cli` crate.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI. There is no stable public API;
//!   prefer `api` or `prelude` re-exports over deep module paths.

pub mod api;
pub mod geom;
pub mod merge;
pub mod tiling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Polygon, Rect, COORD_LIMIT};
pub use merge::{
    detect_intersections, extract_boundaries, group_adjacent, rects_to_polygons, BoundaryError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{union_area, Point, Polygon, Rect};
    pub use crate::merge::{
        boundary_points, detect_intersections, extract_boundaries, group_adjacent,
        group_adjacent_indices, rects_to_polygons, BoundaryError,
    };
}
