//! Integer rectilinear geometry (points, rectangles, closed polygons).
//!
//! Purpose
//! - Value types shared by the merge pipeline: `Point`, `Rect`, `Polygon`.
//! - Exact integer predicates only; no floating point anywhere.
//!
//! Conventions
//! - y grows downwards (top < bottom), matching map/screen coordinates.
//! - `Rect::polygon` winds top-left → top-right → bottom-right → bottom-left,
//!   which has positive shoelace area in this frame.
//! - Adjacency means a shared edge segment of nonzero length; a shared corner is
//!   not enough and overlap is not adjacency.

mod types;
mod util;

pub use types::{Point, Polygon, Rect, COORD_LIMIT};
pub use util::union_area;
