//! Integer plane types: `Point`, `Rect`, `Polygon`.
//!
//! - Coordinates are `i64` and the frame is y-down (top < bottom).
//! - `Rect` edges are derived: left = x, right = x + w, top = y, bottom = y + h.
//! - `Polygon` is implicitly closed; the first point is not repeated.
//! - Edges are computed unchecked. Callers building rectangles from untrusted
//!   input go through `Rect::checked_new`, which keeps every edge within
//!   `±COORD_LIMIT` so edge sums and area products fit in `i64`.

/// Largest absolute edge coordinate accepted by `Rect::checked_new`.
pub const COORD_LIMIT: i64 = 1 << 30;

/// Lattice point. Derived ordering is `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle from an origin and an extent.
///
/// Invariants:
/// - `w` and `h` are expected to be `>= 0`; this is not checked. Zero extents
///   are accepted and yield degenerate polygons.
/// - Equality and hashing use the four defining fields only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

impl Rect {
    #[inline]
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }

    /// `Rect::new` if all four edges lie within `±COORD_LIMIT`, else `None`.
    pub fn checked_new(x: i64, y: i64, w: i64, h: i64) -> Option<Self> {
        let right = x.checked_add(w)?;
        let bottom = y.checked_add(h)?;
        let ok = [x, y, right, bottom]
            .iter()
            .all(|v| (-COORD_LIMIT..=COORD_LIMIT).contains(v));
        ok.then(|| Self::new(x, y, w, h))
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }
    #[inline]
    pub fn width(&self) -> i64 {
        self.w
    }
    #[inline]
    pub fn height(&self) -> i64 {
        self.h
    }
    #[inline]
    pub fn left(&self) -> i64 {
        self.x
    }
    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.w
    }
    #[inline]
    pub fn top(&self) -> i64 {
        self.y
    }
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.h
    }
    #[inline]
    pub fn area(&self) -> i64 {
        self.w * self.h
    }

    /// Open interiors overlap on both axes (touching edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Shares a collinear edge segment of nonzero length with `other`.
    ///
    /// One disjunct per edge pairing: exact equality on the shared edge and a
    /// strict overlap of the perpendicular spans, so a corner contact is not
    /// adjacency.
    pub fn adjoins(&self, other: &Rect) -> bool {
        let y_overlap = other.top() < self.bottom() && self.top() < other.bottom();
        let x_overlap = other.left() < self.right() && self.left() < other.right();
        (self.left() == other.right() && y_overlap)
            || (self.right() == other.left() && y_overlap)
            || (self.bottom() == other.top() && x_overlap)
            || (self.top() == other.bottom() && x_overlap)
    }

    /// `(top-left, bottom-right)`.
    #[inline]
    pub fn corners(&self) -> (Point, Point) {
        (
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.bottom()),
        )
    }

    /// Four corners in the order top-left, top-right, bottom-right, bottom-left.
    pub fn polygon(&self) -> Polygon {
        let (tl, br) = self.corners();
        Polygon::new(vec![
            tl,
            Point::new(br.x, tl.y),
            br,
            Point::new(tl.x, br.y),
        ])
    }

    /// Half-open containment: `left <= p.x < right` and `top <= p.y < bottom`.
    ///
    /// For lattice points this is "the unit cell down-right of `p` lies inside".
    #[inline]
    pub fn covers_cell(&self, p: Point) -> bool {
        self.left() <= p.x && p.x < self.right() && self.top() <= p.y && p.y < self.bottom()
    }
}

/// Closed rectilinear loop of lattice points (closing edge implicit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Shoelace sum `Σ (x_i y_{i+1} − x_{i+1} y_i)`, i.e. twice the signed area.
    ///
    /// Positive for the `Rect::polygon` winding in the y-down frame. Summed in
    /// `i128`, so products of large coordinates do not wrap.
    pub fn twice_signed_area(&self) -> i128 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128
            })
            .sum()
    }

    /// Signed area. Exact for rectilinear lattice polygons (the shoelace sum is
    /// even); fits in `i64` whenever the coordinates are within `±COORD_LIMIT`.
    #[inline]
    pub fn signed_area(&self) -> i64 {
        (self.twice_signed_area() / 2) as i64
    }
}
