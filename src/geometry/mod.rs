//! 2D geometry primitives
//!
//! Points are plain `glam::Vec2` values. `Line2D` is a directed segment used
//! both as a bounded polygon edge and, through `intersect_unbounded`, as the
//! infinite carrier line of a bisector.

mod polygon;

pub use polygon::Polygon;

use glam::Vec2;

/// Determinant magnitude below which two lines are treated as parallel
pub const EPSILON: f32 = 1e-6;

/// Euclidean distance between two points
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Unit vector in the direction of `v`
///
/// Returns `None` for a zero-length (or non-finite) vector instead of
/// dividing by zero.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Rotate a vector a quarter turn counter-clockwise: `(x, y) -> (-y, x)`
#[inline]
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// A directed line through two points
///
/// Whether it behaves as a segment or an infinite line is decided per
/// intersection query, not by the type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    /// Start point
    pub a: Vec2,
    /// End point
    pub b: Vec2,
    /// `b - a`
    pub direction: Vec2,
}

impl Line2D {
    /// Create a line from `a` to `b`
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            a,
            b,
            direction: b - a,
        }
    }

    /// Perpendicular bisector of the segment `p -> q`
    ///
    /// Starts at the midpoint `M` and ends at `M + rotate90(q - p)`. For
    /// coincident points the result has zero direction and never intersects
    /// anything.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_cells::geometry::Line2D;
    /// use glam::Vec2;
    ///
    /// let bisector = Line2D::perpendicular_bisector(Vec2::new(5.0, 5.0), Vec2::new(7.0, 7.0));
    /// assert_eq!(bisector.a, Vec2::new(6.0, 6.0));
    /// assert_eq!(bisector.b, Vec2::new(4.0, 8.0));
    /// ```
    pub fn perpendicular_bisector(p: Vec2, q: Vec2) -> Self {
        Line2D::new(p, q).midpoint_perpendicular()
    }

    /// Perpendicular to this line through its midpoint, same length
    pub fn midpoint_perpendicular(&self) -> Self {
        let midpoint = self.midpoint();
        Line2D::new(midpoint, midpoint + rotate90(self.direction))
    }

    /// Midpoint between `a` and `b`
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    /// Length of the segment
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction.length()
    }

    /// Intersection of two bounded segments
    ///
    /// Returns `None` when the lines are parallel or the crossing lies outside
    /// either segment. Endpoints count as part of the segment.
    pub fn intersect(&self, other: &Line2D) -> Option<Vec2> {
        self.solve(other, false)
    }

    /// Intersection of this bounded segment with the infinite line through `other`
    ///
    /// Only the parameter on `self` is range-checked.
    pub fn intersect_unbounded(&self, other: &Line2D) -> Option<Vec2> {
        self.solve(other, true)
    }

    fn solve(&self, other: &Line2D, unbounded_other: bool) -> Option<Vec2> {
        let denominator = self.direction.perp_dot(other.direction);
        if denominator.abs() < EPSILON {
            return None;
        }

        let offset = other.a - self.a;
        // t runs along self, u along other
        let t = offset.perp_dot(other.direction) / denominator;
        let u = offset.perp_dot(self.direction) / denominator;

        let on_self = (0.0..=1.0).contains(&t);
        let on_other = unbounded_other || (0.0..=1.0).contains(&u);
        if on_self && on_other {
            Some(self.a + self.direction * t)
        } else {
            None
        }
    }
}
