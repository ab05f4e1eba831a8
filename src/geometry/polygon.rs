//! Implicitly closed polygons and the half-plane membership test

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Line2D, EPSILON};

/// An ordered, implicitly closed sequence of vertices
///
/// Edge `i` connects vertex `i` to vertex `(i + 1) % n`. There is no
/// duplicate closing vertex. Convexity is expected but never enforced; use
/// [`Polygon::is_convex`] to check.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// The starting shape of every cell: a square spanning `[-h, h]²`
    ///
    /// Kept as 8 points (4 corners plus 4 edge midpoints) even though the
    /// midpoints are geometrically redundant.
    pub fn bounding_octagon(half_extent: f32) -> Self {
        let h = half_extent;
        Self::new(vec![
            Vec2::new(h, -h),
            Vec2::new(h, 0.0),
            Vec2::new(h, h),
            Vec2::new(0.0, h),
            Vec2::new(-h, h),
            Vec2::new(-h, 0.0),
            Vec2::new(-h, -h),
            Vec2::new(0.0, -h),
        ])
    }

    /// Vertices in boundary order
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Consume the polygon, returning its vertices
    #[inline]
    pub fn into_vertices(self) -> Vec<Vec2> {
        self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge `i`, from vertex `i` to vertex `(i + 1) % n`
    #[inline]
    pub fn edge(&self, i: usize) -> Line2D {
        let n = self.vertices.len();
        Line2D::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Iterate over all edges, including the closing one
    pub fn edges(&self) -> impl Iterator<Item = Line2D> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Even-odd point-in-polygon test
    ///
    /// Casts an unbounded ray from `point` along the diagonal `(1, 1)` and
    /// counts the edges it crosses. An edge counts when its endpoints lie on
    /// strictly different sides of the ray's line, with a vertex exactly on
    /// the line treated as lying below it. A ray passing through a shared
    /// vertex therefore counts once, and a ray that only touches a vertex
    /// from outside counts zero or two times.
    ///
    /// Points exactly on an edge are not handled specially: the result
    /// depends on how the ray meets the rest of the boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_cells::geometry::Polygon;
    /// use glam::Vec2;
    ///
    /// let square = Polygon::new(vec![
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(2.0, 0.0),
    ///     Vec2::new(2.0, 2.0),
    ///     Vec2::new(0.0, 2.0),
    /// ]);
    /// assert!(square.contains(Vec2::new(1.0, 1.0)));
    /// assert!(!square.contains(Vec2::new(3.0, 3.0)));
    /// ```
    pub fn contains(&self, point: Vec2) -> bool {
        if self.vertices.len() < 2 {
            return false;
        }

        let direction = Vec2::ONE;
        let side = |v: Vec2| direction.perp_dot(v - point);

        let mut crossings = 0;
        for edge in self.edges() {
            let (side_a, side_b) = (side(edge.a), side(edge.b));
            if (side_a > 0.0) == (side_b > 0.0) {
                continue;
            }

            // Where the edge meets the ray's line, measured along the ray
            let hit = edge.a + (edge.b - edge.a) * (side_a / (side_a - side_b));
            if (hit - point).dot(direction) >= 0.0 {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    /// Unsigned area (shoelace formula)
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f32 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        self.edges().map(|e| e.a.perp_dot(e.b)).sum::<f32>() * 0.5
    }

    /// Area centroid, or `None` for a polygon with (near) zero area
    pub fn centroid(&self) -> Option<Vec2> {
        let area = self.signed_area();
        if area.abs() < 1e-9 {
            return None;
        }

        let weighted = self
            .edges()
            .map(|e| (e.a + e.b) * e.a.perp_dot(e.b))
            .fold(Vec2::ZERO, |acc, v| acc + v);

        Some(weighted / (6.0 * area))
    }

    /// Largest distance from `origin` to any vertex
    pub fn max_distance_from(&self, origin: Vec2) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.distance(origin))
            .fold(0.0, f32::max)
    }

    /// True if every turn along the boundary has the same orientation
    ///
    /// Vertices closer than [`EPSILON`] to their predecessor are merged and
    /// near-straight continuations are ignored, so the redundant midpoints
    /// of the bounding octagon and rounding noise at clip points do not
    /// break convexity. Polygons with fewer than 3 distinct vertices are
    /// not convex.
    pub fn is_convex(&self) -> bool {
        let mut points: Vec<Vec2> = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            if points.last().map_or(true, |last| last.distance(v) >= EPSILON) {
                points.push(v);
            }
        }
        while points.len() > 1 && points[0].distance(points[points.len() - 1]) < EPSILON {
            points.pop();
        }

        let n = points.len();
        if n < 3 {
            return false;
        }

        let mut sign = 0.0_f32;
        for i in 0..n {
            let incoming = points[(i + 1) % n] - points[i];
            let outgoing = points[(i + 2) % n] - points[(i + 1) % n];
            let turn = incoming.perp_dot(outgoing);
            if turn.abs() <= 1e-5 * incoming.length() * outgoing.length() {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }

        sign != 0.0
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Polygon::new(vertices)
    }
}
