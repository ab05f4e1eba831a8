//! Half-plane clipping of a cell against one neighbor
//!
//! [`bisect`] cuts the working polygon along the perpendicular bisector of a
//! generator and one neighbor, [`cap_radius`] pulls far vertices back onto
//! the limit circle, and [`merge_projected`] folds a discarded group back onto
//! the kept polygon.

use glam::Vec2;

use crate::geometry::{self, Line2D, Polygon};

/// The two sides of a polygon cut by a bisector
#[derive(Debug, Clone, PartialEq)]
pub struct Bisection {
    /// The side containing the generator
    pub keep: Polygon,
    /// The other side; empty when the bisector missed the polygon
    pub discard: Polygon,
}

impl Bisection {
    /// True if the bisector actually cut the polygon
    #[inline]
    pub fn is_cut(&self) -> bool {
        !self.discard.is_empty()
    }
}

/// Split `polygon` along the perpendicular bisector of `generator` and `neighbor`
///
/// Edges are walked in their existing order, appending each vertex to the
/// active group. When an edge crosses the bisector, the crossing point closes
/// the active group, the other group becomes active and is opened with the
/// same point, so both groups are closed polygons sharing the cut edge.
/// A crossing equal to the previous one (the bisector passing through a
/// vertex) is skipped along with the edge's start vertex. The first edge is
/// compared against the last, so a cut through vertex 0 is handled the same
/// way as any other vertex.
///
/// The first group is assumed to hold the generator; if the half-plane test
/// finds the generator in the second group instead, the groups are swapped.
///
/// If the bisector does not cross the polygon, or only touches it at a
/// single vertex, `keep` is the input unchanged and `discard` is empty.
///
/// # Example
///
/// ```
/// use rust_voronoi_cells::clip::bisect;
/// use rust_voronoi_cells::geometry::Polygon;
/// use glam::Vec2;
///
/// let rect = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(5.0, 0.0),
///     Vec2::new(5.0, 4.0),
///     Vec2::new(0.0, 4.0),
/// ]);
/// let cut = bisect(Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0), &rect);
/// assert_eq!(cut.keep.len(), 4);
/// assert!(cut.keep.contains(Vec2::new(1.0, 2.0)));
/// ```
pub fn bisect(generator: Vec2, neighbor: Vec2, polygon: &Polygon) -> Bisection {
    let bisector = Line2D::perpendicular_bisector(generator, neighbor);

    let mut groups: [Vec<Vec2>; 2] = [Vec::new(), Vec::new()];
    let mut active = 0;
    let mut previous = polygon
        .edges()
        .last()
        .and_then(|edge| edge.intersect_unbounded(&bisector));
    let mut cuts = 0;

    for (i, edge) in polygon.edges().enumerate() {
        let crossing = edge.intersect_unbounded(&bisector);
        if crossing.is_some() && crossing == previous {
            continue;
        }
        previous = crossing;

        groups[active].push(polygon.vertices()[i]);
        if let Some(point) = crossing {
            groups[active].push(point);
            active = 1 - active;
            groups[active].push(point);
            cuts += 1;
        }
    }

    if cuts < 2 {
        return Bisection {
            keep: polygon.clone(),
            discard: Polygon::default(),
        };
    }

    let [first, second] = groups;
    let (first, second) = (Polygon::new(first), Polygon::new(second));

    if second.contains(generator) {
        Bisection {
            keep: second,
            discard: first,
        }
    } else {
        Bisection {
            keep: first,
            discard: second,
        }
    }
}

/// Pull every vertex farther than `limit` from `generator` back onto the limit circle
///
/// Vertices strictly closer than `limit` are kept. The others move along the
/// generator-to-vertex ray to distance `limit`. A vertex coincident with the
/// generator has no direction and is kept where it is.
///
/// Applying the cap twice gives the same result as applying it once.
pub fn cap_radius(generator: Vec2, vertices: &[Vec2], limit: f32) -> Vec<Vec2> {
    vertices
        .iter()
        .map(|&vertex| {
            if geometry::distance(vertex, generator) < limit {
                return vertex;
            }
            match geometry::normalize(vertex - generator) {
                Some(direction) => generator + direction * limit,
                None => vertex,
            }
        })
        .collect()
}

/// Project the interior vertices of a discarded group onto the kept polygon
///
/// Each vertex of `projected` except the first and last (which already lie on
/// the shared cut edge) is joined to `generator` by a segment. The first edge
/// of the merged polygon that segment crosses receives the crossing point as a
/// new vertex right after the edge's start. Vertices are processed in order,
/// each against the polygon grown by the previous ones.
///
/// This helper is not part of the per-frame cell computation.
///
/// # Panics
///
/// Panics if a projected vertex's segment crosses no edge. For a discarded
/// group produced by [`bisect`] around a kept polygon containing `generator`
/// this cannot happen, so a panic means the inputs broke that invariant.
pub fn merge_projected(generator: Vec2, kept: &Polygon, projected: &[Vec2]) -> Polygon {
    let interior = match projected.len() {
        0..=2 => &[][..],
        n => &projected[1..n - 1],
    };

    let mut merged = kept.clone();
    for &vertex in interior {
        let toward_vertex = Line2D::new(generator, vertex);
        let (edge_index, crossing) = merged
            .edges()
            .enumerate()
            .find_map(|(i, edge)| edge.intersect(&toward_vertex).map(|p| (i, p)))
            .unwrap_or_else(|| {
                panic!(
                    "no edge of the kept polygon separates {} from projected vertex {}",
                    generator, vertex
                )
            });

        let vertices = merged.vertices();
        let rebuilt: Vec<Vec2> = vertices[..=edge_index]
            .iter()
            .copied()
            .chain(std::iter::once(crossing))
            .chain(vertices[edge_index + 1..].iter().copied())
            .collect();
        merged = Polygon::new(rebuilt);
    }

    merged
}
