//! Neighbor discovery for the per-frame cell computation
//!
//! Both searches report neighbors in ascending generator index, so the
//! order-dependent clipping produces identical cells whichever one is used.

use glam::Vec2;

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Finds the generators close enough to clip a given generator's cell
pub trait NeighborSearch {
    /// Indices of all generators strictly closer than `cutoff` to
    /// `positions[index]`, excluding `index` itself, in ascending order
    ///
    /// An `index` outside `positions` has no neighbors.
    fn neighbors_within(&self, positions: &[Vec2], index: usize, cutoff: f32) -> Vec<usize>;
}

/// Brute-force O(n) scan per generator
///
/// Adequate for the few hundred generators a frame typically holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl NeighborSearch for LinearScan {
    fn neighbors_within(&self, positions: &[Vec2], index: usize, cutoff: f32) -> Vec<usize> {
        let Some(&center) = positions.get(index) else {
            return Vec::new();
        };
        positions
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != index && p.distance(center) < cutoff)
            .map(|(i, _)| i)
            .collect()
    }
}

/// KD-tree over one frame's generator positions
///
/// Candidates come from a radius query on the tree and are then filtered
/// with the same strict distance test as [`LinearScan`].
///
/// # Performance
///
/// - Construction: O(n log n), once per frame
/// - Query: O(log n + k) for k candidates
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build the index from a position snapshot
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_cells::*;
    /// use glam::Vec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.0), Vec2::new(0.9, 0.9)];
    /// let index = SpatialIndex::new(&positions);
    /// assert_eq!(index.neighbors_within(&positions, 0, 0.3), vec![1]);
    /// # }
    /// ```
    pub fn new(positions: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }
}

#[cfg(feature = "spatial-index")]
impl NeighborSearch for SpatialIndex {
    fn neighbors_within(&self, positions: &[Vec2], index: usize, cutoff: f32) -> Vec<usize> {
        let Some(&center) = positions.get(index) else {
            return Vec::new();
        };
        let query = [center.x, center.y];

        let mut found: Vec<usize> = self
            .tree
            .within_unsorted::<SquaredEuclidean>(&query, cutoff * cutoff)
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .filter(|&i| {
                i != index && positions.get(i).is_some_and(|p| p.distance(center) < cutoff)
            })
            .collect();

        found.sort_unstable();
        found.dedup();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.2, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-0.1, 0.25),
            Vec2::new(0.35, 0.0),
        ]
    }

    #[test]
    fn test_linear_scan_excludes_self_and_far_points() {
        let positions = positions();
        assert_eq!(LinearScan.neighbors_within(&positions, 0, 0.3), vec![1, 3]);
        assert!(LinearScan.neighbors_within(&positions, 2, 0.3).is_empty());
    }

    #[test]
    fn test_linear_scan_cutoff_is_strict() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0)];
        assert!(LinearScan.neighbors_within(&positions, 0, 0.5).is_empty());
        assert_eq!(LinearScan.neighbors_within(&positions, 0, 0.51), vec![1]);
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_spatial_index_matches_linear_scan() {
        let positions = positions();
        let index = SpatialIndex::new(&positions);

        for i in 0..positions.len() {
            assert_eq!(
                index.neighbors_within(&positions, i, 0.3),
                LinearScan.neighbors_within(&positions, i, 0.3),
                "neighbors of generator {}",
                i
            );
        }
    }

    #[test]
    fn test_out_of_range_index_has_no_neighbors() {
        let positions = positions();
        assert!(LinearScan.neighbors_within(&positions, 5, 1.0).is_empty());
        assert!(LinearScan.neighbors_within(&[], 0, 1.0).is_empty());

        #[cfg(feature = "spatial-index")]
        {
            let index = SpatialIndex::new(&positions);
            assert!(index.neighbors_within(&positions, 99, 1.0).is_empty());
        }
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_spatial_index_handles_duplicates() {
        let positions = vec![Vec2::new(0.5, 0.5); 4];
        let index = SpatialIndex::new(&positions);
        assert_eq!(index.neighbors_within(&positions, 2, 0.1), vec![0, 1, 3]);
    }
}
