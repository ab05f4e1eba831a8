//! Per-frame cell computation
//!
//! A [`FrameContext`] holds one frame's generator snapshot together with the
//! configuration, so every cell of the frame is computed against the same
//! positions.

use std::time::Instant;

use glam::Vec2;
use log::{debug, trace, warn};

use crate::cell::Cell;
use crate::clip::{bisect, cap_radius};
use crate::config::CellConfig;
use crate::error::{Result, VoronoiError};
use crate::geometry::Polygon;
use crate::spatial::{LinearScan, NeighborSearch};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// An entity owned by the rendering layer that carries a cell
///
/// The engine only ever reads a generator's position and writes back its
/// new vertex list.
pub trait Generator {
    /// Current position in the working coordinate space
    fn position(&self) -> Vec2;

    /// Replace the generator's cell outline
    fn set_vertices(&mut self, vertices: &[Vec2]);
}

/// Neighbor search backing a frame
enum Neighbors {
    Linear(LinearScan),
    #[cfg(feature = "spatial-index")]
    Indexed(SpatialIndex),
}

impl Neighbors {
    fn find(&self, positions: &[Vec2], index: usize, cutoff: f32) -> Vec<usize> {
        match self {
            Neighbors::Linear(search) => search.neighbors_within(positions, index, cutoff),
            #[cfg(feature = "spatial-index")]
            Neighbors::Indexed(search) => search.neighbors_within(positions, index, cutoff),
        }
    }
}

/// One frame's worth of generator positions and configuration
///
/// # Examples
///
/// ```
/// use rust_voronoi_cells::*;
/// use glam::Vec2;
///
/// let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.2, 0.0)];
/// let frame = FrameContext::new(positions, CellConfig::default());
///
/// let cells = frame.compute_cells();
/// assert_eq!(cells.len(), 2);
/// assert!(cells[0].radius() <= 0.3 + 1e-5);
/// ```
pub struct FrameContext {
    positions: Vec<Vec2>,
    config: CellConfig,
    neighbors: Neighbors,
}

impl FrameContext {
    /// Snapshot positions for a frame
    ///
    /// With the `spatial-index` feature a KD-tree is built over the snapshot;
    /// otherwise neighbors are found by linear scan.
    pub fn new(positions: Vec<Vec2>, config: CellConfig) -> Self {
        #[cfg(feature = "spatial-index")]
        let neighbors = if positions.is_empty() {
            Neighbors::Linear(LinearScan)
        } else {
            Neighbors::Indexed(SpatialIndex::new(&positions))
        };
        #[cfg(not(feature = "spatial-index"))]
        let neighbors = Neighbors::Linear(LinearScan);

        Self {
            positions,
            config,
            neighbors,
        }
    }

    /// Snapshot positions for a frame, always using the linear neighbor scan
    pub fn with_linear_scan(positions: Vec<Vec2>, config: CellConfig) -> Self {
        Self {
            positions,
            config,
            neighbors: Neighbors::Linear(LinearScan),
        }
    }

    /// Snapshot the current positions of a set of generators
    pub fn from_generators<G: Generator>(generators: &[G], config: CellConfig) -> Self {
        Self::new(generators.iter().map(Generator::position).collect(), config)
    }

    /// Configuration used for this frame
    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    /// Position snapshot
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Number of generators in the snapshot
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the snapshot holds no generators
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Indices of the generators that may clip `index`'s cell, ascending
    ///
    /// # Errors
    ///
    /// Returns `GeneratorNotFound` if `index` is out of range
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        if index >= self.positions.len() {
            return Err(VoronoiError::GeneratorNotFound(index));
        }
        Ok(self
            .neighbors
            .find(&self.positions, index, self.config.neighbor_cutoff))
    }

    /// Compute the cell of one generator
    ///
    /// Starts from the bounding octagon and clips it against each neighbor's
    /// bisector in ascending index order. A clip that misses leaves the
    /// working polygon untouched; a clip that cuts replaces it with the
    /// capped kept side. The result is capped once more so a generator with
    /// no effective neighbor still ends within the cell limit.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorNotFound` if `index` is out of range
    pub fn compute_cell(&self, index: usize) -> Result<Cell> {
        let neighbors = self.neighbors(index)?;
        let (cell, _) = self.clip_cell(index, &neighbors);
        Ok(cell)
    }

    /// Compute the cells of all generators in snapshot order
    pub fn compute_cells(&self) -> Vec<Cell> {
        let start = Instant::now();
        let mut total_clips = 0;

        let cells: Vec<Cell> = (0..self.positions.len())
            .map(|index| {
                let neighbors =
                    self.neighbors
                        .find(&self.positions, index, self.config.neighbor_cutoff);
                let (cell, clips) = self.clip_cell(index, &neighbors);
                total_clips += clips;
                cell
            })
            .collect();

        debug!(
            "[Cells] {} generators, {} clips in {:.2?}",
            cells.len(),
            total_clips,
            start.elapsed()
        );

        cells
    }

    fn clip_cell(&self, index: usize, neighbors: &[usize]) -> (Cell, usize) {
        let generator = self.positions[index];
        let limit = self.config.cell_limit;

        let mut working = Polygon::bounding_octagon(self.config.bounds_half_extent);
        let mut clips = 0;

        for &other in neighbors {
            let cut = bisect(generator, self.positions[other], &working);
            if !cut.is_cut() {
                continue;
            }
            working = Polygon::new(cap_radius(generator, cut.keep.vertices(), limit));
            clips += 1;
        }

        let polygon = Polygon::new(cap_radius(generator, working.vertices(), limit));

        trace!(
            "[Cells] generator {}: {} neighbors, {} clips, {} vertices",
            index,
            neighbors.len(),
            clips,
            polygon.len()
        );
        if polygon.len() < 3 {
            warn!(
                "[Cells] generator {} at {} ended with {} vertices",
                index,
                generator,
                polygon.len()
            );
        }

        (Cell::new(index, generator, polygon), clips)
    }
}

/// Recompute every generator's cell and write it back
///
/// Positions are snapshotted before any cell is computed, and vertex lists
/// are written only after all cells are done, so a frame never mixes old and
/// new positions.
pub fn update_generators<G: Generator>(generators: &mut [G], config: &CellConfig) -> Vec<Cell> {
    let frame = FrameContext::from_generators(generators, *config);
    let cells = frame.compute_cells();

    for (generator, cell) in generators.iter_mut().zip(&cells) {
        generator.set_vertices(cell.vertices());
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn three_generators() -> Vec<Vec2> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(0.2, 0.0), Vec2::new(10.0, 10.0)]
    }

    #[derive(Debug, Default)]
    struct Sprite {
        position: Vec2,
        outline: Vec<Vec2>,
        writes: usize,
    }

    impl Generator for Sprite {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn set_vertices(&mut self, vertices: &[Vec2]) {
            self.outline = vertices.to_vec();
            self.writes += 1;
        }
    }

    #[test]
    fn test_isolated_generator_gets_capped_octagon() {
        let frame = FrameContext::new(three_generators(), CellConfig::default());
        let cell = frame.compute_cell(2).unwrap();

        let expected = cap_radius(
            Vec2::new(10.0, 10.0),
            Polygon::bounding_octagon(1.0).vertices(),
            0.3,
        );
        assert_eq!(cell.vertices(), expected.as_slice());
        assert_eq!(cell.vertex_count(), 8);
        for vertex in cell.vertices() {
            assert!((vertex.distance(Vec2::new(10.0, 10.0)) - 0.3).abs() < EPS);
        }
    }

    #[test]
    fn test_pair_is_split_by_bisector() {
        let frame = FrameContext::new(three_generators(), CellConfig::default());
        let left = frame.compute_cell(0).unwrap();
        let right = frame.compute_cell(1).unwrap();

        for vertex in left.vertices() {
            assert!(vertex.x <= 0.1 + EPS, "left vertex {} crosses x = 0.1", vertex);
            assert!(vertex.distance(Vec2::ZERO) <= 0.3 + EPS);
        }
        for vertex in right.vertices() {
            assert!(vertex.x >= 0.1 - EPS, "right vertex {} crosses x = 0.1", vertex);
            assert!(vertex.distance(Vec2::new(0.2, 0.0)) <= 0.3 + EPS);
        }

        assert!(left.contains(Vec2::ZERO));
        assert!(right.contains(Vec2::new(0.2, 0.0)));
        assert!(left.polygon.is_convex());
        assert!(right.polygon.is_convex());
    }

    #[test]
    fn test_cut_side_is_a_vertical_edge() {
        let frame = FrameContext::new(three_generators(), CellConfig::default());
        let left = frame.compute_cell(0).unwrap();

        let n = left.vertex_count();
        let has_vertical_edge = (0..n).any(|i| {
            let a = left.vertices()[i];
            let b = left.vertices()[(i + 1) % n];
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() > 0.1
        });
        assert!(has_vertical_edge);
    }

    #[test]
    fn test_no_op_neighbor_leaves_cell_unchanged() {
        // The neighbor is within the cutoff but its bisector (x = 0.125) lies
        // outside the tiny bounds, so it never cuts.
        let config = CellConfig {
            neighbor_cutoff: 0.3,
            cell_limit: 0.3,
            bounds_half_extent: 0.1,
        };
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.25, 0.0)];
        let with_neighbor = FrameContext::new(positions, config).compute_cell(0).unwrap();
        let alone = FrameContext::new(vec![Vec2::ZERO], config).compute_cell(0).unwrap();

        assert_eq!(with_neighbor.polygon, alone.polygon);
        assert_eq!(with_neighbor.vertex_count(), 8);
    }

    #[test]
    fn test_coincident_generators_do_not_clip() {
        let positions = vec![Vec2::new(0.1, 0.1), Vec2::new(0.1, 0.1)];
        let frame = FrameContext::new(positions, CellConfig::default());
        let cell = frame.compute_cell(0).unwrap();
        assert_eq!(cell.vertex_count(), 8);
        assert!(cell.radius() <= 0.3 + EPS);
    }

    #[test]
    fn test_vertically_stacked_pair_keeps_lower_half() {
        let config = crate::config::CellConfigBuilder::new()
            .neighbor_cutoff(1.5)
            .unwrap()
            .cell_limit(2.0)
            .unwrap()
            .build()
            .unwrap();
        let positions = vec![Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)];
        let frame = FrameContext::new(positions, config);

        let lower = frame.compute_cell(0).unwrap();
        assert!(lower.contains(Vec2::new(0.5, 0.0)));
        assert!(lower.vertices().iter().all(|v| v.y <= 0.5 + EPS));

        // The upper generator sits on the octagon's top edge
        let upper = frame.compute_cell(1).unwrap();
        assert!(upper.vertices().iter().all(|v| v.y >= 0.5 - EPS));
    }

    #[test]
    fn test_out_of_range_generator() {
        let frame = FrameContext::new(three_generators(), CellConfig::default());
        assert_eq!(
            frame.compute_cell(3).unwrap_err(),
            VoronoiError::GeneratorNotFound(3)
        );
        assert!(frame.neighbors(7).is_err());
    }

    #[test]
    fn test_empty_frame() {
        let frame = FrameContext::new(Vec::new(), CellConfig::default());
        assert!(frame.is_empty());
        assert!(frame.compute_cells().is_empty());
    }

    #[test]
    fn test_linear_and_indexed_frames_agree() {
        let positions = crate::scatter::scatter_generators(60, 7, 1.0);
        let indexed = FrameContext::new(positions.clone(), CellConfig::default());
        let linear = FrameContext::with_linear_scan(positions, CellConfig::default());

        assert_eq!(indexed.compute_cells(), linear.compute_cells());
    }

    #[test]
    fn test_update_generators_writes_every_cell() {
        let mut sprites: Vec<Sprite> = three_generators()
            .into_iter()
            .map(|position| Sprite {
                position,
                ..Default::default()
            })
            .collect();

        let cells = update_generators(&mut sprites, &CellConfig::default());

        assert_eq!(cells.len(), 3);
        for (sprite, cell) in sprites.iter().zip(&cells) {
            assert_eq!(sprite.writes, 1);
            assert_eq!(sprite.outline.as_slice(), cell.vertices());
            assert_eq!(sprite.position, cell.generator);
        }
    }
}
