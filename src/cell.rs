//! Cell Structure
//!
//! The polygon computed for one generator in one frame.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Polygon;

/// The bounded region assigned to one generator for one frame
///
/// Cells are recomputed from scratch every frame; nothing about a cell's
/// topology carries over to the next one.
///
/// # Memory Usage
///
/// A cell usually ends up with 6-12 vertices: the 8 octagon points minus the
/// discarded ones, plus one new vertex per effective clip. At 8 bytes per
/// `Vec2` that is ~100 bytes of vertex data per cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Index of the generator in the frame snapshot
    pub id: usize,

    /// Generator position the cell was computed around
    pub generator: Vec2,

    /// Cell boundary, in the order produced by clipping
    ///
    /// No winding normalization is applied; the bounding octagon is
    /// counter-clockwise and clipping preserves that order.
    pub polygon: Polygon,
}

impl Cell {
    /// Create a new cell
    pub fn new(id: usize, generator: Vec2, polygon: Polygon) -> Self {
        Self {
            id,
            generator,
            polygon,
        }
    }

    /// Boundary vertices, ready to be uploaded as-is
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        self.polygon.vertices()
    }

    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }

    /// Check if the cell is renderable as a filled polygon
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }

    /// Area of the cell
    pub fn area(&self) -> f32 {
        self.polygon.area()
    }

    /// Largest generator-to-vertex distance
    ///
    /// Never exceeds the configured cell limit (up to float rounding).
    pub fn radius(&self) -> f32 {
        self.polygon.max_distance_from(self.generator)
    }

    /// Check if a point lies inside the cell
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.polygon.contains(point)
    }
}
