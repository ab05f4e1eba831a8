//! Color mapping for cells

use crate::cell::Cell;

/// RGBA color type
pub type CellColor = [f32; 4];

/// Trait for choosing the fill color of a cell
pub trait ColorMapper {
    /// Map a cell to an RGBA color
    fn map_color(&self, cell: &Cell) -> CellColor;
}

/// Cycles through a fixed palette by generator index
///
/// Neighboring generators usually have different indices, so adjacent cells
/// tend to get different colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColorMapper;

const PALETTE: [CellColor; 6] = [
    [0.90, 0.35, 0.30, 1.0], // Red
    [0.95, 0.70, 0.25, 1.0], // Amber
    [0.40, 0.75, 0.35, 1.0], // Green
    [0.25, 0.60, 0.85, 1.0], // Blue
    [0.55, 0.40, 0.80, 1.0], // Violet
    [0.30, 0.80, 0.75, 1.0], // Teal
];

impl ColorMapper for PaletteColorMapper {
    fn map_color(&self, cell: &Cell) -> CellColor {
        PALETTE[cell.id % PALETTE.len()]
    }
}

/// Paints every cell the same color
#[derive(Debug, Clone, Copy)]
pub struct UniformColorMapper(pub CellColor);

impl Default for UniformColorMapper {
    fn default() -> Self {
        Self([1.0, 1.0, 1.0, 1.0])
    }
}

impl ColorMapper for UniformColorMapper {
    fn map_color(&self, _cell: &Cell) -> CellColor {
        self.0
    }
}
