//! Render-ready output for computed cells
//!
//! Generates engine-agnostic vertex data from a frame's cells: either a
//! triangle-fan mesh for all cells, or a fixed number of vertex slots per
//! cell for renderers that allocate their vertex buffers once.

mod colors;

pub use colors::{CellColor, ColorMapper, PaletteColorMapper, UniformColorMapper};

use glam::Vec2;

use crate::cell::Cell;

/// Engine-agnostic mesh data output
///
/// Each cell becomes a triangle fan around its generator:
/// - OpenGL / wgpu: upload `positions` and `colors` as vertex buffers and
///   `indices` as the index buffer
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (2D coordinates)
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<CellColor>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a triangle-fan mesh for a set of cells
///
/// Cells with fewer than 3 vertices are skipped.
pub fn generate_mesh<C: ColorMapper>(cells: &[Cell], color_mapper: &C) -> MeshData {
    let mut mesh = MeshData::default();

    for cell in cells {
        if cell.is_degenerate() {
            continue;
        }
        let color = color_mapper.map_color(cell);
        triangulate_cell(cell.generator, cell.vertices(), color, &mut mesh);
    }

    mesh
}

/// Triangulate a single cell as a triangle fan
fn triangulate_cell(center: Vec2, vertices: &[Vec2], color: CellColor, mesh: &mut MeshData) {
    let base_idx = mesh.positions.len() as u32;

    mesh.positions.push(center.to_array());
    mesh.colors.push(color);

    for vertex in vertices {
        mesh.positions.push(vertex.to_array());
        mesh.colors.push(color);
    }

    let num_vertices = vertices.len();
    for i in 0..num_vertices {
        let next_i = (i + 1) % num_vertices;
        mesh.indices.push(base_idx);
        mesh.indices.push(base_idx + 1 + i as u32);
        mesh.indices.push(base_idx + 1 + next_i as u32);
    }
}

/// Fit a cell outline into exactly `slots` vertices
///
/// Extra vertices are dropped; missing ones repeat the first vertex, which
/// collapses the unused fan triangles to zero area. An empty outline fills
/// every slot with `fallback`.
pub fn fixed_vertex_slots(vertices: &[Vec2], slots: usize, fallback: Vec2) -> Vec<Vec2> {
    let pad = vertices.first().copied().unwrap_or(fallback);
    vertices
        .iter()
        .copied()
        .chain(std::iter::repeat(pad))
        .take(slots)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CellConfig;
    use crate::diagram::FrameContext;
    use crate::geometry::Polygon;

    fn frame_cells() -> Vec<Cell> {
        let positions = crate::scatter::scatter_generators(40, 42, 1.0);
        FrameContext::new(positions, CellConfig::default()).compute_cells()
    }

    #[test]
    fn test_generate_mesh() {
        let cells = frame_cells();
        let mesh = generate_mesh(&cells, &PaletteColorMapper);

        let drawn = cells.iter().filter(|c| !c.is_degenerate());
        let expected_vertices: usize = drawn.clone().map(|c| c.vertex_count() + 1).sum();
        let expected_triangles: usize = drawn.map(|c| c.vertex_count()).sum();

        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), expected_vertices);
        assert_eq!(mesh.triangle_count(), expected_triangles);
        assert_eq!(mesh.positions.len(), mesh.colors.len());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_mesh_skips_degenerate_cells() {
        let cells = vec![
            Cell::new(0, Vec2::ZERO, Polygon::new(vec![Vec2::ZERO, Vec2::X])),
            Cell::new(
                1,
                Vec2::new(0.25, 0.25),
                Polygon::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y]),
            ),
        ];
        let mesh = generate_mesh(&cells, &UniformColorMapper::default());

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 1]);
        assert_eq!(mesh.positions[0], [0.25, 0.25]);
    }

    #[test]
    fn test_fixed_vertex_slots_pads_with_first_vertex() {
        let outline = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)];
        let slots = fixed_vertex_slots(&outline, 5, Vec2::ZERO);
        assert_eq!(
            slots,
            vec![outline[0], outline[1], outline[2], outline[0], outline[0]]
        );
    }

    #[test]
    fn test_fixed_vertex_slots_truncates() {
        let outline = Polygon::bounding_octagon(1.0).into_vertices();
        assert_eq!(fixed_vertex_slots(&outline, 4, Vec2::ZERO), outline[..4].to_vec());
    }

    #[test]
    fn test_fixed_vertex_slots_empty_outline() {
        let center = Vec2::new(0.3, 0.3);
        assert_eq!(fixed_vertex_slots(&[], 3, center), vec![center; 3]);
    }
}
