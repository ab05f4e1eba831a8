//! Bounded Voronoi-style cells for moving 2D generators
//!
//! Every frame, each generator gets a convex polygon clipped by the
//! perpendicular bisectors to its nearby generators and capped to a maximum
//! radius. The computation is stateless apart from the generator positions:
//! cells are rebuilt from a fixed bounding octagon each time.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_voronoi_cells::*;
//!
//! let config = CellConfigBuilder::new()
//!     .neighbor_cutoff(0.3).unwrap()
//!     .cell_limit(0.3).unwrap()
//!     .build().unwrap();
//!
//! let positions = scatter::scatter_generators(100, 42, 1.0);
//! let frame = FrameContext::new(positions, config);
//! let cells = frame.compute_cells();
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&cells, &PaletteColorMapper);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables KD-tree neighbor discovery
//! - `serde`: Enables serialization support for configuration and cells

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod clip;
pub mod cell;
pub mod spatial;
pub mod diagram;
pub mod mesh;
pub mod scatter;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use config::{CellConfig, CellConfigBuilder};
pub use geometry::{Line2D, Polygon};
pub use clip::{bisect, cap_radius, Bisection};
pub use cell::Cell;
pub use diagram::{update_generators, FrameContext, Generator};
pub use spatial::{LinearScan, NeighborSearch};
pub use mesh::{MeshData, generate_mesh, fixed_vertex_slots, ColorMapper, PaletteColorMapper, UniformColorMapper, CellColor};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
