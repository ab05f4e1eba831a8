//! Generator placement and input mapping
//!
//! Helpers for the layer that owns generators: seeding a deterministic set of
//! positions inside the working range, and converting pointer positions from
//! window pixels into the same coordinate space.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate uniformly distributed generator positions in `[-h, h]²`
///
/// The same seed always produces the same positions. The sign of
/// `half_extent` is ignored.
///
/// # Panics
///
/// Panics if `half_extent` is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_cells::scatter::scatter_generators;
///
/// let positions = scatter_generators(5, 42, 1.0);
/// assert_eq!(positions.len(), 5);
/// assert_eq!(positions, scatter_generators(5, 42, 1.0));
/// ```
pub fn scatter_generators(count: usize, seed: u32, half_extent: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }

    let h = half_extent.abs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    (0..count)
        .map(|_| Vec2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// Convert a window pixel position to normalized device coordinates
///
/// Pixel `(0, 0)` is the top-left corner and maps to `(-1, 1)`; the bottom
/// right corner `screen_size` maps to `(1, -1)`.
pub fn screen_to_normalized(pixel: Vec2, screen_size: Vec2) -> Vec2 {
    Vec2::new(
        pixel.x / screen_size.x * 2.0 - 1.0,
        1.0 - pixel.y / screen_size.y * 2.0,
    )
}
