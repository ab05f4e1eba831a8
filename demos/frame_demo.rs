//! Demonstration of per-frame cell computation
//!
//! Run with `RUST_LOG=debug` to see per-frame timing.

use rust_voronoi_cells::*;

struct Sprite {
    position: Vec2,
    velocity: Vec2,
    outline: Vec<Vec2>,
}

impl Generator for Sprite {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_vertices(&mut self, vertices: &[Vec2]) {
        self.outline = vertices.to_vec();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = CellConfigBuilder::new()
        .neighbor_cutoff(0.3)?
        .cell_limit(0.3)?
        .build()?;

    let positions = scatter::scatter_generators(200, 42, 1.0);
    let velocities = scatter::scatter_generators(200, 43, 0.005);
    let mut sprites: Vec<Sprite> = positions
        .into_iter()
        .zip(velocities)
        .map(|(position, velocity)| Sprite {
            position,
            velocity,
            outline: Vec::new(),
        })
        .collect();

    println!("Simulating {} generators...", sprites.len());

    for frame in 0..10 {
        for sprite in sprites.iter_mut() {
            sprite.position += sprite.velocity;
            // Bounce off the screen edges
            if sprite.position.x.abs() > 1.0 {
                sprite.velocity.x = -sprite.velocity.x;
            }
            if sprite.position.y.abs() > 1.0 {
                sprite.velocity.y = -sprite.velocity.y;
            }
        }

        let cells = update_generators(&mut sprites, &config);
        let mesh = generate_mesh(&cells, &PaletteColorMapper);

        let max_vertices = sprites.iter().map(|s| s.outline.len()).max().unwrap_or(0);
        let total_area: f32 = cells.iter().map(Cell::area).sum();
        println!(
            "Frame {:2}: {} triangles, max {} vertices per cell, covered area {:.3}",
            frame,
            mesh.triangle_count(),
            max_vertices,
            total_area
        );
    }

    // A pointer in the middle of an 800x600 window
    let pointer = scatter::screen_to_normalized(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    let frame = FrameContext::from_generators(&sprites, config);
    let hit = frame
        .compute_cells()
        .into_iter()
        .find(|cell| cell.contains(pointer));
    match hit {
        Some(cell) => println!("\nPointer {} is in cell {}", pointer, cell.id),
        None => println!("\nPointer {} is not covered by any cell", pointer),
    }

    Ok(())
}
