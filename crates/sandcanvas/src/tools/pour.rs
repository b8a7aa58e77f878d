//! Pour tool - stochastic grain scatter inside the cursor disk

use glam::Vec2;
use sandcanvas_core::simulation::ColorPicker;
use sandcanvas_core::world::{GrainRng, Grid, SimStats};
use sandcanvas_simulation::Cell;

use super::to_grid;

/// Pours grains around the cursor while the pointer is held.
pub struct PourTool {
    /// Grains attempted per tick
    pub spawn_rate: u32,
}

impl PourTool {
    pub fn new(spawn_rate: u32) -> Self {
        Self { spawn_rate }
    }

    /// Scatter up to `spawn_rate` grains inside the cursor disk.
    ///
    /// The sample radius is uniform in [0, cursor_size], which biases
    /// grain density toward the center of the brush - the pour reads as
    /// a narrow stream that widens as it piles. Occupied targets are
    /// left alone.
    #[allow(clippy::too_many_arguments)]
    pub fn apply<R: GrainRng>(
        &self,
        grid: &mut Grid,
        picker: &mut ColorPicker,
        cursor: Vec2,
        cursor_size: f32,
        cell_pitch: u32,
        now_ms: f64,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        for _ in 0..self.spawn_rate {
            let angle = rng.gen_f32() * std::f32::consts::TAU;
            let radius = rng.gen_f32() * cursor_size;
            let offset = Vec2::new(angle.cos(), angle.sin()) * radius;
            let pos = to_grid(cursor + offset, cell_pitch);

            if grid.is_empty_at(pos) {
                let color = picker.next_color(rng, now_ms);
                grid.set_at(pos, Cell::sand(color));
                stats.record_cell_spawned();
            }
        }
    }
}
