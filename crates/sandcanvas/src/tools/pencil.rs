//! Pencil tool - solid wall strokes with gap-free interpolation

use glam::{IVec2, Vec2};
use sandcanvas_core::world::Grid;
use sandcanvas_simulation::{Cell, Rgb};

use super::{stamp_disk, to_grid};

/// Draws filled wall disks along the pointer path.
pub struct PencilTool {
    /// Color of the drawn walls
    pub color: Rgb,
}

impl PencilTool {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// Stamp a wall disk at the cursor cell. With `last` set from the
    /// same stroke, disks are stamped along the whole segment from the
    /// previous sample - the pointer can move many cells per frame and
    /// the stroke must not tear.
    ///
    /// Returns the cell to record as the stroke's new last sample.
    pub fn apply(
        &self,
        grid: &mut Grid,
        cursor: Vec2,
        cursor_size: f32,
        cell_pitch: u32,
        last: Option<IVec2>,
    ) -> IVec2 {
        let pitch = cell_pitch.max(1);
        let radius = (cursor_size / pitch as f32).floor() as i32;
        let center = to_grid(cursor, cell_pitch);
        let cell = Cell::wall(self.color);

        match last {
            Some(prev) => {
                let delta = (center - prev).as_vec2();
                // at least one step even for a stationary pointer
                let steps = delta.length().ceil().max(1.0) as i32;
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    let point = prev.as_vec2() + delta * t;
                    stamp_disk(grid, point.round().as_ivec2(), radius, cell);
                }
            }
            None => stamp_disk(grid, center, radius, cell),
        }

        center
    }
}
