//! Mix tool - stirs grains along the pointer's motion

use glam::{IVec2, Vec2};
use sandcanvas_core::world::{Grid, SimStats};
use sandcanvas_simulation::Cell;

use super::to_grid;

/// Pushes grains in the direction the pointer is dragged.
pub struct MixTool;

impl MixTool {
    /// Displace every grain in the brush disk along the frame-to-frame
    /// pointer `delta`.
    ///
    /// The delta is normalized and rounded to an 8-direction unit step;
    /// each grain is pushed up to a force count scaling with the drag
    /// speed, stopping at the first occupied or out-of-bounds cell.
    /// This bypasses the automaton's rules on purpose - gravity
    /// reclaims the stirred grains on the next tick. Walls are never
    /// displaced.
    pub fn apply(
        grid: &mut Grid,
        cursor: Vec2,
        delta: Vec2,
        cursor_size: f32,
        cell_pitch: u32,
        stats: &mut dyn SimStats,
    ) {
        let len = delta.length();
        if len < 0.5 {
            return;
        }
        let dir = (delta / len).round().as_ivec2();
        if dir == IVec2::ZERO {
            return;
        }

        let pitch = cell_pitch.max(1);
        let radius = (cursor_size / pitch as f32).floor() as i32;
        let center = to_grid(cursor, cell_pitch);
        let force_steps = ((len / pitch as f32).round() as i32 * 2).max(2);

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let mut pos = center + IVec2::new(dx, dy);
                let Some(cell @ Cell::Sand { .. }) = grid.get_at(pos) else {
                    continue;
                };

                for _ in 0..force_steps {
                    let next = pos + dir;
                    if !grid.is_empty_at(next) {
                        break;
                    }
                    grid.set_at(next, cell);
                    grid.set_at(pos, Cell::Empty);
                    stats.record_cell_moved();
                    pos = next;
                }
            }
        }
    }
}
