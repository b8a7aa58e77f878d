//! Eraser tool - clears everything inside the cursor circle

use glam::{IVec2, Vec2};
use sandcanvas_core::world::{Grid, SimStats};
use sandcanvas_simulation::Cell;

use super::to_grid;

/// Eraser that clears grains and walls alike.
pub struct EraseTool;

impl EraseTool {
    /// Clear every cell whose screen-space center lies within `radius`
    /// pixels of the cursor.
    ///
    /// Distance is measured in screen space against the true Euclidean
    /// distance, so the cleared area tracks the visible cursor circle
    /// exactly regardless of cell pitch.
    pub fn apply(grid: &mut Grid, cursor: Vec2, radius: f32, cell_pitch: u32, stats: &mut dyn SimStats) {
        let pitch = cell_pitch.max(1) as f32;
        let center = to_grid(cursor, cell_pitch);
        let grid_radius = (radius / pitch).ceil() as i32;
        let radius_sq = radius * radius;

        for dy in -grid_radius..=grid_radius {
            for dx in -grid_radius..=grid_radius {
                let pos = center + IVec2::new(dx, dy);
                if !grid.in_bounds(pos.x, pos.y) {
                    continue;
                }
                let cell_center = (pos.as_vec2() + 0.5) * pitch;
                if cursor.distance_squared(cell_center) <= radius_sq {
                    if !grid.is_empty_at(pos) {
                        stats.record_cell_erased();
                    }
                    grid.set_at(pos, Cell::Empty);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandcanvas_core::world::{CountingStats, NoopStats};
    use sandcanvas_simulation::Rgb;

    fn filled_grid(width: i32, height: i32) -> Grid {
        let mut grid = Grid::new(width, height);
        let sand = Cell::sand(Rgb::new(226, 194, 117));
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, sand);
            }
        }
        grid
    }

    #[test]
    fn test_erases_exactly_within_screen_radius() {
        let pitch = 7u32;
        let mut grid = filled_grid(20, 20);
        let cursor = Vec2::new(70.0, 70.0);
        let radius = 21.0;

        EraseTool::apply(&mut grid, cursor, radius, pitch, &mut NoopStats);

        for (x, y, cell) in grid.cells() {
            let center = (IVec2::new(x, y).as_vec2() + 0.5) * pitch as f32;
            let inside = cursor.distance_squared(center) <= radius * radius;
            assert_eq!(
                cell.is_empty(),
                inside,
                "cell ({x}, {y}) inside={inside} but cell={cell:?}"
            );
        }
    }

    #[test]
    fn test_erases_walls_too() {
        let mut grid = Grid::new(10, 10);
        grid.set(5, 5, Cell::wall(Rgb::new(68, 68, 68)));
        let cursor = (Vec2::new(5.0, 5.0) + 0.5) * 7.0;

        EraseTool::apply(&mut grid, cursor, 10.0, 7, &mut NoopStats);

        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_counts_only_occupied_cells() {
        let mut grid = Grid::new(10, 10);
        grid.set(5, 5, Cell::sand(Rgb::new(226, 194, 117)));
        let mut stats = CountingStats::default();
        let cursor = (Vec2::new(5.0, 5.0) + 0.5) * 7.0;

        EraseTool::apply(&mut grid, cursor, 15.0, 7, &mut stats);

        assert_eq!(stats.cells_erased, 1);
    }

    #[test]
    fn test_clips_at_grid_edges() {
        let mut grid = filled_grid(10, 10);
        // cursor well outside the canvas, circle clipping the corner
        EraseTool::apply(&mut grid, Vec2::new(-5.0, -5.0), 20.0, 7, &mut NoopStats);

        assert!(grid.occupied_count() < 100);
        assert_eq!(grid.get(0, 0), Some(Cell::Empty));
        assert_eq!(grid.get(9, 9), Some(Cell::sand(Rgb::new(226, 194, 117))));
    }
}
