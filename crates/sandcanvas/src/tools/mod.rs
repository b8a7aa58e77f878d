//! Brush tools that turn pointer strokes into grid mutations

mod eraser;
mod mix;
mod pencil;
mod pour;
mod shape;

pub use eraser::EraseTool;
pub use mix::MixTool;
pub use pencil::PencilTool;
pub use pour::PourTool;
pub use shape::{ShapeKind, ShapeTool};

use glam::{IVec2, Vec2};
use sandcanvas_core::world::Grid;
use sandcanvas_simulation::Cell;

/// Selectable tools, in toolbar order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolKind {
    #[default]
    Sand,
    HollowSquare,
    HollowCircle,
    Pencil,
    Eraser,
    Mix,
}

/// Convert a screen-space position to the grid cell underneath it.
pub(crate) fn to_grid(pos: Vec2, cell_pitch: u32) -> IVec2 {
    let pitch = cell_pitch.max(1) as f32;
    IVec2::new((pos.x / pitch).floor() as i32, (pos.y / pitch).floor() as i32)
}

/// Stamp a filled circle of `cell` around `center`, radius in grid units.
pub(crate) fn stamp_disk(grid: &mut Grid, center: IVec2, radius: i32, cell: Cell) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                grid.set_at(center + IVec2::new(dx, dy), cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandcanvas_simulation::Rgb;

    #[test]
    fn test_to_grid_floors_toward_origin() {
        assert_eq!(to_grid(Vec2::new(0.0, 0.0), 7), IVec2::new(0, 0));
        assert_eq!(to_grid(Vec2::new(6.9, 6.9), 7), IVec2::new(0, 0));
        assert_eq!(to_grid(Vec2::new(7.0, 13.9), 7), IVec2::new(1, 1));
        // zero pitch falls back to 1
        assert_eq!(to_grid(Vec2::new(3.0, 5.0), 0), IVec2::new(3, 5));
    }

    #[test]
    fn test_stamp_disk_is_circular_and_clipped() {
        let mut grid = Grid::new(10, 10);
        let wall = Cell::wall(Rgb::new(68, 68, 68));
        stamp_disk(&mut grid, IVec2::new(0, 5), 2, wall);

        // center and axis cells present, clipped half absent
        assert_eq!(grid.get(0, 5), Some(wall));
        assert_eq!(grid.get(2, 5), Some(wall));
        assert_eq!(grid.get(0, 3), Some(wall));
        // corner outside the circle
        assert_eq!(grid.get(2, 3), Some(Cell::Empty));
    }
}
