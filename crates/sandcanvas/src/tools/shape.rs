//! Shape stamps - hollow rectangle and ellipse outlines

use glam::Vec2;
use sandcanvas_core::world::Grid;
use sandcanvas_simulation::{Cell, Rgb};

/// Outline shape committed on release of a shape drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Rasterizes dragged outlines into wall cells.
pub struct ShapeTool;

impl ShapeTool {
    /// Commit the released drag into the grid. Corners arrive in screen
    /// space in any order; the live preview is drawn by the shell and
    /// never touches the grid - only this commit does.
    pub fn commit(
        grid: &mut Grid,
        kind: ShapeKind,
        corner0: Vec2,
        corner1: Vec2,
        cell_pitch: u32,
        color: Rgb,
    ) {
        let pitch = cell_pitch.max(1) as f32;
        let x0 = (corner0.x.min(corner1.x) / pitch).floor() as i32;
        let y0 = (corner0.y.min(corner1.y) / pitch).floor() as i32;
        let x1 = (corner0.x.max(corner1.x) / pitch).floor() as i32;
        let y1 = (corner0.y.max(corner1.y) / pitch).floor() as i32;
        let cell = Cell::wall(color);

        match kind {
            ShapeKind::Rectangle => {
                for y in y0..=y1 {
                    for x in x0..=x1 {
                        if y == y0 || y == y1 || x == x0 || x == x1 {
                            grid.set(x, y, cell);
                        }
                    }
                }
            }
            ShapeKind::Ellipse => {
                let cx = (x0 + x1) as f32 / 2.0;
                let cy = (y0 + y1) as f32 / 2.0;
                // degenerate radii fall back to 1 so the ring math
                // never divides by zero
                let rx = match (x1 - x0) as f32 / 2.0 {
                    r if r == 0.0 => 1.0,
                    r => r,
                };
                let ry = match (y1 - y0) as f32 / 2.0 {
                    r if r == 0.0 => 1.0,
                    r => r,
                };

                for y in y0..=y1 {
                    for x in x0..=x1 {
                        let nx = (x as f32 - cx) / rx;
                        let ny = (y as f32 - cy) / ry;
                        let dist = nx * nx + ny * ny;
                        // thin ring: only the outer band of the oval
                        if (0.92..=1.0).contains(&dist) {
                            grid.set(x, y, cell);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Cell {
        Cell::wall(Rgb::new(68, 68, 68))
    }

    #[test]
    fn test_rectangle_is_hollow() {
        let mut grid = Grid::new(30, 30);
        ShapeTool::commit(
            &mut grid,
            ShapeKind::Rectangle,
            Vec2::new(5.0, 5.0),
            Vec2::new(20.0, 15.0),
            1,
            Rgb::new(68, 68, 68),
        );

        // border cells set
        assert_eq!(grid.get(5, 5), Some(wall()));
        assert_eq!(grid.get(20, 5), Some(wall()));
        assert_eq!(grid.get(5, 15), Some(wall()));
        assert_eq!(grid.get(12, 15), Some(wall()));
        // interior stays empty
        assert_eq!(grid.get(12, 10), Some(Cell::Empty));
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let mut a = Grid::new(30, 30);
        let mut b = Grid::new(30, 30);
        let color = Rgb::new(68, 68, 68);
        let c0 = Vec2::new(20.0, 15.0);
        let c1 = Vec2::new(5.0, 5.0);

        ShapeTool::commit(&mut a, ShapeKind::Rectangle, c0, c1, 1, color);
        ShapeTool::commit(&mut b, ShapeKind::Rectangle, c1, c0, 1, color);

        assert_eq!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
    }

    #[test]
    fn test_ellipse_is_a_thin_ring() {
        let mut grid = Grid::new(50, 50);
        ShapeTool::commit(
            &mut grid,
            ShapeKind::Ellipse,
            Vec2::new(5.0, 5.0),
            Vec2::new(45.0, 35.0),
            1,
            Rgb::new(68, 68, 68),
        );

        // extreme points of the oval are on the ring
        assert_eq!(grid.get(5, 20), Some(wall()));
        assert_eq!(grid.get(45, 20), Some(wall()));
        assert_eq!(grid.get(25, 5), Some(wall()));
        assert_eq!(grid.get(25, 35), Some(wall()));
        // center and interior stay empty
        assert_eq!(grid.get(25, 20), Some(Cell::Empty));
        assert_eq!(grid.get(20, 18), Some(Cell::Empty));
        // ring is thin: nothing outside the bounding box edges either
        assert_eq!(grid.get(4, 20), Some(Cell::Empty));
    }

    #[test]
    fn test_degenerate_drag_does_not_panic() {
        let mut grid = Grid::new(20, 20);
        // zero-size drag: radii fall back to 1
        ShapeTool::commit(
            &mut grid,
            ShapeKind::Ellipse,
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 10.0),
            1,
            Rgb::new(68, 68, 68),
        );
        // a flat horizontal drag as well
        ShapeTool::commit(
            &mut grid,
            ShapeKind::Ellipse,
            Vec2::new(2.0, 15.0),
            Vec2::new(18.0, 15.0),
            1,
            Rgb::new(68, 68, 68),
        );
    }

    #[test]
    fn test_offscreen_corners_are_clipped() {
        let mut grid = Grid::new(10, 10);
        ShapeTool::commit(
            &mut grid,
            ShapeKind::Rectangle,
            Vec2::new(-20.0, -20.0),
            Vec2::new(5.0, 5.0),
            1,
            Rgb::new(68, 68, 68),
        );

        // visible part of the border landed, nothing panicked
        assert_eq!(grid.get(5, 0), Some(wall()));
        assert_eq!(grid.get(0, 5), Some(wall()));
        assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    }
}
