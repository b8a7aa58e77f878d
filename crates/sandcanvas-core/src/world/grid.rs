//! The occupancy grid backing the canvas

use glam::IVec2;
use sandcanvas_simulation::Cell;
use serde::{Deserialize, Serialize};

/// Fixed-size 2D grid of cells, stored as a flat row-major array.
///
/// Coordinates grow right and down; `(0, 0)` is the top-left cell.
/// `get` returns `None` out of bounds and `set` silently ignores
/// out-of-range targets: pointer input routinely lands on
/// boundary-adjacent coordinates and the brushes clip against the
/// edges rather than report errors. Hot-path callers still check
/// `in_bounds` inline before touching runs of cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-empty grid; dimensions are clamped to at least 1x1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
        }
    }

    /// Derive dimensions from a viewport and cell pitch (both pixels).
    /// A zero pitch is substituted with 1.
    pub fn from_viewport(px_width: u32, px_height: u32, cell_pitch: u32) -> Self {
        let pitch = cell_pitch.max(1);
        let grid = Self::new(
            (px_width / pitch) as i32,
            (px_height / pitch) as i32,
        );
        log::debug!(
            "grid {}x{} from viewport {}x{} at pitch {}",
            grid.width,
            grid.height,
            px_width,
            px_height,
            pitch
        );
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_at(&self, pos: IVec2) -> Option<Cell> {
        self.get(pos.x, pos.y)
    }

    /// True when `pos` is in bounds and currently unoccupied.
    pub fn is_empty_at(&self, pos: IVec2) -> bool {
        matches!(self.get_at(pos), Some(Cell::Empty))
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    pub fn set_at(&mut self, pos: IVec2, cell: Cell) {
        self.set(pos.x, pos.y, cell);
    }

    /// Discard all contents, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Iterate every slot with its coordinates, for the render snapshot.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i as i32 % width, i as i32 / width, *cell))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of mobile grains (excludes walls).
    pub fn sand_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_sand()).count()
    }
}
