//! Cellular automata update logic - grain movement physics

use glam::IVec2;

use crate::world::{GrainRng, Grid, SimConfig, SimStats, WIND_DRIFT_CHANCE};
use sandcanvas_simulation::Cell;

/// Cellular automata updater - handles grain movement physics
pub struct SandUpdater;

impl SandUpdater {
    /// Run `config.gravity` sub-steps over the grid.
    /// Returns whether any grain moved during this invocation.
    pub fn step<R: GrainRng>(
        grid: &mut Grid,
        config: &SimConfig,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        let mut moved_any = false;
        for _ in 0..config.gravity {
            moved_any |= Self::substep(grid, config, stats, rng);
        }
        moved_any
    }

    /// One full scan of the grid.
    ///
    /// Rows are visited bottom-up (the bottom row is never a source, it
    /// has nothing below it) so a grain cannot be moved twice in one
    /// sub-step by dropping into a slot vacated above it. Columns go
    /// left to right.
    fn substep<R: GrainRng>(
        grid: &mut Grid,
        config: &SimConfig,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        let (width, height) = grid.dimensions();
        let mut moved_any = false;

        for y in (0..height - 1).rev() {
            for x in 0..width {
                let pos = IVec2::new(x, y);
                if !matches!(grid.get_at(pos), Some(Cell::Sand { .. })) {
                    continue;
                }

                // Wind drift: occasional lateral step before gravity
                if config.wind_enabled
                    && config.wind_dir != 0
                    && rng.check_probability(WIND_DRIFT_CHANCE)
                    && Self::try_move(grid, pos, pos + IVec2::new(config.wind_dir, 0), stats)
                {
                    moved_any = true;
                    continue;
                }

                // Fall straight down
                let below = pos + IVec2::Y;
                if Self::try_move(grid, pos, below, stats) {
                    moved_any = true;
                    continue;
                }

                // Grains slide over other grains, never off walls
                if !matches!(grid.get_at(below), Some(Cell::Sand { .. })) {
                    continue;
                }

                // Diagonal slide
                let down_left = IVec2::new(x - 1, y + 1);
                let down_right = IVec2::new(x + 1, y + 1);
                if let Some(to) = Self::pick_free(grid, down_left, down_right, rng) {
                    if Self::try_move(grid, pos, to, stats) {
                        moved_any = true;
                    }
                    continue;
                }

                // Blocked down and diagonally: if resting against a
                // sloped wall, slide sideways along the surface
                let on_slope = matches!(grid.get_at(down_left), Some(Cell::Wall { .. }))
                    || matches!(grid.get_at(down_right), Some(Cell::Wall { .. }));
                if !on_slope {
                    continue;
                }

                let left = IVec2::new(x - 1, y);
                let right = IVec2::new(x + 1, y);
                if let Some(to) = Self::pick_free(grid, left, right, rng)
                    && Self::try_move(grid, pos, to, stats)
                {
                    moved_any = true;
                }
            }
        }

        moved_any
    }

    /// Choose between two candidate targets: both free picks uniformly
    /// at random, one free takes it, neither yields `None`.
    fn pick_free<R: GrainRng>(
        grid: &Grid,
        left: IVec2,
        right: IVec2,
        rng: &mut R,
    ) -> Option<IVec2> {
        match (grid.is_empty_at(left), grid.is_empty_at(right)) {
            (true, true) => Some(if rng.gen_bool() { left } else { right }),
            (true, false) => Some(left),
            (false, true) => Some(right),
            (false, false) => None,
        }
    }

    /// Move the cell at `from` into `to` if `to` is in-bounds and empty.
    /// Returns true if the move succeeded.
    fn try_move(grid: &mut Grid, from: IVec2, to: IVec2, stats: &mut dyn SimStats) -> bool {
        if !grid.is_empty_at(to) {
            return false;
        }
        let Some(cell) = grid.get_at(from) else {
            return false;
        };

        grid.set_at(to, cell);
        grid.set_at(from, Cell::Empty);
        stats.record_cell_moved();
        true
    }
}
