//! Canvas session state and the per-frame tick
//!
//! [`App`] is the facade the rendering/UI shell drives: it owns the
//! grid, the active tool and stroke, the spawn-color picker and the
//! simulation config. The shell forwards pointer events and calls
//! [`App::tick`] once per animation frame, then reads the grid back
//! for drawing.

use glam::Vec2;
use web_time::Instant;

use sandcanvas_core::simulation::{ColorMode, ColorPicker};
use sandcanvas_core::world::{CountingStats, FlowMonitor, GrainRng, Grid, SandUpdater};
use sandcanvas_simulation::Rgb;

use crate::config::CanvasConfig;
use crate::input::Stroke;
use crate::tools::{EraseTool, MixTool, PencilTool, PourTool, ShapeKind, ShapeTool, ToolKind};

/// What a tick did, for the shell's feedback gating.
#[derive(Clone, Copy, Debug)]
pub struct TickReport {
    /// Any grain moved this tick
    pub moved: bool,
    /// Movement seen within the recent window (audio gate)
    pub flowing: bool,
}

/// One interactive canvas session.
pub struct App {
    grid: Grid,
    config: CanvasConfig,
    tool: ToolKind,
    stroke: Stroke,
    cursor: Vec2,
    picker: ColorPicker,
    pour: PourTool,
    pencil: PencilTool,
    flow: FlowMonitor,
    stats: CountingStats,
    epoch: Instant,
}

impl App {
    pub fn new(config: CanvasConfig) -> Self {
        let grid = Grid::from_viewport(
            config.viewport_width,
            config.viewport_height,
            config.cell_pitch,
        );
        log::info!(
            "canvas session: {}x{} cells at pitch {}",
            grid.width(),
            grid.height(),
            config.cell_pitch
        );

        Self {
            grid,
            picker: ColorPicker::new(ColorMode::Fixed(config.sand_color)),
            pour: PourTool::new(config.spawn_rate),
            pencil: PencilTool::new(config.pen_color),
            config,
            tool: ToolKind::default(),
            stroke: Stroke::default(),
            cursor: Vec2::ZERO,
            flow: FlowMonitor::default(),
            stats: CountingStats::default(),
            epoch: Instant::now(),
        }
    }

    // --- tool and parameter inputs ---

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools; any in-flight stroke is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.tool {
            self.tool = tool;
            self.stroke.cancel();
        }
    }

    pub fn cursor_size(&self) -> f32 {
        self.config.cursor_size
    }

    pub fn set_cursor_size(&mut self, size: f32) {
        self.config.cursor_size = size.clamp(5.0, 50.0);
    }

    pub fn set_spawn_rate(&mut self, rate: u32) {
        self.config.spawn_rate = rate;
        self.pour.spawn_rate = rate;
    }

    /// Picking a sand color always returns to fixed mode.
    pub fn set_sand_color(&mut self, color: Rgb) {
        self.config.sand_color = color;
        self.picker.set_mode(ColorMode::Fixed(color));
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.picker.set_mode(mode);
    }

    pub fn set_wall_color(&mut self, color: Rgb) {
        self.config.wall_color = color;
    }

    pub fn set_pen_color(&mut self, color: Rgb) {
        self.config.pen_color = color;
        self.pencil.color = color;
    }

    pub fn gravity(&self) -> u32 {
        self.config.sim.gravity
    }

    pub fn set_gravity(&mut self, gravity: u32) {
        self.config.sim.gravity = gravity;
    }

    pub fn wind_enabled(&self) -> bool {
        self.config.sim.wind_enabled
    }

    /// Toggle wind; each enable picks a fresh random direction.
    pub fn toggle_wind<R: GrainRng>(&mut self, rng: &mut R) {
        self.config.sim.wind_enabled = !self.config.sim.wind_enabled;
        if self.config.sim.wind_enabled {
            self.config.sim.randomize_wind_dir(rng);
        }
    }

    // --- pointer events ---

    pub fn pointer_pressed(&mut self, pos: Vec2) {
        self.cursor = pos;
        self.stroke = Stroke::begin(self.tool, pos);

        let (cursor_size, pitch) = (self.config.cursor_size, self.config.cell_pitch);
        match self.stroke {
            Stroke::SolidDrawing { .. } => {
                let last = self.pencil.apply(&mut self.grid, pos, cursor_size, pitch, None);
                self.stroke = Stroke::SolidDrawing { last: Some(last) };
            }
            Stroke::Erasing => {
                EraseTool::apply(&mut self.grid, pos, cursor_size, pitch, &mut self.stats);
            }
            // pouring spawns in tick(); mix needs a delta first
            _ => {}
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        let (cursor_size, pitch) = (self.config.cursor_size, self.config.cell_pitch);
        match &mut self.stroke {
            Stroke::DrawingShape { cursor, .. } => {
                *cursor = pos;
            }
            Stroke::SolidDrawing { last } => {
                let next = self.pencil.apply(&mut self.grid, pos, cursor_size, pitch, *last);
                *last = Some(next);
            }
            Stroke::Erasing => {
                EraseTool::apply(&mut self.grid, pos, cursor_size, pitch, &mut self.stats);
            }
            Stroke::Mixing { last } => {
                let delta = pos - *last;
                MixTool::apply(&mut self.grid, pos, delta, cursor_size, pitch, &mut self.stats);
                *last = pos;
            }
            Stroke::Idle | Stroke::Pouring => {}
        }
        self.cursor = pos;
    }

    /// Release commits shape drags; everything else just ends.
    pub fn pointer_released(&mut self) {
        if let Stroke::DrawingShape { anchor, cursor } = self.stroke {
            let kind = match self.tool {
                ToolKind::HollowSquare => Some(ShapeKind::Rectangle),
                ToolKind::HollowCircle => Some(ShapeKind::Ellipse),
                _ => None,
            };
            if let Some(kind) = kind {
                ShapeTool::commit(
                    &mut self.grid,
                    kind,
                    anchor,
                    cursor,
                    self.config.cell_pitch,
                    self.config.wall_color,
                );
            }
        }
        self.stroke.cancel();
    }

    /// Leaving the canvas abandons the stroke; shape drags are NOT
    /// committed.
    pub fn pointer_left(&mut self) {
        self.stroke.cancel();
    }

    // --- per-frame tick ---

    /// Run the active brush, then the automaton for the configured
    /// sub-steps. The grid is only ever written from here and from the
    /// pointer handlers above, never concurrently.
    pub fn tick<R: GrainRng>(&mut self, rng: &mut R) -> TickReport {
        if self.stroke.is_pouring() {
            let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
            self.pour.apply(
                &mut self.grid,
                &mut self.picker,
                self.cursor,
                self.config.cursor_size,
                self.config.cell_pitch,
                now_ms,
                &mut self.stats,
                rng,
            );
        }

        let moved = SandUpdater::step(&mut self.grid, &self.config.sim, &mut self.stats, rng);
        self.flow.record(moved);

        TickReport {
            moved,
            flowing: self.flow.is_flowing(),
        }
    }

    // --- resets ---

    /// Viewport changed: derive new dimensions and start from scratch.
    /// All contents and any in-flight stroke are discarded.
    pub fn resize(&mut self, px_width: u32, px_height: u32) {
        self.config.viewport_width = px_width;
        self.config.viewport_height = px_height;
        self.rebuild_grid();
    }

    /// Changing the cell pitch re-derives the grid, erasing the canvas.
    pub fn set_cell_pitch(&mut self, pitch: u32) {
        self.config.cell_pitch = pitch.max(1);
        self.rebuild_grid();
    }

    /// Clear the canvas, keeping dimensions and settings.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.stroke.cancel();
        self.flow.reset();
    }

    fn rebuild_grid(&mut self) {
        self.grid = Grid::from_viewport(
            self.config.viewport_width,
            self.config.viewport_height,
            self.config.cell_pitch,
        );
        self.stroke.cancel();
        self.flow.reset();
    }

    // --- outputs for the shell ---

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Number of mobile grains on the canvas.
    pub fn particle_count(&self) -> usize {
        self.grid.sand_count()
    }

    pub fn is_flowing(&self) -> bool {
        self.flow.is_flowing()
    }

    pub fn stats(&self) -> CountingStats {
        self.stats
    }
}
