//! # Sand Canvas
//!
//! An interactive falling-sand art toy: pour colored grains, draw
//! walls, stamp shapes and stir the pile with a small set of brushes.
//! This crate is the interaction layer the rendering/UI shell drives;
//! the grid and automaton live in `sandcanvas-core`.

pub mod app;
pub mod config;
pub mod input;
pub mod tools;

pub use app::{App, TickReport};

/// Common imports for internal use
pub mod prelude {
    pub use glam::{IVec2, Vec2};
    pub use sandcanvas_core::simulation::{ColorMode, ColorPicker};
    pub use sandcanvas_core::world::{
        FlowMonitor, GrainRng, Grid, NoopStats, SandUpdater, SimConfig, SimStats,
    };
    pub use sandcanvas_simulation::{Cell, Hsl, Palette, Rgb};
}
