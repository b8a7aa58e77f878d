//! Simulation-facing data and policies

mod color_policy;

// Re-export the data crate so downstream code has one import path
pub use sandcanvas_simulation::{Cell, ColorParseError, Hsl, Palette, Rgb};

pub use color_policy::{ColorMode, ColorPicker};
