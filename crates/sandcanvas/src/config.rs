//! Configuration for Sand Canvas

use sandcanvas_core::world::SimConfig;
use sandcanvas_simulation::Rgb;
use serde::{Deserialize, Serialize};

/// Main configuration for the canvas session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Screen pixels per grid cell
    pub cell_pitch: u32,
    /// Brush radius in screen pixels (5-50)
    pub cursor_size: f32,
    /// Grains attempted per pour tick
    pub spawn_rate: u32,
    /// Base color for poured grains
    pub sand_color: Rgb,
    /// Color for shape-stamped walls
    pub wall_color: Rgb,
    /// Color for pencil-drawn walls
    pub pen_color: Rgb,
    /// Stepper settings (gravity sub-steps, wind)
    pub sim: SimConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            cell_pitch: 7,
            cursor_size: 32.0,
            spawn_rate: 5,
            sand_color: Rgb::new(0xe2, 0xc2, 0x75),
            wall_color: Rgb::new(0x44, 0x44, 0x44),
            pen_color: Rgb::new(0x44, 0x44, 0x44),
            sim: SimConfig::default(),
        }
    }
}

impl CanvasConfig {
    /// Load config with defaults
    pub fn load() -> Self {
        Self::default()
    }
}
