//! Spawn-color policy
//!
//! Every poured grain gets its color from the active mode: a fixed base
//! color with grain jitter, a wall-clock hue cycle, or a smooth walk
//! through a palette. All jitter happens in HSL space.

use serde::{Deserialize, Serialize};

use crate::world::GrainRng;
use sandcanvas_simulation::{Hsl, Palette, Rgb};

/// How fast the palette walk advances: grains per color pair.
const PALETTE_CYCLE_DIVISOR: f32 = 200.0;

/// How spawn colors are chosen. Modes are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Base color with per-grain hue/lightness jitter
    Fixed(Rgb),
    /// Hue cycles with wall-clock time
    Cycle,
    /// Smooth interpolated walk through an ordered color list
    Palette(Palette),
}

/// Stateful color source for the pour brush.
///
/// Owns the monotonic palette index; one grain spawned advances the
/// walk by one.
#[derive(Clone, Debug)]
pub struct ColorPicker {
    mode: ColorMode,
    palette_index: f32,
}

impl ColorPicker {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            palette_index: 0.0,
        }
    }

    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }

    /// Switch modes; the palette walk restarts from the beginning.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.palette_index = 0.0;
    }

    /// Color for the next spawned grain. `now_ms` is the host clock in
    /// milliseconds, only read by the cycle mode.
    pub fn next_color<R: GrainRng>(&mut self, rng: &mut R, now_ms: f64) -> Rgb {
        match &self.mode {
            ColorMode::Fixed(base) => {
                let mut hsl = base.to_hsl();
                hsl.h = (hsl.h + jitter(rng, 8.0)).rem_euclid(360.0);
                hsl.l = (hsl.l + jitter(rng, 4.0)).clamp(30.0, 90.0);
                hsl.to_rgb()
            }
            ColorMode::Cycle => {
                let base_hue = ((now_ms / 10.0) % 360.0) as f32;
                Hsl {
                    h: (base_hue + jitter(rng, 8.0)).rem_euclid(360.0),
                    s: 100.0,
                    l: 50.0 + jitter(rng, 4.0),
                }
                .to_rgb()
            }
            ColorMode::Palette(palette) => {
                let len = palette.len() as f32;
                let position =
                    (self.palette_index % (len * PALETTE_CYCLE_DIVISOR)) / PALETTE_CYCLE_DIVISOR;
                let index = position.floor();
                let current = palette.get(index as usize).to_hsl();
                let next = palette.get(index as usize + 1).to_hsl();

                // Slight factor jitter blends the grain boundary between
                // neighboring colors
                let factor = ((position - index) + jitter(rng, 0.05)).clamp(0.0, 1.0);
                let mut out = current.lerp(next, factor);
                out.s = (out.s + jitter(rng, 2.5)).clamp(0.0, 100.0);
                out.l = (out.l + jitter(rng, 1.5)).clamp(0.0, 100.0);

                self.palette_index += 1.0;
                out.to_rgb()
            }
        }
    }
}

/// Uniform jitter in [-amplitude, amplitude).
fn jitter<R: GrainRng>(rng: &mut R, amplitude: f32) -> f32 {
    (rng.gen_f32() - 0.5) * 2.0 * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    /// Fixed-value RNG so jitter becomes exactly zero (gen_f32 = 0.5).
    struct ZeroJitter;

    impl GrainRng for ZeroJitter {
        fn gen_bool(&mut self) -> bool {
            false
        }

        fn gen_f32(&mut self) -> f32 {
            0.5
        }
    }

    #[test]
    fn test_fixed_mode_without_jitter_keeps_base() {
        let base = Rgb::new(226, 194, 117);
        let mut picker = ColorPicker::new(ColorMode::Fixed(base));
        let out = picker.next_color(&mut ZeroJitter, 0.0);
        assert!((out.r as i32 - base.r as i32).abs() <= 1);
        assert!((out.g as i32 - base.g as i32).abs() <= 1);
        assert!((out.b as i32 - base.b as i32).abs() <= 1);
    }

    #[test]
    fn test_fixed_mode_jitter_stays_near_base() {
        let base = Rgb::new(226, 194, 117);
        let base_hsl = base.to_hsl();
        let mut picker = ColorPicker::new(ColorMode::Fixed(base));
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);

        for _ in 0..200 {
            let hsl = picker.next_color(&mut rng, 0.0).to_hsl();
            let hue_gap = (hsl.h - base_hsl.h + 540.0).rem_euclid(360.0) - 180.0;
            assert!(hue_gap.abs() <= 9.0, "hue drifted: {hue_gap}");
            assert!((30.0..=90.0).contains(&hsl.l));
        }
    }

    #[test]
    fn test_cycle_mode_tracks_clock() {
        let mut picker = ColorPicker::new(ColorMode::Cycle);

        // t = 0 ms: hue 0 (red); t = 1200 ms: hue 120 (green)
        let red = picker.next_color(&mut ZeroJitter, 0.0).to_hsl();
        assert!(red.h < 1.0 || red.h > 359.0);

        let green = picker.next_color(&mut ZeroJitter, 1200.0).to_hsl();
        assert!((green.h - 120.0).abs() < 1.0);
    }

    #[test]
    fn test_palette_mode_advances_per_grain() {
        let mut picker = ColorPicker::new(ColorMode::Palette(Palette::sunset()));
        let first = picker.next_color(&mut ZeroJitter, 0.0);
        for _ in 0..PALETTE_CYCLE_DIVISOR as usize - 1 {
            picker.next_color(&mut ZeroJitter, 0.0);
        }
        // one full divisor later the walk sits on the second color
        let second = picker.next_color(&mut ZeroJitter, 0.0);
        assert_eq!(first, Palette::sunset().get(0));
        assert_eq!(second, Palette::sunset().get(1));
    }

    #[test]
    fn test_palette_walk_wraps_around() {
        let palette = Palette::new(vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap();
        let mut picker = ColorPicker::new(ColorMode::Palette(palette));

        // walk a full cycle: 2 colors * divisor grains
        let start = picker.next_color(&mut ZeroJitter, 0.0);
        for _ in 0..(2.0 * PALETTE_CYCLE_DIVISOR) as usize - 1 {
            picker.next_color(&mut ZeroJitter, 0.0);
        }
        let wrapped = picker.next_color(&mut ZeroJitter, 0.0);
        assert_eq!(start, wrapped);
    }

    #[test]
    fn test_set_mode_restarts_palette_walk() {
        let mut picker = ColorPicker::new(ColorMode::Palette(Palette::sunset()));
        for _ in 0..50 {
            picker.next_color(&mut ZeroJitter, 0.0);
        }
        picker.set_mode(ColorMode::Palette(Palette::ocean()));
        let first = picker.next_color(&mut ZeroJitter, 0.0);
        assert_eq!(first, Palette::ocean().get(0));
    }
}
