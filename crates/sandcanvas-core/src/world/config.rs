//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::world::GrainRng;

/// Chance per grain per sub-step of attempting a wind drift.
pub const WIND_DRIFT_CHANCE: f32 = 0.3;

/// Per-tick settings for the automaton stepper.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Sub-steps per tick; 0 pauses all motion.
    pub gravity: u32,
    pub wind_enabled: bool,
    /// -1 drifts left, 1 drifts right, 0 none.
    pub wind_dir: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 4,
            wind_enabled: false,
            wind_dir: 0,
        }
    }
}

impl SimConfig {
    /// Pick a fresh ±1 drift direction, used each time wind is enabled.
    pub fn randomize_wind_dir<R: GrainRng + ?Sized>(&mut self, rng: &mut R) {
        self.wind_dir = rng.gen_sign();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.gravity, 4);
        assert!(!config.wind_enabled);
        assert_eq!(config.wind_dir, 0);
    }

    #[test]
    fn test_randomize_wind_dir_is_unit() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut config = SimConfig::default();
        for _ in 0..32 {
            config.randomize_wind_dir(&mut rng);
            assert!(config.wind_dir == -1 || config.wind_dir == 1);
        }
    }
}
