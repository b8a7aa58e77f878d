//! RNG trait abstraction for the simulation
//!
//! Lets the stepper and brushes run against both:
//! - `rand::thread_rng()` in the interactive app
//! - a seeded `rand_xoshiro` generator for reproducible tests

/// Random number generator trait for grain movement and spawning.
pub trait GrainRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniform ±1, used for slide tie-breaks and wind direction.
    fn gen_sign(&mut self) -> i32 {
        if self.gen_bool() { -1 } else { 1 }
    }
}

// Blanket implementation for any type implementing rand::Rng,
// covering ThreadRng and seeded test generators alike.
impl<T: ?Sized + rand::Rng> GrainRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
