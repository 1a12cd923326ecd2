//! Seeded uniform random source used for scene randomization.
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of uniformly distributed numbers.
///
/// Every [`rand::Rng`] is a [`UniformSource`]. The environment owns one seeded
/// generator and lends it to the task at reset, so a seed fixes the sequence of
/// scenes.
pub trait UniformSource {
    /// Draws a number uniformly from `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draws `size` numbers uniformly from `[low, high]`.
    fn uniform_n(&mut self, low: f64, high: f64, size: usize) -> Vec<f64> {
        (0..size).map(|_| self.uniform(low, high)).collect()
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        Uniform::new_inclusive(low, high).sample(self)
    }
}
