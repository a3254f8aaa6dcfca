//! Additive White Gaussian Noise generator
//!
//! Draws standard normal samples from `rand_distr` and scales them by the
//! configured standard deviation. Each generator owns a ChaCha stream seeded
//! from the caller's source, so noise is reproducible per trial.

use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// AWGN generator with configurable per-component variance
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of per-component variance)
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,
}

impl NoiseGenerator {
    /// Create a generator whose real-valued samples have the given variance.
    ///
    /// The internal RNG is seeded from one draw of `seed_rng`.
    pub fn new<R: Rng + ?Sized>(variance: f64, seed_rng: &mut R) -> Self {
        let std_dev = variance.sqrt();

        let seed: u64 = seed_rng.gen();
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self { std_dev, rng }
    }

    /// Standard deviation applied to every real-valued sample
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Next real Gaussian noise sample
    pub fn next_sample(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * self.std_dev
    }

    /// Next complex noise sample, independent real and imaginary parts
    pub fn next_complex(&mut self) -> Complex64 {
        let re = self.next_sample();
        let im = self.next_sample();
        Complex64::new(re, im)
    }
}
