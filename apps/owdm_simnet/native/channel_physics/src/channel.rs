//! AWGN channel model for block-framed multicarrier waveforms
//!
//! Noise variance is calibrated per subcarrier block rather than from the
//! measured signal power:
//!
//! ```text
//! snr_linear = 10^(snr_db / 10)
//! variance   = n_subcarriers / (2 * snr_linear)
//! ```
//!
//! The variance is applied to the real and imaginary parts independently.

use num_complex::Complex64;
use rand::Rng;
use tracing::debug;

use crate::error::{ChannelError, ChannelResult};
use crate::noise::NoiseGenerator;

/// Noise parameters derived from an SNR and the block size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParameters {
    snr_db: f64,
    snr_linear: f64,
    variance: f64,
}

impl NoiseParameters {
    /// Derive noise parameters for a target SNR.
    ///
    /// # Errors
    /// `NoSubcarriers` for a zero block size, `ParameterRange` when the
    /// resulting variance is not finite and strictly positive.
    pub fn from_snr_db(snr_db: f64, n_subcarriers: usize) -> ChannelResult<Self> {
        if n_subcarriers == 0 {
            return Err(ChannelError::NoSubcarriers);
        }

        let snr_linear = 10.0_f64.powf(snr_db / 10.0);
        let variance = n_subcarriers as f64 / (2.0 * snr_linear);

        if !variance.is_finite() || variance <= 0.0 {
            return Err(ChannelError::ParameterRange { snr_db, variance });
        }

        Ok(Self {
            snr_db,
            snr_linear,
            variance,
        })
    }

    pub fn snr_db(&self) -> f64 {
        self.snr_db
    }

    pub fn snr_linear(&self) -> f64 {
        self.snr_linear
    }

    /// Per-component noise variance
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Per-component standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Additive white Gaussian noise channel
#[derive(Debug, Clone, Copy)]
pub struct AwgnChannel {
    params: NoiseParameters,
}

impl AwgnChannel {
    pub fn new(params: NoiseParameters) -> Self {
        Self { params }
    }

    /// Build a channel straight from an SNR and block size
    pub fn from_snr_db(snr_db: f64, n_subcarriers: usize) -> ChannelResult<Self> {
        NoiseParameters::from_snr_db(snr_db, n_subcarriers).map(Self::new)
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    /// Add one complex noise sample to every signal sample.
    ///
    /// Output has the same length as `signal`. Identical seeds give
    /// identical output.
    pub fn apply<R: Rng + ?Sized>(&self, signal: &[Complex64], rng: &mut R) -> Vec<Complex64> {
        let mut noise = NoiseGenerator::new(self.params.variance, rng);

        debug!(
            samples = signal.len(),
            snr_db = self.params.snr_db,
            variance = self.params.variance,
            "applying AWGN"
        );

        signal
            .iter()
            .map(|&sample| sample + noise.next_complex())
            .collect()
    }
}
