//! Wavelet-OFDM Demodulator
//!
//! Symmetric with the Modulator: the same transform, wavelet, depth and
//! alignment rule, applied to each received block.

use num_complex::Complex64;

use super::shaper::{BlockShaper, Direction};
use crate::error::Result;
use crate::traits::WaveletTransform;
use crate::wavelets::Shaping;

/// Demodulator over a pluggable wavelet transform
pub struct WaveletDemodulator<T: WaveletTransform> {
    shaper: BlockShaper<T>,
}

impl<T: WaveletTransform> WaveletDemodulator<T> {
    /// Create a new demodulator
    pub fn new(transform: T, shaping: Shaping, n_subcarriers: usize) -> Result<Self> {
        let shaper = BlockShaper::new(transform, shaping, n_subcarriers, Direction::Receive)?;
        Ok(Self { shaper })
    }

    /// Recover the symbol-stream estimate from a received waveform
    pub fn demodulate(&self, received: &[Complex64]) -> Result<Vec<Complex64>> {
        self.shaper.process(received)
    }

    pub fn shaping(&self) -> Shaping {
        self.shaper.shaping()
    }

    pub fn n_subcarriers(&self) -> usize {
        self.shaper.n_subcarriers()
    }
}
