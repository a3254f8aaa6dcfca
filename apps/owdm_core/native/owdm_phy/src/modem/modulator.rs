//! Wavelet-OFDM Modulator
//!
//! Shapes a QPSK symbol stream into a transmit waveform, one subcarrier
//! block at a time. The wavelet decompose/reconstruct pair stands in for
//! the inverse FFT of classical OFDM; `Shaping::Fourier` keeps the inverse
//! FFT for comparison.

use num_complex::Complex64;

use super::shaper::{BlockShaper, Direction};
use crate::error::Result;
use crate::traits::WaveletTransform;
use crate::wavelets::Shaping;

/// Modulator over a pluggable wavelet transform
///
/// # Type Parameters
/// * `T` - Transform implementing the decompose/reconstruct contract
pub struct WaveletModulator<T: WaveletTransform> {
    shaper: BlockShaper<T>,
}

impl<T: WaveletTransform> WaveletModulator<T> {
    /// Create a new modulator
    ///
    /// # Arguments
    /// * `transform` - Multiresolution transform
    /// * `shaping` - Wavelet basis or FFT baseline
    /// * `n_subcarriers` - Block size, must be a power of two
    pub fn new(transform: T, shaping: Shaping, n_subcarriers: usize) -> Result<Self> {
        let shaper = BlockShaper::new(transform, shaping, n_subcarriers, Direction::Transmit)?;
        Ok(Self { shaper })
    }

    /// Modulate a symbol stream to a waveform of the same length
    ///
    /// # Errors
    /// `Numerical` if the stream is not whole blocks or shaping produced
    /// a non-finite or misaligned block.
    pub fn modulate(&self, symbols: &[Complex64]) -> Result<Vec<Complex64>> {
        self.shaper.process(symbols)
    }

    pub fn shaping(&self) -> Shaping {
        self.shaper.shaping()
    }

    pub fn n_subcarriers(&self) -> usize {
        self.shaper.n_subcarriers()
    }
}
