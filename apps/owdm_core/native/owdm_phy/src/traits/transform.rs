//! WaveletTransform trait - Multiresolution decomposition contract
//!
//! The modulator and demodulator only see this interface. Filter tables
//! and boundary extension belong to the implementation.

use crate::error::Result;
use crate::wavelets::Wavelet;

/// Multilevel coefficient set
///
/// `details[0]` is the coarsest detail band, matching the order in which
/// reconstruction consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    pub approximation: Vec<f64>,
    pub details: Vec<Vec<f64>>,
}

impl Coefficients {
    /// Decomposition depth
    pub fn levels(&self) -> usize {
        self.details.len()
    }

    /// Total number of coefficients across all bands
    pub fn len(&self) -> usize {
        self.approximation.len() + self.details.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Forward/inverse multiresolution transform
///
/// Contract: `reconstruct(decompose(x, w, L), w)` reproduces `x`, possibly
/// followed by extra boundary samples. Callers align the output to the
/// input length. Implementations must be deterministic.
pub trait WaveletTransform: Send + Sync {
    /// Decompose a real block to `levels` levels
    ///
    /// # Errors
    /// `Configuration` when the wavelet is not supported.
    fn decompose(&self, block: &[f64], wavelet: Wavelet, levels: usize) -> Result<Coefficients>;

    /// Inverse of `decompose`
    ///
    /// # Errors
    /// `Configuration` for an unsupported wavelet, `Numerical` when the
    /// coefficient bands have inconsistent lengths.
    fn reconstruct(&self, coeffs: &Coefficients, wavelet: Wavelet) -> Result<Vec<f64>>;
}

impl<T: WaveletTransform + ?Sized> WaveletTransform for &T {
    fn decompose(&self, block: &[f64], wavelet: Wavelet, levels: usize) -> Result<Coefficients> {
        (**self).decompose(block, wavelet, levels)
    }

    fn reconstruct(&self, coeffs: &Coefficients, wavelet: Wavelet) -> Result<Vec<f64>> {
        (**self).reconstruct(coeffs, wavelet)
    }
}
