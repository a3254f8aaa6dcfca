//! Per-block waveform shaping
//!
//! The stream is cut into contiguous blocks of `n_subcarriers` samples.
//! Wavelet shaping runs a full-depth decompose/reconstruct on the real and
//! imaginary parts independently. Fourier shaping runs an unscaled inverse
//! DFT on transmit and a forward DFT scaled by 1/N on receive, so the noise
//! calibrated per block lands at 1/(2*SNR) per component after detection.
//!
//! Alignment rule: when the transform returns more than `n_subcarriers`
//! samples, the leading `n_subcarriers` are kept and the trailing boundary
//! samples are dropped. A shorter output is a numerical error.

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use crate::error::{OwdmError, Result};
use crate::traits::WaveletTransform;
use crate::wavelets::{Shaping, Wavelet};

/// Which side of the link a shaper serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Transmit,
    Receive,
}

/// Full decomposition depth for a power-of-two block
pub fn decomposition_levels(n_subcarriers: usize) -> usize {
    n_subcarriers.trailing_zeros() as usize
}

/// Reject block sizes the framing cannot use
pub fn validate_block_size(n_subcarriers: usize) -> Result<()> {
    if n_subcarriers == 0 || !n_subcarriers.is_power_of_two() {
        return Err(OwdmError::Configuration(format!(
            "n_subcarriers must be a power of two, got {}",
            n_subcarriers
        )));
    }
    Ok(())
}

/// Keep the leading `n` samples of a reconstructed block
pub fn align_block(mut samples: Vec<f64>, n: usize) -> Result<Vec<f64>> {
    if samples.len() < n {
        return Err(OwdmError::Numerical(format!(
            "reconstruction produced {} samples for a {}-sample block",
            samples.len(),
            n
        )));
    }
    samples.truncate(n);
    Ok(samples)
}

enum Engine {
    Wavelet { wavelet: Wavelet, levels: usize },
    Fourier { fft: Arc<dyn Fft<f64>>, scale: f64 },
}

/// Block-wise shaping shared by the modulator and demodulator
pub struct BlockShaper<T: WaveletTransform> {
    transform: T,
    shaping: Shaping,
    n_subcarriers: usize,
    engine: Engine,
}

impl<T: WaveletTransform> BlockShaper<T> {
    /// # Errors
    /// `Configuration` when `n_subcarriers` is not a power of two.
    pub fn new(
        transform: T,
        shaping: Shaping,
        n_subcarriers: usize,
        direction: Direction,
    ) -> Result<Self> {
        validate_block_size(n_subcarriers)?;

        let engine = match shaping {
            Shaping::Wavelet(wavelet) => Engine::Wavelet {
                wavelet,
                levels: decomposition_levels(n_subcarriers),
            },
            Shaping::Fourier => {
                let mut planner = FftPlanner::<f64>::new();
                match direction {
                    Direction::Transmit => Engine::Fourier {
                        fft: planner.plan_fft_inverse(n_subcarriers),
                        scale: 1.0,
                    },
                    Direction::Receive => Engine::Fourier {
                        fft: planner.plan_fft_forward(n_subcarriers),
                        scale: 1.0 / n_subcarriers as f64,
                    },
                }
            }
        };

        Ok(Self {
            transform,
            shaping,
            n_subcarriers,
            engine,
        })
    }

    pub fn shaping(&self) -> Shaping {
        self.shaping
    }

    pub fn n_subcarriers(&self) -> usize {
        self.n_subcarriers
    }

    /// Shape a whole stream block by block, preserving block order
    pub fn process(&self, stream: &[Complex64]) -> Result<Vec<Complex64>> {
        if stream.len() % self.n_subcarriers != 0 {
            return Err(OwdmError::Numerical(format!(
                "stream of {} samples is not a whole number of {}-sample blocks",
                stream.len(),
                self.n_subcarriers
            )));
        }

        let mut output = Vec::with_capacity(stream.len());
        for block in stream.chunks_exact(self.n_subcarriers) {
            output.extend(self.process_block(block)?);
        }

        if let Some(pos) = output.iter().position(|s| !s.re.is_finite() || !s.im.is_finite()) {
            return Err(OwdmError::Numerical(format!(
                "{} shaping produced a non-finite sample at {}",
                self.shaping, pos
            )));
        }

        Ok(output)
    }

    fn process_block(&self, block: &[Complex64]) -> Result<Vec<Complex64>> {
        match &self.engine {
            Engine::Wavelet { wavelet, levels } => {
                let re: Vec<f64> = block.iter().map(|s| s.re).collect();
                let im: Vec<f64> = block.iter().map(|s| s.im).collect();

                let re = self.round_trip(&re, *wavelet, *levels)?;
                let im = self.round_trip(&im, *wavelet, *levels)?;

                Ok(re
                    .into_iter()
                    .zip(im)
                    .map(|(r, i)| Complex64::new(r, i))
                    .collect())
            }
            Engine::Fourier { fft, scale } => {
                let mut buffer = block.to_vec();
                fft.process(&mut buffer);
                if *scale != 1.0 {
                    for s in buffer.iter_mut() {
                        *s *= *scale;
                    }
                }
                Ok(buffer)
            }
        }
    }

    fn round_trip(&self, part: &[f64], wavelet: Wavelet, levels: usize) -> Result<Vec<f64>> {
        let coeffs = self.transform.decompose(part, wavelet, levels)?;
        let rebuilt = self.transform.reconstruct(&coeffs, wavelet)?;
        align_block(rebuilt, self.n_subcarriers)
    }
}
