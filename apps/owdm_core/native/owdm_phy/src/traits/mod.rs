//! Core DSP traits for the evaluation pipeline
//!
//! These traits define mathematical behavior, not experiments.
//! Each trait represents one orthogonal axis of waveform configuration.

mod constellation;
mod transform;

pub use constellation::Constellation;
pub use transform::{Coefficients, WaveletTransform};
