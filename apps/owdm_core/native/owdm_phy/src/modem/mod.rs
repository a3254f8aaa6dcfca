//! Core modem implementations
//!
//! Modulator and Demodulator are generic over the wavelet transform so
//! tests can swap in a trivial transform and isolate the block framing.

mod demodulator;
mod modulator;
mod shaper;

pub use demodulator::WaveletDemodulator;
pub use modulator::WaveletModulator;
pub use shaper::{align_block, decomposition_levels, validate_block_size};
