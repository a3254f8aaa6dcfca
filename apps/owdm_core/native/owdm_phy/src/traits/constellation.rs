//! Constellation trait - Bits ↔ complex symbol mapping
//!
//! Defines how bit groups map to complex baseband points.
//! This trait knows nothing about block framing or waveform shaping.

use num_complex::Complex64;

/// Symbol alphabet mapping trait
///
/// Used by the symbol generator (bits → point) and the detector
/// (point → bits).
pub trait Constellation: Send + Sync {
    /// Number of points in the constellation (4 for QPSK)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        (self.order() as f64).log2() as usize
    }

    /// Map one group of `bits_per_symbol` bits to a complex point
    fn map(&self, bits: &[u8]) -> Complex64;

    /// Hard decision: write the bits nearest to `point` into `bits`
    fn decide(&self, point: Complex64, bits: &mut [u8]);
}
