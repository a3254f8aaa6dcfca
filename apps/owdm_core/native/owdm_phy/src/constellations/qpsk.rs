//! QPSK constellation (2 bits per symbol)
//!
//! Unnormalized antipodal mapping, one bit per axis:
//! I = 2·b0 − 1, Q = 2·b1 − 1
//!
//! Decisions are by sign; a component of exactly zero decides 0.

use crate::traits::Constellation;
use num_complex::Complex64;

/// Quadrature Phase Shift Keying constellation
#[derive(Debug, Clone, Copy, Default)]
pub struct Qpsk;

impl Constellation for Qpsk {
    fn order(&self) -> usize {
        4
    }

    fn map(&self, bits: &[u8]) -> Complex64 {
        debug_assert_eq!(bits.len(), 2);
        let i = 2.0 * f64::from(bits[0]) - 1.0;
        let q = 2.0 * f64::from(bits[1]) - 1.0;
        Complex64::new(i, q)
    }

    fn decide(&self, point: Complex64, bits: &mut [u8]) {
        debug_assert_eq!(bits.len(), 2);
        bits[0] = u8::from(point.re > 0.0);
        bits[1] = u8::from(point.im > 0.0);
    }
}
