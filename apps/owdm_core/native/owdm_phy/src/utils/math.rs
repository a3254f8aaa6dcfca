//! Small DSP math helpers

use num_complex::Complex64;

/// Convert a linear power ratio to dB
#[inline]
pub fn power_ratio_to_db(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

/// Mean of |x|² over a complex sequence (0 for an empty slice)
#[inline]
pub fn mean_power(samples: &[Complex64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.norm_sqr()).sum::<f64>() / samples.len() as f64
}

/// SNR per symbol from Eb/No for a constellation carrying `bits_per_symbol`
#[inline]
pub fn eb_no_to_snr_db(eb_no_db: f64, bits_per_symbol: usize) -> f64 {
    eb_no_db + power_ratio_to_db(bits_per_symbol as f64)
}
