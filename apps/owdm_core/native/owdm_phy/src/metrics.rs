//! Bit detection, BER and PAPR

use num_complex::Complex64;

use crate::constellations::Qpsk;
use crate::error::{OwdmError, Result};
use crate::symbols::{BitBlock, BITS_PER_SYMBOL};
use crate::traits::Constellation;
use crate::utils::{mean_power, power_ratio_to_db};

/// Hard-decide every recovered sample and reshape into a bit block.
///
/// # Errors
/// `Numerical` if the stream length does not equal
/// `n_symbols * n_subcarriers`.
pub fn detect_bits(
    recovered: &[Complex64],
    n_symbols: usize,
    n_subcarriers: usize,
) -> Result<BitBlock> {
    let expected = n_symbols * n_subcarriers;
    if recovered.len() != expected {
        return Err(OwdmError::Numerical(format!(
            "recovered {} symbols, block shape needs {}",
            recovered.len(),
            expected
        )));
    }

    let mut bits = vec![0u8; expected * BITS_PER_SYMBOL];
    for (point, out) in recovered.iter().zip(bits.chunks_exact_mut(BITS_PER_SYMBOL)) {
        Qpsk.decide(*point, out);
    }

    BitBlock::from_raw(n_symbols, n_subcarriers, BITS_PER_SYMBOL, bits)
}

/// Fraction of differing bits between two equal-shape blocks.
///
/// # Errors
/// `Numerical` for mismatched shapes or empty blocks.
pub fn bit_error_rate(sent: &BitBlock, received: &BitBlock) -> Result<f64> {
    if sent.shape() != received.shape() {
        return Err(OwdmError::Numerical(format!(
            "cannot compare bit blocks shaped {:?} and {:?}",
            sent.shape(),
            received.shape()
        )));
    }
    if sent.is_empty() {
        return Err(OwdmError::Numerical("BER of an empty bit block".into()));
    }

    let errors = sent
        .as_slice()
        .iter()
        .zip(received.as_slice())
        .filter(|(a, b)| a != b)
        .count();

    Ok(errors as f64 / sent.len() as f64)
}

/// Peak-to-average power ratio in dB.
///
/// Never below 0 dB: for a constant-envelope waveform rounding can leave
/// the mean a few ulps above the peak, which is clamped to equality.
///
/// # Errors
/// `Numerical` for an empty, zero-energy or non-finite waveform.
pub fn papr_db(signal: &[Complex64]) -> Result<f64> {
    if signal.is_empty() {
        return Err(OwdmError::Numerical("PAPR of an empty waveform".into()));
    }

    let peak = signal
        .iter()
        .map(|s| s.norm_sqr())
        .fold(0.0_f64, f64::max);
    let mean = mean_power(signal);

    if !peak.is_finite() || !mean.is_finite() {
        return Err(OwdmError::Numerical("PAPR of a non-finite waveform".into()));
    }
    if mean <= 0.0 {
        return Err(OwdmError::Numerical("PAPR of a zero-energy waveform".into()));
    }

    Ok(power_ratio_to_db((peak / mean).max(1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolGenerator;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_detect_inverts_mapping() {
        let gen = SymbolGenerator::new(20, 16);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let (bits, symbols) = gen.generate(&mut rng);

        let detected = detect_bits(&symbols, 20, 16).unwrap();
        assert_eq!(detected, bits);
    }

    #[test]
    fn test_detect_rejects_wrong_length() {
        let symbols = vec![Complex64::new(1.0, 1.0); 10];
        assert!(matches!(detect_bits(&symbols, 2, 8), Err(OwdmError::Numerical(_))));
    }

    #[test]
    fn test_ber_zero_for_identical_blocks() {
        let gen = SymbolGenerator::new(100, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let (bits, _) = gen.generate(&mut rng);

        assert_eq!(bit_error_rate(&bits, &bits).unwrap(), 0.0);
    }

    #[test]
    fn test_ber_counts_mismatches() {
        let a = BitBlock::from_raw(1, 2, 2, vec![0, 0, 1, 1]).unwrap();
        let b = BitBlock::from_raw(1, 2, 2, vec![1, 0, 1, 0]).unwrap();
        assert_eq!(bit_error_rate(&a, &b).unwrap(), 0.5);

        let inverted = BitBlock::from_raw(1, 2, 2, vec![1, 1, 0, 0]).unwrap();
        assert_eq!(bit_error_rate(&a, &inverted).unwrap(), 1.0);
    }

    #[test]
    fn test_ber_rejects_shape_mismatch() {
        let a = BitBlock::from_raw(1, 2, 2, vec![0; 4]).unwrap();
        let b = BitBlock::from_raw(2, 1, 2, vec![0; 4]).unwrap();
        assert!(bit_error_rate(&a, &b).is_err());
    }

    #[test]
    fn test_papr_constant_envelope_is_zero() {
        let signal = vec![Complex64::new(1.0, -1.0); 64];
        assert_eq!(papr_db(&signal).unwrap(), 0.0);
    }

    #[test]
    fn test_papr_single_spike() {
        let mut signal = vec![Complex64::new(0.0, 0.0); 8];
        signal[3] = Complex64::new(2.0, 0.0);
        // peak 4, mean 0.5 → 9.03 dB
        let papr = papr_db(&signal).unwrap();
        assert!((papr - 10.0 * 8.0_f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_papr_non_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..20 {
            let (_, symbols) = SymbolGenerator::new(2, 32).generate(&mut rng);
            let scaled: Vec<Complex64> = symbols
                .iter()
                .enumerate()
                .map(|(i, s)| *s * (1.0 + (i % 7) as f64 * 1e-3))
                .collect();
            assert!(papr_db(&scaled).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_papr_undefined_cases() {
        assert!(papr_db(&[]).is_err());
        assert!(papr_db(&[Complex64::new(0.0, 0.0); 4]).is_err());
        assert!(papr_db(&[Complex64::new(f64::INFINITY, 0.0)]).is_err());
    }
}
