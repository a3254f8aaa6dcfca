//! Bit blocks and QPSK symbol generation
//!
//! A `BitBlock` is a dense (symbols × subcarriers × bits) grid stored in
//! row-major order, so the bits of symbol `s`, subcarrier `c` sit at
//! `(s * n_subcarriers + c) * bits_per_symbol`.

use num_complex::Complex64;
use rand::Rng;

use crate::constellations::Qpsk;
use crate::error::{OwdmError, Result};
use crate::traits::Constellation;

/// QPSK carries two bits per symbol
pub const BITS_PER_SYMBOL: usize = 2;

/// Dense 3-D bit grid shaped (n_symbols, n_subcarriers, bits_per_symbol)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBlock {
    n_symbols: usize,
    n_subcarriers: usize,
    bits_per_symbol: usize,
    bits: Vec<u8>,
}

impl BitBlock {
    /// Wrap a flat bit buffer.
    ///
    /// # Errors
    /// `Numerical` if the buffer length does not match the shape or a value
    /// other than 0/1 is present.
    pub fn from_raw(
        n_symbols: usize,
        n_subcarriers: usize,
        bits_per_symbol: usize,
        bits: Vec<u8>,
    ) -> Result<Self> {
        let expected = n_symbols * n_subcarriers * bits_per_symbol;
        if bits.len() != expected {
            return Err(OwdmError::Numerical(format!(
                "bit buffer holds {} bits, shape needs {}",
                bits.len(),
                expected
            )));
        }
        if bits.iter().any(|&b| b > 1) {
            return Err(OwdmError::Numerical("bit buffer holds non-binary values".into()));
        }

        Ok(Self {
            n_symbols,
            n_subcarriers,
            bits_per_symbol,
            bits,
        })
    }

    /// (n_symbols, n_subcarriers, bits_per_symbol)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_symbols, self.n_subcarriers, self.bits_per_symbol)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Bit `b` of symbol `s` on subcarrier `c`
    pub fn get(&self, s: usize, c: usize, b: usize) -> u8 {
        self.bits[(s * self.n_subcarriers + c) * self.bits_per_symbol + b]
    }

    /// Bit groups in stream order, one per (symbol, subcarrier)
    pub fn groups(&self) -> std::slice::ChunksExact<'_, u8> {
        self.bits.chunks_exact(self.bits_per_symbol)
    }
}

/// Random QPSK block source
#[derive(Debug, Clone, Copy)]
pub struct SymbolGenerator {
    n_symbols: usize,
    n_subcarriers: usize,
}

impl SymbolGenerator {
    /// The caller validates that `n_subcarriers` is a power of two.
    pub fn new(n_symbols: usize, n_subcarriers: usize) -> Self {
        Self {
            n_symbols,
            n_subcarriers,
        }
    }

    /// Number of complex symbols per generated block
    pub fn stream_len(&self) -> usize {
        self.n_symbols * self.n_subcarriers
    }

    /// Draw fresh uniform bits and map them to QPSK.
    ///
    /// Returns the bit block and its flattened symbol stream of length
    /// `n_symbols * n_subcarriers`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> (BitBlock, Vec<Complex64>) {
        let bits: Vec<u8> = (0..self.stream_len() * BITS_PER_SYMBOL)
            .map(|_| rng.gen_range(0..=1u8))
            .collect();

        let block = BitBlock {
            n_symbols: self.n_symbols,
            n_subcarriers: self.n_subcarriers,
            bits_per_symbol: BITS_PER_SYMBOL,
            bits,
        };
        let symbols = map_symbols(&block);

        (block, symbols)
    }
}

/// QPSK-map every bit group of a block, in stream order
pub fn map_symbols(block: &BitBlock) -> Vec<Complex64> {
    block.groups().map(|pair| Qpsk.map(pair)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_shape() {
        let gen = SymbolGenerator::new(10, 16);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (bits, symbols) = gen.generate(&mut rng);

        assert_eq!(bits.shape(), (10, 16, 2));
        assert_eq!(bits.len(), 320);
        assert_eq!(symbols.len(), 160);
    }

    #[test]
    fn test_symbols_follow_bits() {
        let gen = SymbolGenerator::new(3, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let (bits, symbols) = gen.generate(&mut rng);

        for s in 0..3 {
            for c in 0..8 {
                let sym = symbols[s * 8 + c];
                assert_eq!(sym.re, 2.0 * bits.get(s, c, 0) as f64 - 1.0);
                assert_eq!(sym.im, 2.0 * bits.get(s, c, 1) as f64 - 1.0);
            }
        }
    }

    #[test]
    fn test_bits_are_balanced() {
        let gen = SymbolGenerator::new(100, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (bits, _) = gen.generate(&mut rng);

        let ones = bits.as_slice().iter().filter(|&&b| b == 1).count() as f64;
        let fraction = ones / bits.len() as f64;
        assert!((fraction - 0.5).abs() < 0.02, "ones fraction {}", fraction);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let gen = SymbolGenerator::new(4, 4);
        let mut rng1 = ChaCha8Rng::seed_from_u64(11);
        let mut rng2 = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(gen.generate(&mut rng1), gen.generate(&mut rng2));
    }

    #[test]
    fn test_from_raw_validates_shape() {
        assert!(BitBlock::from_raw(2, 2, 2, vec![0; 8]).is_ok());
        assert!(matches!(
            BitBlock::from_raw(2, 2, 2, vec![0; 7]),
            Err(OwdmError::Numerical(_))
        ));
        assert!(matches!(
            BitBlock::from_raw(1, 1, 2, vec![0, 2]),
            Err(OwdmError::Numerical(_))
        ));
    }
}
