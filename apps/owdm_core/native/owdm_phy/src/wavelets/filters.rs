//! Wavelet filter banks
//!
//! Orthogonal families are stored as their analysis low-pass filter; the
//! high-pass and synthesis filters follow from the quadrature mirror
//! relations. rbio2.2 is biorthogonal and carries all four filters.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::Wavelet;

const HAAR_DEC_LO: [f64; 2] = [0.7071067811865476, 0.7071067811865476];

const DB4_DEC_LO: [f64; 8] = [
    -0.010597401785069032,
    0.0328830116668852,
    0.030841381835560764,
    -0.18703481171909309,
    -0.027983769416859854,
    0.6308807679298589,
    0.7148465705529157,
    0.2303778133088965,
];

const SYM4_DEC_LO: [f64; 8] = [
    -0.07576571478927333,
    -0.02963552764599851,
    0.49761866763201545,
    0.8037387518059161,
    0.29785779560527736,
    -0.09921954357684722,
    -0.012603967262037833,
    0.0322231006040427,
];

const COIF1_DEC_LO: [f64; 6] = [
    -0.01565572813546454,
    -0.0727326195128539,
    0.38486484686420286,
    0.8525720202122554,
    0.3378976624578092,
    -0.0727326195128539,
];

// Zero taps pad the rbio2.2 filters to a common even length.
const RBIO22_DEC_LO: [f64; 6] = [
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
];
const RBIO22_DEC_HI: [f64; 6] = [
    0.1767766952966369,
    0.3535533905932738,
    -1.0606601717798214,
    0.3535533905932738,
    0.1767766952966369,
    0.0,
];
const RBIO22_REC_LO: [f64; 6] = [
    -0.1767766952966369,
    0.3535533905932738,
    1.0606601717798214,
    0.3535533905932738,
    -0.1767766952966369,
    0.0,
];
const RBIO22_REC_HI: [f64; 6] = [
    0.0,
    0.0,
    0.3535533905932738,
    -0.7071067811865476,
    0.3535533905932738,
    0.0,
];

/// Analysis and synthesis filters of one wavelet
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    pub dec_lo: Vec<f64>,
    pub dec_hi: Vec<f64>,
    pub rec_lo: Vec<f64>,
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Derive a full bank from an orthogonal analysis low-pass filter
    fn orthogonal(dec_lo: &[f64]) -> Self {
        let rec_lo: Vec<f64> = dec_lo.iter().rev().copied().collect();

        let dec_hi: Vec<f64> = rec_lo
            .iter()
            .enumerate()
            .map(|(k, &h)| if k % 2 == 0 { -h } else { h })
            .collect();

        let rec_hi: Vec<f64> = dec_hi.iter().rev().copied().collect();

        Self {
            dec_lo: dec_lo.to_vec(),
            dec_hi,
            rec_lo,
            rec_hi,
        }
    }

    /// Filter length shared by all four filters
    pub fn len(&self) -> usize {
        self.dec_lo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dec_lo.is_empty()
    }
}

lazy_static! {
    static ref FILTER_BANKS: HashMap<Wavelet, FilterBank> = {
        let mut banks = HashMap::new();
        banks.insert(Wavelet::Haar, FilterBank::orthogonal(&HAAR_DEC_LO));
        banks.insert(Wavelet::Db4, FilterBank::orthogonal(&DB4_DEC_LO));
        banks.insert(Wavelet::Sym4, FilterBank::orthogonal(&SYM4_DEC_LO));
        banks.insert(Wavelet::Coif1, FilterBank::orthogonal(&COIF1_DEC_LO));
        banks.insert(
            Wavelet::Rbio22,
            FilterBank {
                dec_lo: RBIO22_DEC_LO.to_vec(),
                dec_hi: RBIO22_DEC_HI.to_vec(),
                rec_lo: RBIO22_REC_LO.to_vec(),
                rec_hi: RBIO22_REC_HI.to_vec(),
            },
        );
        banks
    };
}

/// Filter bank for a wavelet, if the catalog carries it
pub fn filter_bank(wavelet: Wavelet) -> Option<&'static FilterBank> {
    FILTER_BANKS.get(&wavelet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_every_wavelet_has_a_bank() {
        for w in Wavelet::ALL {
            let bank = filter_bank(w).unwrap();
            assert_eq!(bank.dec_hi.len(), bank.len());
            assert_eq!(bank.rec_lo.len(), bank.len());
            assert_eq!(bank.rec_hi.len(), bank.len());
            assert_eq!(bank.len() % 2, 0, "{} filter length must be even", w);
        }
    }

    #[test]
    fn test_lowpass_dc_gain() {
        for w in Wavelet::ALL {
            let bank = filter_bank(w).unwrap();
            let dc: f64 = bank.dec_lo.iter().sum();
            assert!((dc - SQRT_2).abs() < 1e-9, "{} dec_lo sum {}", w, dc);
            let dc: f64 = bank.rec_lo.iter().sum();
            assert!((dc - SQRT_2).abs() < 1e-9, "{} rec_lo sum {}", w, dc);
        }
    }

    #[test]
    fn test_highpass_rejects_dc() {
        for w in Wavelet::ALL {
            let bank = filter_bank(w).unwrap();
            let dc: f64 = bank.dec_hi.iter().sum();
            assert!(dc.abs() < 1e-9, "{} dec_hi sum {}", w, dc);
        }
    }

    #[test]
    fn test_orthogonal_banks_have_unit_energy() {
        for w in [Wavelet::Haar, Wavelet::Db4, Wavelet::Sym4, Wavelet::Coif1] {
            let bank = filter_bank(w).unwrap();
            let energy: f64 = bank.dec_lo.iter().map(|h| h * h).sum();
            assert!((energy - 1.0).abs() < 1e-9, "{} energy {}", w, energy);
        }
    }

    #[test]
    fn test_haar_bank() {
        let bank = filter_bank(Wavelet::Haar).unwrap();
        let s = HAAR_DEC_LO[0];
        assert_eq!(bank.dec_hi, vec![-s, s]);
        assert_eq!(bank.rec_lo, vec![s, s]);
        assert_eq!(bank.rec_hi, vec![s, -s]);
    }
}
