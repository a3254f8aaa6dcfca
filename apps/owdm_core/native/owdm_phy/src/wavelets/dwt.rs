//! Discrete wavelet transform with symmetric boundary extension
//!
//! Single level, filter length F, input length n:
//! - analysis keeps the odd samples of the full convolution against the
//!   half-sample symmetric extension, giving floor((n + F - 1) / 2) coefficients
//! - synthesis upsamples, convolves and keeps 2m - F + 2 samples starting
//!   at index F - 2
//!
//! Multilevel reconstruction drops the trailing approximation sample when
//! it is one longer than the next detail band.

use crate::error::{OwdmError, Result};
use crate::traits::{Coefficients, WaveletTransform};

use super::filters::{filter_bank, FilterBank};
use super::Wavelet;

/// Filter-bank DWT over the wavelet catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Dwt;

impl Dwt {
    pub fn new() -> Self {
        Self
    }

    fn bank(wavelet: Wavelet) -> Result<&'static FilterBank> {
        filter_bank(wavelet).ok_or_else(|| {
            OwdmError::Configuration(format!("no filter bank for wavelet '{}'", wavelet))
        })
    }
}

impl WaveletTransform for Dwt {
    fn decompose(&self, block: &[f64], wavelet: Wavelet, levels: usize) -> Result<Coefficients> {
        let bank = Self::bank(wavelet)?;
        if block.is_empty() {
            return Err(OwdmError::Numerical("cannot decompose an empty block".into()));
        }

        let mut approx = block.to_vec();
        let mut details = Vec::with_capacity(levels);

        for _ in 0..levels {
            let (a, d) = analysis_step(&approx, bank);
            details.push(d);
            approx = a;
        }
        details.reverse();

        Ok(Coefficients {
            approximation: approx,
            details,
        })
    }

    fn reconstruct(&self, coeffs: &Coefficients, wavelet: Wavelet) -> Result<Vec<f64>> {
        let bank = Self::bank(wavelet)?;
        let mut approx = coeffs.approximation.clone();

        for detail in &coeffs.details {
            if approx.len() == detail.len() + 1 {
                approx.pop();
            }
            if approx.len() != detail.len() {
                return Err(OwdmError::Numerical(format!(
                    "approximation band of {} does not match detail band of {}",
                    approx.len(),
                    detail.len()
                )));
            }
            approx = synthesis_step(&approx, detail, bank)?;
        }

        Ok(approx)
    }
}

/// Half-sample symmetric extension: ... x1 x0 | x0 x1 ... xn-1 | xn-1 xn-2 ...
#[inline]
fn symmetric_sample(signal: &[f64], index: isize) -> f64 {
    let n = signal.len() as isize;
    let p = index.rem_euclid(2 * n);
    if p < n {
        signal[p as usize]
    } else {
        signal[(2 * n - 1 - p) as usize]
    }
}

/// One analysis level: (approximation, detail)
fn analysis_step(signal: &[f64], bank: &FilterBank) -> (Vec<f64>, Vec<f64>) {
    let f = bank.len();
    let out_len = (signal.len() + f - 1) / 2;

    let mut approx = Vec::with_capacity(out_len);
    let mut detail = Vec::with_capacity(out_len);

    for o in 0..out_len {
        let center = (2 * o + 1) as isize;
        let mut a = 0.0;
        let mut d = 0.0;
        for j in 0..f {
            let x = symmetric_sample(signal, center - j as isize);
            a += bank.dec_lo[j] * x;
            d += bank.dec_hi[j] * x;
        }
        approx.push(a);
        detail.push(d);
    }

    (approx, detail)
}

/// One synthesis level from equal-length bands
fn synthesis_step(approx: &[f64], detail: &[f64], bank: &FilterBank) -> Result<Vec<f64>> {
    let f = bank.len();
    let m = approx.len();
    let out_len = (2 * m + 2).checked_sub(f).ok_or_else(|| {
        OwdmError::Numerical(format!(
            "{} coefficients are too few for a {}-tap filter",
            m, f
        ))
    })?;

    let output: Vec<f64> = (0..out_len)
        .map(|k| {
            // Position in the full upsampled convolution
            let n = k + f - 2;
            (n % 2..f.min(n + 1))
                .step_by(2)
                .map(|j| ((n - j) / 2, j))
                .filter(|&(i, _)| i < m)
                .map(|(i, j)| approx[i] * bank.rec_lo[j] + detail[i] * bank.rec_hi[j])
                .sum::<f64>()
        })
        .collect();

    Ok(output)
}
