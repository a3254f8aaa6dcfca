//! Simulation configuration
//!
//! One explicit value carries everything a sweep needs, so independent
//! runs never share hidden state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use channel_physics::NoiseParameters;

use crate::error::{OwdmError, Result};
use crate::modem::validate_block_size;
use crate::symbols::BITS_PER_SYMBOL;
use crate::utils::eb_no_to_snr_db;
use crate::wavelets::{Shaping, Wavelet};

/// Physical meaning of the sweep values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Signal-to-noise ratio per symbol, dB
    SnrDb,
    /// Energy per bit over noise density, dB
    EbNoDb,
}

impl AxisKind {
    /// SNR in dB that drives the channel for one sweep value
    pub fn snr_db(&self, value: f64) -> f64 {
        match self {
            AxisKind::SnrDb => value,
            AxisKind::EbNoDb => eb_no_to_snr_db(value, BITS_PER_SYMBOL),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AxisKind::SnrDb => "snr_db",
            AxisKind::EbNoDb => "eb_no_db",
        }
    }
}

impl FromStr for AxisKind {
    type Err = OwdmError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "snr_db" => Ok(AxisKind::SnrDb),
            "eb_no_db" => Ok(AxisKind::EbNoDb),
            other => Err(OwdmError::Configuration(format!("unknown sweep axis: {}", other))),
        }
    }
}

/// Configuration of one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Block size, power of two
    pub n_subcarriers: usize,
    /// OFDM symbols per trial
    pub n_symbols: usize,
    /// Waveforms to compare, one result series each
    pub waveforms: Vec<Shaping>,
    /// Meaning of `sweep`
    pub axis: AxisKind,
    /// Ordered sweep values
    pub sweep: Vec<f64>,
    /// Independent trials averaged per sweep point
    #[serde(default = "default_trials")]
    pub trials_per_point: usize,
    /// Base seed; each trial derives its own stream from it
    #[serde(default)]
    pub seed: u64,
}

fn default_trials() -> usize {
    1
}

impl SimulationConfig {
    /// BER vs SNR: 64 subcarriers, 100 symbols, every wavelet, 0..=20 dB in 5 dB steps
    pub fn ber_experiment() -> Self {
        Self {
            n_subcarriers: 64,
            n_symbols: 100,
            waveforms: Wavelet::ALL.iter().map(|&w| Shaping::Wavelet(w)).collect(),
            axis: AxisKind::SnrDb,
            sweep: vec![0.0, 5.0, 10.0, 15.0, 20.0],
            trials_per_point: 1,
            seed: 0,
        }
    }

    /// PAPR vs Eb/No: 256 subcarriers, one symbol, every wavelet plus the
    /// FFT baseline, Eb/No 1..=10 dB
    pub fn papr_experiment() -> Self {
        Self {
            n_subcarriers: 256,
            n_symbols: 1,
            waveforms: Shaping::catalog(),
            axis: AxisKind::EbNoDb,
            sweep: (1..=10).map(f64::from).collect(),
            trials_per_point: 1,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every configuration and parameter-range constraint.
    ///
    /// # Errors
    /// `Configuration` for a bad block size, symbol or trial count, a block
    /// or trial grid too large to index, or a repeated waveform;
    /// `ParameterRange` for a sweep value without a usable noise variance.
    pub fn validate(&self) -> Result<()> {
        validate_block_size(self.n_subcarriers)?;

        if self.n_symbols == 0 {
            return Err(OwdmError::Configuration("n_symbols must be positive".into()));
        }
        if self.trials_per_point == 0 {
            return Err(OwdmError::Configuration(
                "trials_per_point must be positive".into(),
            ));
        }

        self.n_symbols
            .checked_mul(self.n_subcarriers)
            .and_then(|n| n.checked_mul(BITS_PER_SYMBOL))
            .ok_or_else(|| {
                OwdmError::Configuration(format!(
                    "{} symbols of {} subcarriers do not fit in memory",
                    self.n_symbols, self.n_subcarriers
                ))
            })?;
        self.waveforms
            .len()
            .checked_mul(self.sweep.len())
            .and_then(|n| n.checked_mul(self.trials_per_point))
            .ok_or_else(|| {
                OwdmError::Configuration(format!(
                    "{} trials per point overflow the trial grid",
                    self.trials_per_point
                ))
            })?;

        for (i, shaping) in self.waveforms.iter().enumerate() {
            if self.waveforms[..i].contains(shaping) {
                return Err(OwdmError::Configuration(format!(
                    "waveform {} listed more than once",
                    shaping
                )));
            }
        }

        for &value in &self.sweep {
            NoiseParameters::from_snr_db(self.axis.snr_db(value), self.n_subcarriers)?;
        }

        Ok(())
    }

    /// Total trials a sweep over this configuration runs
    pub fn trial_count(&self) -> usize {
        self.waveforms.len() * self.sweep.len() * self.trials_per_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(SimulationConfig::ber_experiment().validate().is_ok());
        assert!(SimulationConfig::papr_experiment().validate().is_ok());
    }

    #[test]
    fn test_papr_preset_includes_baseline() {
        let config = SimulationConfig::papr_experiment();
        assert_eq!(config.waveforms.last(), Some(&Shaping::Fourier));
        assert_eq!(config.sweep.len(), 10);
        assert_eq!(config.sweep[0], 1.0);
        assert_eq!(config.sweep[9], 10.0);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let mut config = SimulationConfig::ber_experiment();
        config.n_subcarriers = 60;
        assert!(matches!(config.validate(), Err(OwdmError::Configuration(_))));
    }

    #[test]
    fn test_rejects_zero_symbols() {
        let mut config = SimulationConfig::ber_experiment();
        config.n_symbols = 0;
        assert!(matches!(config.validate(), Err(OwdmError::Configuration(_))));
    }

    #[test]
    fn test_rejects_oversized_block() {
        let mut config = SimulationConfig::ber_experiment();
        config.n_symbols = usize::MAX / 64;
        assert!(matches!(config.validate(), Err(OwdmError::Configuration(_))));
    }

    #[test]
    fn test_rejects_oversized_trial_grid() {
        let mut config = SimulationConfig::ber_experiment();
        config.trials_per_point = usize::MAX / 2;
        assert!(matches!(config.validate(), Err(OwdmError::Configuration(_))));
    }

    #[test]
    fn test_rejects_repeated_waveform() {
        let mut config = SimulationConfig::ber_experiment();
        config.waveforms.push(Shaping::Wavelet(Wavelet::Haar));
        assert!(matches!(config.validate(), Err(OwdmError::Configuration(_))));
    }

    #[test]
    fn test_rejects_unusable_sweep_value() {
        let mut config = SimulationConfig::ber_experiment();
        config.sweep.push(f64::INFINITY);
        assert!(matches!(config.validate(), Err(OwdmError::ParameterRange(_))));

        config.sweep = vec![f64::NAN];
        assert!(matches!(config.validate(), Err(OwdmError::ParameterRange(_))));
    }

    #[test]
    fn test_eb_no_axis_offsets_snr() {
        let snr = AxisKind::EbNoDb.snr_db(5.0);
        assert!((snr - 8.010299956639812).abs() < 1e-9);
        assert_eq!(AxisKind::SnrDb.snr_db(5.0), 5.0);
    }

    #[test]
    fn test_axis_names_round_trip() {
        for axis in [AxisKind::SnrDb, AxisKind::EbNoDb] {
            assert_eq!(axis.name().parse::<AxisKind>().unwrap(), axis);
        }
        assert!(matches!(
            "ebno".parse::<AxisKind>(),
            Err(OwdmError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_serde_uses_identifiers() {
        let config = SimulationConfig::papr_experiment();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["waveforms"][3], "rbio2.2");
        assert_eq!(json["waveforms"][5], "none");
        assert_eq!(json["axis"], "eb_no_db");

        let back: SimulationConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_unknown_wavelet_rejected_on_load() {
        let json = serde_json::json!({
            "n_subcarriers": 64,
            "n_symbols": 10,
            "waveforms": ["haar", "db5"],
            "axis": "snr_db",
            "sweep": [0.0]
        });
        assert!(serde_json::from_value::<SimulationConfig>(json).is_err());
    }
}
