//! Simulation driver
//!
//! Sweeps waveform choice against the configured axis. Every
//! (waveform, point, trial) cell is an independent trial with its own
//! ChaCha stream, so the grid runs on rayon without shared state and the
//! numbers do not depend on scheduling.

use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use channel_physics::AwgnChannel;

use crate::config::{AxisKind, SimulationConfig};
use crate::error::{OwdmError, Result};
use crate::metrics::{bit_error_rate, detect_bits, papr_db};
use crate::modem::{WaveletDemodulator, WaveletModulator};
use crate::symbols::SymbolGenerator;
use crate::traits::WaveletTransform;
use crate::wavelets::{Dwt, Shaping};

/// Quantity recorded at each sweep point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    BitErrorRate,
    PaprDb,
}

/// Result table: one metric sequence per waveform, aligned with `points`.
///
/// `None` marks a point whose trial hit a numerical error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub metric: Metric,
    pub axis: AxisKind,
    pub points: Vec<f64>,
    pub series: BTreeMap<Shaping, Vec<Option<f64>>>,
}

impl SimulationResult {
    pub fn get(&self, shaping: Shaping) -> Option<&[Option<f64>]> {
        self.series.get(&shaping).map(Vec::as_slice)
    }
}

/// Batch driver for the BER and PAPR experiments
pub struct SimulationDriver<T: WaveletTransform = Dwt> {
    transform: T,
    config: SimulationConfig,
    generator: SymbolGenerator,
}

impl SimulationDriver<Dwt> {
    /// Driver over the bundled DWT.
    ///
    /// # Errors
    /// Any configuration or parameter-range error, raised here before a
    /// random source exists.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_transform(Dwt, config)
    }
}

impl<T: WaveletTransform> SimulationDriver<T> {
    pub fn with_transform(transform: T, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let generator = SymbolGenerator::new(config.n_symbols, config.n_subcarriers);

        Ok(Self {
            transform,
            config,
            generator,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// BER for every waveform and sweep point
    pub fn run_ber(&self) -> Result<SimulationResult> {
        self.run(Metric::BitErrorRate)
    }

    /// PAPR of fresh noiseless waveforms for every waveform and sweep point
    pub fn run_papr(&self) -> Result<SimulationResult> {
        self.run(Metric::PaprDb)
    }

    fn run(&self, metric: Metric) -> Result<SimulationResult> {
        let n_points = self.config.sweep.len();
        info!(
            ?metric,
            waveforms = self.config.waveforms.len(),
            points = n_points,
            trials = self.config.trial_count(),
            n_subcarriers = self.config.n_subcarriers,
            "starting sweep"
        );

        let series = self
            .config
            .waveforms
            .par_iter()
            .enumerate()
            .map(|(w_idx, &shaping)| -> Result<(Shaping, Vec<Option<f64>>)> {
                let values = (0..n_points)
                    .into_par_iter()
                    .map(|p_idx| self.run_point(metric, shaping, w_idx, p_idx))
                    .collect::<Result<Vec<Option<f64>>>>()?;
                Ok((shaping, values))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        let missing = series
            .values()
            .flatten()
            .filter(|value| value.is_none())
            .count();
        info!(?metric, missing, "sweep finished");

        Ok(SimulationResult {
            metric,
            axis: self.config.axis,
            points: self.config.sweep.clone(),
            series,
        })
    }

    /// Average of the point's trials, `None` if any trial failed numerically
    fn run_point(
        &self,
        metric: Metric,
        shaping: Shaping,
        w_idx: usize,
        p_idx: usize,
    ) -> Result<Option<f64>> {
        let n = self.config.n_subcarriers;
        let value = self.config.sweep[p_idx];
        let snr_db = self.config.axis.snr_db(value);

        let modulator = WaveletModulator::new(&self.transform, shaping, n)?;
        let demodulator = WaveletDemodulator::new(&self.transform, shaping, n)?;
        let channel = AwgnChannel::from_snr_db(snr_db, n)?;

        let trials = self.config.trials_per_point;
        let mut total = 0.0;

        for trial in 0..trials {
            let mut rng = self.trial_rng(w_idx, p_idx, trial);

            let outcome = match metric {
                Metric::BitErrorRate => {
                    self.ber_trial(&modulator, &demodulator, &channel, &mut rng)
                }
                Metric::PaprDb => self.papr_trial(&modulator, &mut rng),
            };

            match outcome {
                Ok(v) => {
                    debug!(%shaping, value, trial, result = v, "trial done");
                    total += v;
                }
                Err(err @ OwdmError::Numerical(_)) => {
                    warn!(%shaping, value, trial, error = %err, "trial dropped");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Some(total / trials as f64))
    }

    fn trial_rng(&self, w_idx: usize, p_idx: usize, trial: usize) -> ChaCha8Rng {
        let cell = w_idx * self.config.sweep.len() + p_idx;
        let stream = cell * self.config.trials_per_point + trial;

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream(stream as u64);
        rng
    }

    /// Bits -> modulate -> AWGN -> demodulate -> detect -> BER
    fn ber_trial<M, R>(
        &self,
        modulator: &WaveletModulator<M>,
        demodulator: &WaveletDemodulator<M>,
        channel: &AwgnChannel,
        rng: &mut R,
    ) -> Result<f64>
    where
        M: WaveletTransform,
        R: Rng + ?Sized,
    {
        let (sent, symbols) = self.generator.generate(rng);
        let waveform = modulator.modulate(&symbols)?;
        let received = channel.apply(&waveform, rng);
        let recovered = demodulator.demodulate(&received)?;

        let detected = detect_bits(
            &recovered,
            self.config.n_symbols,
            self.config.n_subcarriers,
        )?;
        bit_error_rate(&sent, &detected)
    }

    fn papr_trial<M, R>(&self, modulator: &WaveletModulator<M>, rng: &mut R) -> Result<f64>
    where
        M: WaveletTransform,
        R: Rng + ?Sized,
    {
        let (_, symbols) = self.generator.generate(rng);
        let waveform: Vec<Complex64> = modulator.modulate(&symbols)?;
        papr_db(&waveform)
    }
}
