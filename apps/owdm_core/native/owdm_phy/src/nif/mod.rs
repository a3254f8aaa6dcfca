//! NIF interface for Elixir
//!
//! Sweeps run on dirty CPU schedulers and return
//! `{:ok, %{"haar" => [ber_or_nil, ...], ...}}`; failures come back as
//! `{:error, reason}`.

use rustler::{Atom, NifResult, NifStruct};
use std::collections::HashMap;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::OwdmError;
use crate::sweep::{SimulationDriver, SimulationResult};
use crate::wavelets::Shaping;

rustler::atoms! {
    ok,
}

/// Sweep parameters from Elixir
#[derive(NifStruct, Debug, Clone)]
#[module = "OwdmCore.Sim.SweepParams"]
pub struct SweepParams {
    pub n_subcarriers: u64,
    pub n_symbols: u64,
    pub waveforms: Vec<String>,
    pub axis: String,
    pub sweep: Vec<f64>,
    pub trials_per_point: u64,
    pub seed: u64,
}

fn to_usize(name: &str, value: u64) -> Result<usize, OwdmError> {
    usize::try_from(value)
        .map_err(|_| OwdmError::Configuration(format!("{} out of range: {}", name, value)))
}

impl TryFrom<SweepParams> for SimulationConfig {
    type Error = OwdmError;

    fn try_from(params: SweepParams) -> Result<Self, Self::Error> {
        let waveforms = params
            .waveforms
            .iter()
            .map(|id| id.parse::<Shaping>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimulationConfig {
            n_subcarriers: to_usize("n_subcarriers", params.n_subcarriers)?,
            n_symbols: to_usize("n_symbols", params.n_symbols)?,
            waveforms,
            axis: params.axis.parse()?,
            sweep: params.sweep,
            trials_per_point: to_usize("trials_per_point", params.trials_per_point)?,
            seed: params.seed,
        })
    }
}

fn term_error(err: OwdmError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.to_string()))
}

fn encode_series(result: SimulationResult) -> HashMap<String, Vec<Option<f64>>> {
    result
        .series
        .into_iter()
        .map(|(shaping, values)| (shaping.to_string(), values))
        .collect()
}

fn driver(params: SweepParams) -> NifResult<SimulationDriver> {
    let config = SimulationConfig::try_from(params).map_err(term_error)?;
    let driver = SimulationDriver::new(config).map_err(term_error)?;
    debug!(config = ?driver.config(), "decoded sweep parameters");
    Ok(driver)
}

/// Supported waveform identifiers, `"none"` last
#[rustler::nif]
fn wavelets() -> Vec<String> {
    Shaping::catalog().iter().map(|s| s.to_string()).collect()
}

#[rustler::nif(schedule = "DirtyCpu")]
fn ber_sweep(params: SweepParams) -> NifResult<(Atom, HashMap<String, Vec<Option<f64>>>)> {
    let result = driver(params)?.run_ber().map_err(term_error)?;
    Ok((ok(), encode_series(result)))
}

#[rustler::nif(schedule = "DirtyCpu")]
fn papr_sweep(params: SweepParams) -> NifResult<(Atom, HashMap<String, Vec<Option<f64>>>)> {
    let result = driver(params)?.run_papr().map_err(term_error)?;
    Ok((ok(), encode_series(result)))
}
