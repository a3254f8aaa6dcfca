//! OWDM PHY - Wavelet-OFDM link evaluation engine
//!
//! Generates random QPSK blocks, shapes them with a full-depth wavelet
//! decompose/reconstruct per subcarrier block (or the classical inverse
//! FFT), passes them through an AWGN channel and measures BER and PAPR
//! across SNR or Eb/No sweeps. Plotting lives in Elixir; Rust returns the
//! result tables.

pub mod config;
pub mod constellations;
pub mod error;
pub mod metrics;
pub mod modem;
pub mod symbols;
pub mod sweep;
pub mod traits;
pub mod wavelets;
mod utils;

#[cfg(feature = "nif")]
mod nif;

// Re-export core types for convenience
pub use config::{AxisKind, SimulationConfig};
pub use constellations::Qpsk;
pub use error::{OwdmError, Result};
pub use metrics::{bit_error_rate, detect_bits, papr_db};
pub use modem::{WaveletDemodulator, WaveletModulator};
pub use symbols::{BitBlock, SymbolGenerator, BITS_PER_SYMBOL};
pub use sweep::{Metric, SimulationDriver, SimulationResult};
pub use traits::{Coefficients, Constellation, WaveletTransform};
pub use wavelets::{Dwt, Shaping, Wavelet};

#[cfg(feature = "nif")]
fn on_load(_env: rustler::Env, _info: rustler::Term) -> bool {
    use tracing_subscriber::EnvFilter;

    // The host may load us more than once; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
    true
}

#[cfg(feature = "nif")]
rustler::init!("Elixir.OwdmCore.Sim.Nif", load = on_load);
