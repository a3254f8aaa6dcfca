//! Channel error types

use thiserror::Error;

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors raised while deriving noise parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// SNR value that does not map to a finite, positive noise variance
    #[error("SNR {snr_db} dB yields unusable noise variance {variance}")]
    ParameterRange { snr_db: f64, variance: f64 },

    /// Subcarrier count of zero leaves the variance undefined
    #[error("noise calibration needs at least one subcarrier")]
    NoSubcarriers,
}
