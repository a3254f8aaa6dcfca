//! Error types for the evaluation pipeline
//!
//! Configuration and parameter-range errors are raised before a sweep
//! starts. Numerical errors are scoped to a single trial.

use channel_physics::ChannelError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, OwdmError>;

/// Errors that can occur while configuring or running a simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OwdmError {
    /// Invalid subcarrier count, unknown wavelet, empty block count
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-finite transform output or misaligned block length
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Sweep value that does not yield a usable noise variance
    #[error("parameter out of range: {0}")]
    ParameterRange(String),
}

impl OwdmError {
    /// True for errors that abort a whole sweep
    pub fn is_fatal(&self) -> bool {
        !matches!(self, OwdmError::Numerical(_))
    }
}

impl From<ChannelError> for OwdmError {
    fn from(err: ChannelError) -> Self {
        OwdmError::ParameterRange(err.to_string())
    }
}
