//! Channel Physics for the wavelet-OFDM simulator
//!
//! Additive white Gaussian noise calibrated per subcarrier block.
//! Fading and multipath are not modelled; the evaluation only
//! compares waveform shaping under AWGN.

pub mod channel;
pub mod error;
pub mod noise;

pub use channel::{AwgnChannel, NoiseParameters};
pub use error::{ChannelError, ChannelResult};
pub use noise::NoiseGenerator;
