//! Wavelet catalog and waveform shaping selection
//!
//! Identifiers follow the usual short names: `haar`, `db4`, `sym4`,
//! `rbio2.2`, `coif1`. The sentinel `none` selects the FFT baseline.

mod dwt;
mod filters;

pub use dwt::Dwt;
pub use filters::{filter_bank, FilterBank};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OwdmError;

/// Supported wavelet bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Wavelet {
    Haar,
    Db4,
    Sym4,
    Rbio22,
    Coif1,
}

impl Wavelet {
    /// Every wavelet in catalog order
    pub const ALL: [Wavelet; 5] = [
        Wavelet::Haar,
        Wavelet::Db4,
        Wavelet::Sym4,
        Wavelet::Rbio22,
        Wavelet::Coif1,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Wavelet::Haar => "haar",
            Wavelet::Db4 => "db4",
            Wavelet::Sym4 => "sym4",
            Wavelet::Rbio22 => "rbio2.2",
            Wavelet::Coif1 => "coif1",
        }
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wavelet {
    type Err = OwdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wavelet::ALL
            .iter()
            .copied()
            .find(|w| w.name() == s)
            .ok_or_else(|| OwdmError::Configuration(format!("unknown wavelet '{}'", s)))
    }
}

impl TryFrom<String> for Wavelet {
    type Error = OwdmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Wavelet> for String {
    fn from(w: Wavelet) -> Self {
        w.name().to_string()
    }
}

/// Per-block shaping applied by the modulator and undone by the demodulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shaping {
    /// Full-depth decompose/reconstruct with the given wavelet
    Wavelet(Wavelet),
    /// Classical OFDM: inverse DFT on transmit, forward DFT on receive
    Fourier,
}

impl Shaping {
    /// Identifier of the FFT baseline
    pub const FOURIER_NAME: &'static str = "none";

    /// All wavelets followed by the FFT baseline
    pub fn catalog() -> Vec<Shaping> {
        Wavelet::ALL
            .iter()
            .map(|&w| Shaping::Wavelet(w))
            .chain(std::iter::once(Shaping::Fourier))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shaping::Wavelet(w) => w.name(),
            Shaping::Fourier => Self::FOURIER_NAME,
        }
    }

    pub fn wavelet(&self) -> Option<Wavelet> {
        match self {
            Shaping::Wavelet(w) => Some(*w),
            Shaping::Fourier => None,
        }
    }
}

impl fmt::Display for Shaping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shaping {
    type Err = OwdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::FOURIER_NAME {
            Ok(Shaping::Fourier)
        } else {
            s.parse().map(Shaping::Wavelet)
        }
    }
}

impl TryFrom<String> for Shaping {
    type Error = OwdmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Shaping> for String {
    fn from(s: Shaping) -> Self {
        s.name().to_string()
    }
}

impl From<Wavelet> for Shaping {
    fn from(w: Wavelet) -> Self {
        Shaping::Wavelet(w)
    }
}
