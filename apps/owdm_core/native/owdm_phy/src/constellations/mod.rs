//! Constellation implementations
//!
//! Only QPSK (2 bits/symbol) is used by the evaluation core.

mod qpsk;

pub use qpsk::Qpsk;
