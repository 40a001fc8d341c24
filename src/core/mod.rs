//! Validation engine: digit helpers, check-digit algorithms, per-type
//! rules, configuration and the failure taxonomy.
//!
//! This module is stateless. For the stateful entry points that remember
//! the last failure, see [`crate::dispatch`].

pub mod checksum;
mod config;
pub mod digits;
mod error;
mod rules;

pub use checksum::{ChecksumSpec, WeightedChecksum, mod10_verify, mod11_verify};
pub use config::*;
pub use error::*;
pub use rules::*;
