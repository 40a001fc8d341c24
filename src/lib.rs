//! # identifica
//!
//! Validation of Ecuadorian identification numbers and their mapping to
//! SRI billing document-type codes:
//!
//! | Document | Digits | Billing code |
//! |----------|--------|--------------|
//! | Cédula (personal identification) | 10 | `05` |
//! | RUC, natural person | 13 | `04` |
//! | RUC, private company | 13 | `04` |
//! | RUC, public entity | 13 | `04` |
//! | Consumidor final | 13 | `07` |
//!
//! Only structural well-formedness is checked (length, province code,
//! third digit, establishment suffix and check digit). Nothing here asks
//! the SRI whether a number is actually registered.
//!
//! ## Quick Start
//!
//! ```rust
//! use identifica::core::BillingCode;
//! use identifica::dispatch::EcuadorIdentification;
//!
//! let mut validator = EcuadorIdentification::default();
//!
//! assert_eq!(
//!     validator.validate_personal_identification("1710034065"),
//!     Some(BillingCode::PersonalIdentification)
//! );
//! assert_eq!(validator.validate_ruc("1790011674001"), Some(BillingCode::Ruc));
//!
//! assert_eq!(validator.validate_natural_ruc("1710034065002"), None);
//! assert_eq!(
//!     validator.last_error().unwrap().to_string(),
//!     "Field does not have the last digits equal to 001."
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rules, check digits, configuration, dispatcher |
//! | `json` | Load [`IdentificationConfig`](crate::core::IdentificationConfig) from JSON |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Decisions are reported through [`tracing`] at `debug` and `trace`
//! level. Numbers themselves are never logged, only their length.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod dispatch;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "core")]
pub use crate::dispatch::{EcuadorIdentification, Operation};
