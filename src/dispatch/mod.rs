//! Stateful entry points and named operations.
//!
//! [`EcuadorIdentification`] wraps the per-type rules, runs composite
//! checks in a fixed order and records the reason for the last failure.
//! [`Operation`] maps string keys (as used by form-validation rules) to
//! those checks.
//!
//! # Example
//!
//! ```
//! use identifica::dispatch::{EcuadorIdentification, Operation};
//!
//! let mut validator = EcuadorIdentification::default();
//!
//! // Billing code by composite
//! assert_eq!(validator.validate_all_identifications("9999999999999").unwrap().code(), "07");
//!
//! // By key
//! assert!(validator.passes("is_juridical_person", "1760001550001"));
//! assert_eq!(validator.run(Operation::IsNaturalPerson, "1760001550001"), None);
//! ```

mod dispatcher;
mod operation;

pub use dispatcher::EcuadorIdentification;
pub use operation::Operation;
