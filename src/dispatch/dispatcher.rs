use crate::core::{BillingCode, IdentificationConfig, IdentificationType, ValidationFailure};

use super::operation::Operation;

/// Validates Ecuadorian identification numbers and remembers why the last
/// attempt failed.
///
/// Every entry point clears the recorded failure before it runs, so
/// [`last_error`](Self::last_error) always describes the most recent call.
/// Composite operations try several document types in turn; after a
/// composite fails, the recorded failure is the one from the last type
/// tried.
///
/// Instances hold mutable state. Share one across threads only behind a
/// lock, or create one per validation.
///
/// # Example
///
/// ```
/// use identifica::dispatch::EcuadorIdentification;
///
/// let mut validator = EcuadorIdentification::default();
/// assert_eq!(validator.validate_ruc("1790011674001").unwrap().code(), "04");
///
/// assert!(validator.validate_personal_identification("0154567890").is_none());
/// assert_eq!(
///     validator.last_error().unwrap().to_string(),
///     "The identification number is invalid."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct EcuadorIdentification {
    config: IdentificationConfig,
    last_error: Option<ValidationFailure>,
}

impl EcuadorIdentification {
    /// Create a dispatcher with the given configuration.
    ///
    /// An [`IdentificationConfig`] can only be built through its checked
    /// constructors, so the sentinel and province count are always usable.
    pub fn new(config: IdentificationConfig) -> Self {
        Self {
            config,
            last_error: None,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &IdentificationConfig {
        &self.config
    }

    /// Why the most recent call returned `None`, if it did.
    pub fn last_error(&self) -> Option<&ValidationFailure> {
        self.last_error.as_ref()
    }

    /// Validate the final-consumer sentinel.
    pub fn validate_final_consumer(&mut self, number: &str) -> Option<BillingCode> {
        self.check(IdentificationType::FinalConsumer, number)
    }

    /// Validate a cédula.
    pub fn validate_personal_identification(&mut self, number: &str) -> Option<BillingCode> {
        self.check(IdentificationType::PersonalIdentification, number)
    }

    /// Validate the RUC of a natural person.
    pub fn validate_natural_ruc(&mut self, number: &str) -> Option<BillingCode> {
        self.check(IdentificationType::NaturalRuc, number)
    }

    /// Validate the RUC of a private company.
    pub fn validate_private_ruc(&mut self, number: &str) -> Option<BillingCode> {
        self.check(IdentificationType::PrivateRuc, number)
    }

    /// Validate the RUC of a public entity.
    pub fn validate_public_ruc(&mut self, number: &str) -> Option<BillingCode> {
        self.check(IdentificationType::PublicRuc, number)
    }

    /// Validate any RUC: private, then public, then natural person.
    pub fn validate_ruc(&mut self, number: &str) -> Option<BillingCode> {
        self.run(Operation::Ruc, number)
    }

    /// Validate a natural person: cédula, then natural-person RUC.
    pub fn validate_is_natural_person(&mut self, number: &str) -> Option<BillingCode> {
        self.run(Operation::IsNaturalPerson, number)
    }

    /// Validate a juridical person: private RUC, then public RUC.
    pub fn validate_is_juridical_person(&mut self, number: &str) -> Option<BillingCode> {
        self.run(Operation::IsJuridicalPerson, number)
    }

    /// Validate against every document type: final consumer, the RUCs,
    /// then cédula.
    pub fn validate_all_identifications(&mut self, number: &str) -> Option<BillingCode> {
        self.run(Operation::AllIdentifications, number)
    }

    /// Which document type `number` is, tried in the same order as
    /// [`validate_all_identifications`](Self::validate_all_identifications).
    ///
    /// Unlike the billing code, this tells the three RUC variants apart.
    pub fn identify(&mut self, number: &str) -> Option<IdentificationType> {
        self.first_match(Operation::AllIdentifications, number)
    }

    /// Run an operation.
    pub fn run(&mut self, operation: Operation, number: &str) -> Option<BillingCode> {
        self.first_match(operation, number).map(|kind| kind.billing_code())
    }

    /// Run an operation selected by key, e.g. `"natural_ruc"`.
    ///
    /// An unknown key records [`ValidationFailure::UnknownOperation`] and
    /// returns `None`.
    pub fn validate(&mut self, key: &str, number: &str) -> Option<BillingCode> {
        match key.parse::<Operation>() {
            Ok(operation) => self.run(operation, number),
            Err(failure) => {
                tracing::warn!(operation = key, "unknown identification operation");
                self.last_error = Some(failure);
                None
            }
        }
    }

    /// True if `number` passes the operation named `key`.
    pub fn passes(&mut self, key: &str, number: &str) -> bool {
        self.validate(key, number).is_some()
    }

    fn first_match(&mut self, operation: Operation, number: &str) -> Option<IdentificationType> {
        operation
            .candidates()
            .iter()
            .copied()
            .find(|&kind| self.check(kind, number).is_some())
    }

    fn check(&mut self, kind: IdentificationType, number: &str) -> Option<BillingCode> {
        self.last_error = None;
        match kind.validate(number, &self.config) {
            Ok(code) => {
                tracing::debug!(
                    identification = kind.key(),
                    len = number.len(),
                    code = code.code(),
                    "identification accepted"
                );
                Some(code)
            }
            Err(failure) => {
                tracing::debug!(
                    identification = kind.key(),
                    len = number.len(),
                    reason = failure.kind(),
                    "identification rejected"
                );
                self.last_error = Some(failure);
                None
            }
        }
    }
}
