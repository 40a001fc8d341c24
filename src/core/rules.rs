//! Per-document-type rule sets and the generic evaluator that runs them.
//!
//! Each checked type is one [`IdentificationTypeSpec`] value. The
//! evaluator runs the checks in a fixed order and stops at the first
//! failure:
//!
//! 1. non-empty, digits only
//! 2. exact length
//! 3. province prefix in `01..=province_count`
//! 4. third digit
//! 5. fixed establishment suffix (RUCs only)
//! 6. check digit
//!
//! The final consumer is not a checked type: it is a literal comparison
//! against the configured sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::checksum::{ChecksumSpec, WeightedChecksum};
use super::config::IdentificationConfig;
use super::digits::{digit_at, has_exact_length, is_all_digits, parse_number, slice};
use super::error::ValidationFailure;

/// Result of running one document type's rules.
pub type ValidationOutcome = Result<BillingCode, ValidationFailure>;

/// SRI document-type code used when the number appears on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingCode {
    /// 04: RUC (any of the three variants).
    #[serde(rename = "04")]
    Ruc,
    /// 05: cédula.
    #[serde(rename = "05")]
    PersonalIdentification,
    /// 07: consumidor final.
    #[serde(rename = "07")]
    FinalConsumer,
}

impl BillingCode {
    /// Two-digit SRI code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ruc => "04",
            Self::PersonalIdentification => "05",
            Self::FinalConsumer => "07",
        }
    }

    /// Parse from the two-digit SRI code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "04" => Some(Self::Ruc),
            "05" => Some(Self::PersonalIdentification),
            "07" => Some(Self::FinalConsumer),
            _ => None,
        }
    }
}

impl fmt::Display for BillingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl PartialEq<&str> for BillingCode {
    fn eq(&self, other: &&str) -> bool {
        self.code() == *other
    }
}

/// Constraint on the third digit, which separates natural persons from companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdDigitPolicy {
    /// Inclusive range (natural persons: 0–5).
    Range {
        /// Lowest accepted digit.
        min: u32,
        /// Highest accepted digit.
        max: u32,
    },
    /// Exact value (private companies: 9, public companies: 6).
    Equals(u32),
}

impl ThirdDigitPolicy {
    /// True if `digit` satisfies the policy.
    pub fn accepts(&self, digit: u32) -> bool {
        match *self {
            Self::Range { min, max } => (min..=max).contains(&digit),
            Self::Equals(value) => digit == value,
        }
    }
}

impl fmt::Display for ThirdDigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { min, max } => write!(f, "between {min} and {max}"),
            Self::Equals(value) => write!(f, "equal to {value}"),
        }
    }
}

/// Structural rules for one checked document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentificationTypeSpec {
    /// The document type these rules describe.
    pub kind: IdentificationType,
    /// Exact digit count.
    pub length: usize,
    /// Third-digit constraint.
    pub third_digit: ThirdDigitPolicy,
    /// Literal establishment suffix at the end of the number.
    pub suffix: Option<&'static str>,
    /// Check-digit algorithm.
    pub checksum: ChecksumSpec,
    /// Code returned on success.
    pub billing_code: BillingCode,
}

const MOD10_WEIGHTS: WeightedChecksum = WeightedChecksum {
    coefficients: &[2, 1, 2, 1, 2, 1, 2, 1, 2],
    check_digit_position: 10,
    digit_window: 9,
};

/// Cédula de identidad.
pub const PERSONAL_IDENTIFICATION: IdentificationTypeSpec = IdentificationTypeSpec {
    kind: IdentificationType::PersonalIdentification,
    length: 10,
    third_digit: ThirdDigitPolicy::Range { min: 0, max: 5 },
    suffix: None,
    checksum: ChecksumSpec::Mod10(MOD10_WEIGHTS),
    billing_code: BillingCode::PersonalIdentification,
};

/// RUC of a natural person: the cédula followed by `001`.
pub const NATURAL_RUC: IdentificationTypeSpec = IdentificationTypeSpec {
    kind: IdentificationType::NaturalRuc,
    length: 13,
    third_digit: ThirdDigitPolicy::Range { min: 0, max: 5 },
    suffix: Some("001"),
    checksum: ChecksumSpec::Mod10(MOD10_WEIGHTS),
    billing_code: BillingCode::Ruc,
};

/// RUC of a private company or foreign entity.
pub const PRIVATE_RUC: IdentificationTypeSpec = IdentificationTypeSpec {
    kind: IdentificationType::PrivateRuc,
    length: 13,
    third_digit: ThirdDigitPolicy::Equals(9),
    suffix: Some("001"),
    checksum: ChecksumSpec::Mod11(WeightedChecksum {
        coefficients: &[4, 3, 2, 7, 6, 5, 4, 3, 2],
        check_digit_position: 10,
        digit_window: 9,
    }),
    billing_code: BillingCode::Ruc,
};

/// RUC of a public-sector entity.
pub const PUBLIC_RUC: IdentificationTypeSpec = IdentificationTypeSpec {
    kind: IdentificationType::PublicRuc,
    length: 13,
    third_digit: ThirdDigitPolicy::Equals(6),
    suffix: Some("0001"),
    checksum: ChecksumSpec::Mod11(WeightedChecksum {
        coefficients: &[3, 2, 7, 6, 5, 4, 3, 2],
        check_digit_position: 9,
        digit_window: 8,
    }),
    billing_code: BillingCode::Ruc,
};

const _: () = assert!(PERSONAL_IDENTIFICATION.is_consistent());
const _: () = assert!(NATURAL_RUC.is_consistent());
const _: () = assert!(PRIVATE_RUC.is_consistent());
const _: () = assert!(PUBLIC_RUC.is_consistent());

impl IdentificationTypeSpec {
    /// Length, suffix, window and check position fit together: the check
    /// digit directly follows the window and the suffix fills the rest.
    pub const fn is_consistent(&self) -> bool {
        let params = match &self.checksum {
            ChecksumSpec::Mod10(params) | ChecksumSpec::Mod11(params) => params,
        };
        let suffix_len = match self.suffix {
            Some(suffix) => suffix.len(),
            None => 0,
        };
        params.is_consistent() && params.check_digit_position + suffix_len == self.length
    }

    /// Run every check against `number`, stopping at the first failure.
    pub fn validate(&self, number: &str, province_count: u8) -> ValidationOutcome {
        if number.is_empty() {
            return self.reject(ValidationFailure::Empty);
        }
        if !is_all_digits(number) {
            return self.reject(ValidationFailure::NotNumeric);
        }
        if !has_exact_length(number, self.length) {
            return self.reject(ValidationFailure::WrongLength {
                expected: self.length,
            });
        }

        let province = slice(number, 0, 2).and_then(parse_number);
        if !province.is_some_and(|code| (1..=u32::from(province_count)).contains(&code)) {
            return self.reject(ValidationFailure::BadProvinceCode {
                max: province_count,
            });
        }

        if !digit_at(number, 2).is_some_and(|d| self.third_digit.accepts(d)) {
            return self.reject(ValidationFailure::BadThirdDigit {
                policy: self.third_digit,
            });
        }

        if let Some(suffix) = self.suffix {
            let tail = self
                .length
                .checked_sub(suffix.len())
                .and_then(|start| slice(number, start, suffix.len()));
            if tail != Some(suffix) {
                return self.reject(ValidationFailure::BadSuffix { expected: suffix });
            }
        }

        if !self.checksum.verify(number) {
            return self.reject(ValidationFailure::ChecksumMismatch);
        }

        Ok(self.billing_code)
    }

    fn reject(&self, failure: ValidationFailure) -> ValidationOutcome {
        tracing::trace!(
            identification = self.kind.key(),
            stage = failure.kind(),
            "identification rule failed"
        );
        Err(failure)
    }
}

/// The document types an Ecuadorian identification number can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentificationType {
    /// Cédula de identidad (10 digits).
    PersonalIdentification,
    /// RUC of a natural person (13 digits).
    NaturalRuc,
    /// RUC of a private company (13 digits).
    PrivateRuc,
    /// RUC of a public entity (13 digits).
    PublicRuc,
    /// Consumidor final sentinel.
    FinalConsumer,
}

impl IdentificationType {
    /// Every document type.
    pub const ALL: [Self; 5] = [
        Self::PersonalIdentification,
        Self::NaturalRuc,
        Self::PrivateRuc,
        Self::PublicRuc,
        Self::FinalConsumer,
    ];

    /// snake_case name used in logs and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PersonalIdentification => "personal_identification",
            Self::NaturalRuc => "natural_ruc",
            Self::PrivateRuc => "private_ruc",
            Self::PublicRuc => "public_ruc",
            Self::FinalConsumer => "final_consumer",
        }
    }

    /// Structural rules, or `None` for the final consumer.
    pub fn spec(&self) -> Option<&'static IdentificationTypeSpec> {
        match self {
            Self::PersonalIdentification => Some(&PERSONAL_IDENTIFICATION),
            Self::NaturalRuc => Some(&NATURAL_RUC),
            Self::PrivateRuc => Some(&PRIVATE_RUC),
            Self::PublicRuc => Some(&PUBLIC_RUC),
            Self::FinalConsumer => None,
        }
    }

    /// Code returned when a number validates as this type.
    pub fn billing_code(&self) -> BillingCode {
        match self.spec() {
            Some(spec) => spec.billing_code,
            None => BillingCode::FinalConsumer,
        }
    }

    /// Validate `number` as this document type.
    ///
    /// ```
    /// use identifica::core::{BillingCode, IdentificationConfig, IdentificationType};
    ///
    /// let config = IdentificationConfig::default();
    /// let code = IdentificationType::PersonalIdentification.validate("1710034065", &config);
    /// assert_eq!(code, Ok(BillingCode::PersonalIdentification));
    /// ```
    pub fn validate(&self, number: &str, config: &IdentificationConfig) -> ValidationOutcome {
        match self.spec() {
            Some(spec) => spec.validate(number, config.province_count()),
            None if number == config.final_consumer() => Ok(BillingCode::FinalConsumer),
            None => {
                tracing::trace!(
                    identification = self.key(),
                    "number is not the final consumer sentinel"
                );
                Err(ValidationFailure::ChecksumMismatch)
            }
        }
    }
}

impl fmt::Display for IdentificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
