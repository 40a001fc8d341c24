use serde::Serialize;
use thiserror::Error;

use super::rules::ThirdDigitPolicy;

/// Errors that can occur outside of number validation itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentificaError {
    /// Configuration values are out of range or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A JSON configuration document could not be parsed.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Why a number was rejected for one document type.
///
/// Each variant carries the expected value so the message can be rebuilt
/// from the variant alone. None of these are fatal: a composite check
/// moves on to the next document type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// The input is empty.
    #[error("Field must have a value.")]
    Empty,

    /// The input contains something other than ASCII digits.
    #[error("Field must be digits.")]
    NotNumeric,

    /// The input does not have the exact length of the document type.
    #[error("Field must be {expected} digits.")]
    WrongLength {
        /// Required digit count.
        expected: usize,
    },

    /// The two-digit province prefix is outside `01..=max`.
    #[error("In your province code must be between 01 and {max}.")]
    BadProvinceCode {
        /// Highest accepted province code.
        max: u8,
    },

    /// The third digit does not match the document type.
    #[error("Field must have the third digit {policy}.")]
    BadThirdDigit {
        /// The rule the third digit failed.
        policy: ThirdDigitPolicy,
    },

    /// The fixed establishment suffix is missing.
    #[error("Field does not have the last digits equal to {expected}.")]
    BadSuffix {
        /// The literal suffix the document type requires.
        expected: &'static str,
    },

    /// The check digit does not match, or the number is not the final-consumer sentinel.
    #[error("The identification number is invalid.")]
    ChecksumMismatch,

    /// A dispatch key that names no operation.
    #[error("Operation {key} does not exist.")]
    UnknownOperation {
        /// The key as given by the caller.
        key: String,
    },
}

impl ValidationFailure {
    /// Stable snake_case name of the failure kind, for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotNumeric => "not_numeric",
            Self::WrongLength { .. } => "wrong_length",
            Self::BadProvinceCode { .. } => "bad_province_code",
            Self::BadThirdDigit { .. } => "bad_third_digit",
            Self::BadSuffix { .. } => "bad_suffix",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::UnknownOperation { .. } => "unknown_operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_embeds_expected() {
        let err = ValidationFailure::WrongLength { expected: 13 };
        assert_eq!(err.to_string(), "Field must be 13 digits.");
    }

    #[test]
    fn province_message_embeds_bound() {
        let err = ValidationFailure::BadProvinceCode { max: 24 };
        assert_eq!(
            err.to_string(),
            "In your province code must be between 01 and 24."
        );
    }

    #[test]
    fn third_digit_messages() {
        let range = ValidationFailure::BadThirdDigit {
            policy: ThirdDigitPolicy::Range { min: 0, max: 5 },
        };
        assert_eq!(
            range.to_string(),
            "Field must have the third digit between 0 and 5."
        );

        let equals = ValidationFailure::BadThirdDigit {
            policy: ThirdDigitPolicy::Equals(9),
        };
        assert_eq!(
            equals.to_string(),
            "Field must have the third digit equal to 9."
        );
    }

    #[test]
    fn kinds_are_snake_case() {
        assert_eq!(ValidationFailure::Empty.kind(), "empty");
        assert_eq!(
            ValidationFailure::BadSuffix { expected: "001" }.kind(),
            "bad_suffix"
        );
        assert_eq!(
            ValidationFailure::UnknownOperation { key: "x".into() }.kind(),
            "unknown_operation"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ValidationFailure::WrongLength { expected: 10 }).unwrap();
        assert_eq!(json["kind"], "wrong_length");
        assert_eq!(json["expected"], 10);
    }

    #[test]
    fn config_error_display() {
        let err = IdentificaError::Config("province_count must be between 1 and 99".into());
        assert_eq!(
            err.to_string(),
            "configuration error: province_count must be between 1 and 99"
        );
    }
}
