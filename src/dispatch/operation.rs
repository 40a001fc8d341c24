//! Named validation operations and the order in which they try document types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{
    IdentificationType::{
        self, FinalConsumer, NaturalRuc, PersonalIdentification, PrivateRuc, PublicRuc,
    },
    ValidationFailure,
};

/// A validation a caller can request by key, e.g. from a form rule
/// such as `ecuador:natural_ruc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// The final-consumer sentinel only.
    FinalConsumer,
    /// Cédula only.
    PersonalIdentification,
    /// Natural-person RUC only.
    NaturalRuc,
    /// Private-company RUC only.
    PrivateRuc,
    /// Public-entity RUC only.
    PublicRuc,
    /// Any RUC variant.
    Ruc,
    /// Cédula or natural-person RUC.
    IsNaturalPerson,
    /// Private or public company RUC.
    IsJuridicalPerson,
    /// Any document type, including the final consumer.
    AllIdentifications,
}

impl Operation {
    /// Every operation.
    pub const ALL: [Self; 9] = [
        Self::FinalConsumer,
        Self::PersonalIdentification,
        Self::NaturalRuc,
        Self::PrivateRuc,
        Self::PublicRuc,
        Self::Ruc,
        Self::IsNaturalPerson,
        Self::IsJuridicalPerson,
        Self::AllIdentifications,
    ];

    /// Lookup key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FinalConsumer => "final_consumer",
            Self::PersonalIdentification => "personal_identification",
            Self::NaturalRuc => "natural_ruc",
            Self::PrivateRuc => "private_ruc",
            Self::PublicRuc => "public_ruc",
            Self::Ruc => "ruc",
            Self::IsNaturalPerson => "is_natural_person",
            Self::IsJuridicalPerson => "is_juridical_person",
            Self::AllIdentifications => "all_identifications",
        }
    }

    /// Parse a lookup key. `final_customer` is accepted as an alias.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "final_consumer" | "final_customer" => Some(Self::FinalConsumer),
            "personal_identification" => Some(Self::PersonalIdentification),
            "natural_ruc" => Some(Self::NaturalRuc),
            "private_ruc" => Some(Self::PrivateRuc),
            "public_ruc" => Some(Self::PublicRuc),
            "ruc" => Some(Self::Ruc),
            "is_natural_person" => Some(Self::IsNaturalPerson),
            "is_juridical_person" => Some(Self::IsJuridicalPerson),
            "all_identifications" => Some(Self::AllIdentifications),
            _ => None,
        }
    }

    /// Document types tried, in order; the first that validates wins.
    ///
    /// Company RUCs come before the natural-person RUC because their third
    /// digit rejects most numbers before any checksum is computed. The
    /// final consumer leads [`Operation::AllIdentifications`] since it is a
    /// single string comparison.
    pub fn candidates(&self) -> &'static [IdentificationType] {
        match self {
            Self::FinalConsumer => &[FinalConsumer],
            Self::PersonalIdentification => &[PersonalIdentification],
            Self::NaturalRuc => &[NaturalRuc],
            Self::PrivateRuc => &[PrivateRuc],
            Self::PublicRuc => &[PublicRuc],
            Self::Ruc => &[PrivateRuc, PublicRuc, NaturalRuc],
            Self::IsNaturalPerson => &[PersonalIdentification, NaturalRuc],
            Self::IsJuridicalPerson => &[PrivateRuc, PublicRuc],
            Self::AllIdentifications => &[
                FinalConsumer,
                PrivateRuc,
                PublicRuc,
                NaturalRuc,
                PersonalIdentification,
            ],
        }
    }
}

impl FromStr for Operation {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ValidationFailure::UnknownOperation { key: s.into() })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_key(op.key()), Some(op));
        }
    }

    #[test]
    fn final_customer_alias() {
        assert_eq!(
            Operation::from_key("final_customer"),
            Some(Operation::FinalConsumer)
        );
    }

    #[test]
    fn unknown_key() {
        let err = "passport".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            ValidationFailure::UnknownOperation {
                key: "passport".into()
            }
        );
        assert_eq!(err.to_string(), "Operation passport does not exist.");
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(Operation::from_key("RUC"), None);
    }

    #[test]
    fn ruc_order() {
        assert_eq!(
            Operation::Ruc.candidates(),
            &[PrivateRuc, PublicRuc, NaturalRuc]
        );
    }

    #[test]
    fn all_identifications_order() {
        let order = Operation::AllIdentifications.candidates();
        assert_eq!(order.first(), Some(&FinalConsumer));
        assert_eq!(order.last(), Some(&PersonalIdentification));
        assert_eq!(order.len(), IdentificationType::ALL.len());
    }

    #[test]
    fn single_type_operations_have_one_candidate() {
        for op in [
            Operation::FinalConsumer,
            Operation::PersonalIdentification,
            Operation::NaturalRuc,
            Operation::PrivateRuc,
            Operation::PublicRuc,
        ] {
            assert_eq!(op.candidates().len(), 1);
            assert_eq!(op.candidates()[0].key(), op.key());
        }
    }
}
