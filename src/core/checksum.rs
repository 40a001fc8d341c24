//! Weighted digit-sum check digits (modulo 10 and modulo 11).
//!
//! Both algorithms multiply the leading `digit_window` digits by a
//! coefficient sequence and derive the expected check digit from the sum:
//!
//! - **Mod10** (cédula, natural-person RUC): products of 10 or more are
//!   replaced by the sum of their two decimal digits before summing;
//!   expected digit is `0` when `sum % 10 == 0`, else `10 - sum % 10`.
//! - **Mod11** (company RUCs): plain products; expected digit is `0` when
//!   `sum % 11 == 0`, else `11 - sum % 11`. A result of `10` can never be
//!   carried by a single digit, so such numbers never validate.

use serde::Serialize;

use super::digits::digit_at;

/// Parameters of one weighted-sum check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedChecksum {
    /// Weight applied to each digit of the window, left to right.
    pub coefficients: &'static [u32],
    /// 1-based position of the check digit in the full number.
    pub check_digit_position: usize,
    /// How many leading digits participate in the sum.
    pub digit_window: usize,
}

impl WeightedChecksum {
    /// Window and coefficients agree, and the check digit follows the window.
    pub const fn is_consistent(&self) -> bool {
        self.coefficients.len() == self.digit_window
            && self.check_digit_position == self.digit_window + 1
    }

    fn weighted_sum(&self, number: &str, reduce_products: bool) -> Option<u32> {
        if self.coefficients.len() < self.digit_window {
            return None;
        }
        let mut total = 0;
        for (i, coefficient) in self.coefficients[..self.digit_window].iter().enumerate() {
            let mut product = digit_at(number, i)? * coefficient;
            if reduce_products && product >= 10 {
                product = product / 10 + product % 10;
            }
            total += product;
        }
        Some(total)
    }

    fn check_digit(&self, number: &str) -> Option<u32> {
        let index = self.check_digit_position.checked_sub(1)?;
        digit_at(number, index)
    }
}

/// Which check-digit algorithm a document type uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum ChecksumSpec {
    /// Modulo 10 with two-digit product reduction.
    Mod10(WeightedChecksum),
    /// Modulo 11.
    Mod11(WeightedChecksum),
}

impl ChecksumSpec {
    /// The weights and positions, regardless of algorithm.
    pub fn params(&self) -> &WeightedChecksum {
        match self {
            Self::Mod10(params) | Self::Mod11(params) => params,
        }
    }

    /// The check digit the algorithm expects for `number`.
    ///
    /// Returns `None` if the digit window is not fully present. For Mod11
    /// the result may be `10`, which no valid number can carry.
    pub fn expected_check_digit(&self, number: &str) -> Option<u32> {
        match self {
            Self::Mod10(params) => {
                let residue = params.weighted_sum(number, true)? % 10;
                Some(if residue == 0 { 0 } else { 10 - residue })
            }
            Self::Mod11(params) => {
                let residue = params.weighted_sum(number, false)? % 11;
                Some(if residue == 0 { 0 } else { 11 - residue })
            }
        }
    }

    /// True if the digit at the check position matches the expected digit.
    pub fn verify(&self, number: &str) -> bool {
        match (self.expected_check_digit(number), self.params().check_digit(number)) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Verify a Mod10 check digit.
pub fn mod10_verify(number: &str, params: &WeightedChecksum) -> bool {
    ChecksumSpec::Mod10(*params).verify(number)
}

/// Verify a Mod11 check digit.
pub fn mod11_verify(number: &str, params: &WeightedChecksum) -> bool {
    ChecksumSpec::Mod11(*params).verify(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEDULA: WeightedChecksum = WeightedChecksum {
        coefficients: &[2, 1, 2, 1, 2, 1, 2, 1, 2],
        check_digit_position: 10,
        digit_window: 9,
    };

    const PRIVATE: WeightedChecksum = WeightedChecksum {
        coefficients: &[4, 3, 2, 7, 6, 5, 4, 3, 2],
        check_digit_position: 10,
        digit_window: 9,
    };

    const PUBLIC: WeightedChecksum = WeightedChecksum {
        coefficients: &[3, 2, 7, 6, 5, 4, 3, 2],
        check_digit_position: 9,
        digit_window: 8,
    };

    #[test]
    fn mod10_known_cedula() {
        // 2+7+2+0+0+3+8+0+(12 -> 3) = 25, 10 - 5 = 5
        assert_eq!(ChecksumSpec::Mod10(CEDULA).expected_check_digit("1710034065"), Some(5));
        assert!(mod10_verify("1710034065", &CEDULA));
        assert!(mod10_verify("0134567890", &CEDULA));
    }

    #[test]
    fn mod10_wrong_digit() {
        assert!(!mod10_verify("0154567890", &CEDULA));
        assert!(!mod10_verify("1710034064", &CEDULA));
    }

    #[test]
    fn mod10_zero_residue_expects_zero() {
        // 0,1,6,4,(10->1),6,(14->5),8,(18->9) = 40
        assert_eq!(ChecksumSpec::Mod10(CEDULA).expected_check_digit("013456789"), Some(0));
    }

    #[test]
    fn mod11_private_ruc() {
        // 4+21+18+0+0+5+4+18+14 = 84, 84 % 11 = 7, 11 - 7 = 4
        assert_eq!(
            ChecksumSpec::Mod11(PRIVATE).expected_check_digit("1790011674001"),
            Some(4)
        );
        assert!(mod11_verify("1790011674001", &PRIVATE));
        assert!(!mod11_verify("1790011274001", &PRIVATE));
    }

    #[test]
    fn mod11_public_ruc() {
        // 3+14+42+0+0+0+3+10 = 72, 72 % 11 = 6, 11 - 6 = 5
        assert!(mod11_verify("1760001550001", &PUBLIC));
        assert!(!mod11_verify("1760001520001", &PUBLIC));
    }

    #[test]
    fn mod11_ten_never_matches() {
        // 1*3 + 6*7 = 45, 45 % 11 = 1 -> expected 10
        let spec = ChecksumSpec::Mod11(PUBLIC);
        assert_eq!(spec.expected_check_digit("10600000"), Some(10));
        for d in 0..=9 {
            let number = format!("10600000{d}0001");
            assert!(!spec.verify(&number));
        }
    }

    #[test]
    fn short_input_fails_closed() {
        assert_eq!(ChecksumSpec::Mod10(CEDULA).expected_check_digit("17100"), None);
        assert!(!mod10_verify("171003406", &CEDULA));
        assert!(!mod11_verify("", &PRIVATE));
    }

    #[test]
    fn non_digit_fails_closed() {
        assert!(!mod10_verify("17100340X5", &CEDULA));
    }

    #[test]
    fn consistency() {
        assert!(CEDULA.is_consistent());
        assert!(PRIVATE.is_consistent());
        assert!(PUBLIC.is_consistent());
        let broken = WeightedChecksum {
            coefficients: &[2, 1],
            check_digit_position: 10,
            digit_window: 9,
        };
        assert!(!broken.is_consistent());
        assert!(!ChecksumSpec::Mod10(broken).verify("1710034065"));
    }
}
