//! Process-wide constants that vary by deployment: the number of
//! provinces and the final-consumer sentinel.

use serde::{Deserialize, Serialize};

use super::digits::is_all_digits;
use super::error::IdentificaError;

/// Provinces of Ecuador that issue identification numbers.
pub const DEFAULT_PROVINCE_COUNT: u8 = 24;

/// The SRI "consumidor final" identification.
pub const DEFAULT_FINAL_CONSUMER: &str = "9999999999999";

/// Digit count of the final-consumer sentinel (same as a RUC).
pub const FINAL_CONSUMER_LENGTH: usize = 13;

/// Validation settings passed to the dispatcher at construction.
///
/// Fields are private so every instance has passed
/// [`validate`](Self::validate): build one through
/// [`IdentificationConfigBuilder`], [`Default`] or deserialization, all of
/// which run the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIdentificationConfig")]
pub struct IdentificationConfig {
    province_count: u8,
    final_consumer: String,
}

impl Default for IdentificationConfig {
    fn default() -> Self {
        Self {
            province_count: DEFAULT_PROVINCE_COUNT,
            final_consumer: DEFAULT_FINAL_CONSUMER.into(),
        }
    }
}

/// Unchecked wire form; missing fields take their defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawIdentificationConfig {
    province_count: u8,
    final_consumer: String,
}

impl Default for RawIdentificationConfig {
    fn default() -> Self {
        let IdentificationConfig {
            province_count,
            final_consumer,
        } = IdentificationConfig::default();
        Self {
            province_count,
            final_consumer,
        }
    }
}

impl TryFrom<RawIdentificationConfig> for IdentificationConfig {
    type Error = IdentificaError;

    fn try_from(raw: RawIdentificationConfig) -> Result<Self, Self::Error> {
        let config = Self {
            province_count: raw.province_count,
            final_consumer: raw.final_consumer,
        };
        config.validate()?;
        Ok(config)
    }
}

impl IdentificationConfig {
    /// Highest accepted two-digit province prefix (`01..=province_count`).
    pub fn province_count(&self) -> u8 {
        self.province_count
    }

    /// The literal number that identifies an anonymous buyer.
    pub fn final_consumer(&self) -> &str {
        &self.final_consumer
    }

    /// Check that the values can be used by the rules.
    pub fn validate(&self) -> Result<(), IdentificaError> {
        if !(1..=99).contains(&self.province_count) {
            return Err(IdentificaError::Config(format!(
                "province_count must be between 1 and 99, got {}",
                self.province_count
            )));
        }
        if self.final_consumer.len() != FINAL_CONSUMER_LENGTH
            || !is_all_digits(&self.final_consumer)
        {
            return Err(IdentificaError::Config(format!(
                "final_consumer must be {FINAL_CONSUMER_LENGTH} digits, got '{}'",
                self.final_consumer
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// ```
    /// use identifica::core::IdentificationConfig;
    ///
    /// let config = IdentificationConfig::from_json(r#"{ "province_count": 30 }"#).unwrap();
    /// assert_eq!(config.province_count(), 30);
    /// assert_eq!(config.final_consumer(), "9999999999999");
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, IdentificaError> {
        let raw: RawIdentificationConfig =
            serde_json::from_str(json).map_err(|e| IdentificaError::Json(e.to_string()))?;
        let config = Self::try_from(raw)?;
        tracing::debug!(
            province_count = config.province_count,
            "loaded identification config from JSON"
        );
        Ok(config)
    }
}

/// Builder for [`IdentificationConfig`].
///
/// # Example
///
/// ```
/// use identifica::core::IdentificationConfigBuilder;
///
/// let config = IdentificationConfigBuilder::new()
///     .province_count(30)
///     .build()
///     .unwrap();
/// assert_eq!(config.province_count(), 30);
/// ```
#[derive(Debug, Default)]
pub struct IdentificationConfigBuilder {
    config: IdentificationConfig,
}

impl IdentificationConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of provinces.
    pub fn province_count(mut self, count: u8) -> Self {
        self.config.province_count = count;
        self
    }

    /// Set the final-consumer sentinel (13 digits).
    pub fn final_consumer(mut self, value: impl Into<String>) -> Self {
        self.config.final_consumer = value.into();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<IdentificationConfig, IdentificaError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
