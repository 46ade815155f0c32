//! Environment configuration with validation

use competition_fees::{PlatformDefaults, BASIS_POINTS_DIVISOR};
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};

/// Fee service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeServiceConfig {
    /// Platform-wide fee rates
    pub platform_defaults: PlatformDefaults,

    pub log_level: String,
}

impl Default for FeeServiceConfig {
    fn default() -> Self {
        Self {
            platform_defaults: PlatformDefaults::STANDARD,
            log_level: "info".to_string(),
        }
    }
}

impl FeeServiceConfig {
    /// Load configuration from the environment, reading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let standard = PlatformDefaults::STANDARD;

        let config = FeeServiceConfig {
            platform_defaults: PlatformDefaults {
                platform_percentage_basis_points: parse_or(
                    &lookup,
                    "PLATFORM_FEE_BPS",
                    standard.platform_percentage_basis_points,
                )?,
                platform_fixed_cents: parse_or(
                    &lookup,
                    "PLATFORM_FEE_FIXED_CENTS",
                    standard.platform_fixed_cents,
                )?,
                stripe_percentage_basis_points: parse_or(
                    &lookup,
                    "STRIPE_FEE_BPS",
                    standard.stripe_percentage_basis_points,
                )?,
                stripe_fixed_cents: parse_or(&lookup, "STRIPE_FEE_FIXED_CENTS", standard.stripe_fixed_cents)?,
            },
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.platform_defaults;

        if defaults.platform_percentage_basis_points > BASIS_POINTS_DIVISOR {
            return Err(ConfigError::InvalidConfig(
                "platform fee must not exceed 10000 bp".to_string(),
            ));
        }

        // Fee-on-fee gross up divides by (1 - rate)
        if defaults.stripe_percentage_basis_points >= BASIS_POINTS_DIVISOR {
            return Err(ConfigError::InvalidConfig(
                "processor fee must be below 10000 bp".to_string(),
            ));
        }

        if defaults.platform_fixed_cents < 0 || defaults.stripe_fixed_cents < 0 {
            return Err(ConfigError::InvalidConfig(
                "fixed fees must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Example .env contents
pub fn create_env_example() -> String {
    r#"# Platform fee (basis points / cents)
PLATFORM_FEE_BPS=250
PLATFORM_FEE_FIXED_CENTS=200

# Card processor fee (basis points / cents)
STRIPE_FEE_BPS=290
STRIPE_FEE_FIXED_CENTS=30

LOG_LEVEL=info
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = FeeServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, FeeServiceConfig::default());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = FeeServiceConfig::from_lookup(lookup_from(&[
            ("PLATFORM_FEE_BPS", "400"),
            ("PLATFORM_FEE_FIXED_CENTS", " 400 "),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.platform_defaults.platform_percentage_basis_points, 400);
        assert_eq!(config.platform_defaults.platform_fixed_cents, 400);
        assert_eq!(config.platform_defaults.stripe_percentage_basis_points, 290);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_value() {
        let err = FeeServiceConfig::from_lookup(lookup_from(&[("STRIPE_FEE_BPS", "2.9%")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "STRIPE_FEE_BPS"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = FeeServiceConfig::default();
        assert!(config.validate().is_ok());

        config.platform_defaults.stripe_percentage_basis_points = 10_000;
        assert!(config.validate().is_err());

        config.platform_defaults.stripe_percentage_basis_points = 290;
        config.platform_defaults.platform_fixed_cents = -5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_example_parses() {
        let pairs: Vec<(String, String)> = create_env_example()
            .lines()
            .filter(|l| !l.starts_with('#') && l.contains('='))
            .filter_map(|l| l.split_once('=').map(|(k, v)| (k.to_string(), v.to_string())))
            .collect();
        let config = FeeServiceConfig::from_lookup(|key| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap();
        assert_eq!(config, FeeServiceConfig::default());
    }
}
