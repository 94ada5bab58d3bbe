//! Tuning-file loading and validation
//!
//! Game configs are plain serde structs with per-field defaults. A config
//! is checked once when a game is built; nonsensical values (zero health,
//! negative speeds) are rejected there instead of surfacing mid-run.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a game config was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("`{field}` is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Validation every game config implements
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Reject zero, negative and NaN values
pub fn require_positive<T: Into<f64> + Copy>(field: &'static str, value: T) -> Result<(), ConfigError> {
    let v: f64 = value.into();
    if v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value: v })
    }
}

/// Reject negative and NaN values (zero allowed)
pub fn require_non_negative<T: Into<f64> + Copy>(
    field: &'static str,
    value: T,
) -> Result<(), ConfigError> {
    let v: f64 = value.into();
    if v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative (got {v})"),
        })
    }
}

/// Parse a JSON tuning file and validate it
pub fn from_json<T: DeserializeOwned + Validate>(json: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("speed", 3.0f32).is_ok());
        assert!(matches!(
            require_positive("speed", 0.0f32),
            Err(ConfigError::NonPositive { field: "speed", .. })
        ));
        assert!(require_positive("hp", -1i32).is_err());
        assert!(require_positive("speed", f32::NAN).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("gold", 0u32).is_ok());
        assert!(require_non_negative("gold", -5i32).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = require_positive("player_speed", -2.0f32).unwrap_err();
        assert_eq!(err.to_string(), "`player_speed` must be positive (got -2)");
    }
}
