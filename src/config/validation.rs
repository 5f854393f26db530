//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Hard ceiling for `limits.max_frame_len`.
const MAX_FRAME_LEN_CEILING: usize = 16 * 1024 * 1024;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.name must not be empty")]
    MissingServerName,
    #[error("limits.max_frame_len must be between 1 and 16777216, got {0}")]
    InvalidMaxFrameLen(usize),
    #[error("limits.sendq_capacity must be at least 1")]
    ZeroSendQueue,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.trim().is_empty() {
        errors.push(ValidationError::MissingServerName);
    }

    let max = config.limits.max_frame_len;
    if max == 0 || max > MAX_FRAME_LEN_CEILING {
        errors.push(ValidationError::InvalidMaxFrameLen(max));
    }

    if config.limits.sendq_capacity == 0 {
        errors.push(ValidationError::ZeroSendQueue);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let config: Config = toml::from_str(
            r#"
[server]
name = "  "

[limits]
max_frame_len = 0
sendq_capacity = 0
"#,
        )
        .unwrap();

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingServerName,
                ValidationError::InvalidMaxFrameLen(0),
                ValidationError::ZeroSendQueue,
            ]
        );
    }

    #[test]
    fn rejects_huge_frames() {
        let mut config = Config::default();
        config.limits.max_frame_len = MAX_FRAME_LEN_CEILING + 1;
        assert_eq!(
            validate(&config).unwrap_err(),
            vec![ValidationError::InvalidMaxFrameLen(MAX_FRAME_LEN_CEILING + 1)]
        );
    }
}
