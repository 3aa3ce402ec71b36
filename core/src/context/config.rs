//! Parsing and validation of host-supplied config payloads.

use runecraft_types::{MIN_STAT_TIMEOUT_MINUTES, RunecraftConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse runecraft config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("stat_timeout must be at least {min} minute(s), got {got}")]
    TimeoutOutOfRange { got: i32, min: i32 },
}

/// Parse a TOML payload. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<RunecraftConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Strict check for config editors. The runtime clamps instead of failing.
pub fn validate_config(config: &RunecraftConfig) -> Result<(), ConfigError> {
    if config.stat_timeout < MIN_STAT_TIMEOUT_MINUTES {
        return Err(ConfigError::TimeoutOutOfRange {
            got: config.stat_timeout,
            min: MIN_STAT_TIMEOUT_MINUTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_toml() {
        let toml = r#"
show_chipping_state = false
stat_timeout = 10
show_blood = false
"#;

        let config = parse_config(toml).unwrap();
        assert!(!config.show_chipping_state);
        assert_eq!(config.stat_timeout, 10);
        assert!(!config.show_blood);
        assert!(config.show_air);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("stat_timeout = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = parse_config("stat_timeout = 0").unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::TimeoutOutOfRange { got: 0, min: 1 }));
        // The runtime view clamps
        assert_eq!(config.stat_timeout_minutes(), 1);
    }
}
