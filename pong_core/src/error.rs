use std::path::PathBuf;

/// Errors raised by the kernel's mutating entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("invalid action {0} (expected 0 = hold, 1 = up, 2 = down)")]
    InvalidAction(i64),
}

/// A caller fed back a vector that is not an observation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObservationError {
    #[error("observation has {actual} components, expected {expected}")]
    Shape { expected: usize, actual: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_display() {
        let err = EnvError::InvalidAction(7);
        assert_eq!(
            err.to_string(),
            "invalid action 7 (expected 0 = hold, 1 = up, 2 = down)"
        );
    }

    #[test]
    fn test_observation_shape_display() {
        let err = ObservationError::Shape {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "observation has 4 components, expected 5");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rules.paddle_speed must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rules.paddle_speed must be > 0"
        );
    }
}
