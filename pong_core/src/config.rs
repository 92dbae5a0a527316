use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;
use crate::Side;

/// Game rules: arena, paddle and ball geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fixed left-edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Opponent => self.paddle_margin,
            Side::Agent => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle Y (top edge) to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }
}

/// Reward shaping coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Added when the ball bounces off the agent paddle
    pub hit_bonus: f32,
    /// Replaces the tick reward when the agent scores
    pub win: f32,
    /// Replaces the tick reward when the opponent scores
    pub loss: f32,
    pub survival_bonus: f32,
    /// Scales normalized vertical distance between agent paddle and ball
    pub alignment_weight: f32,
    /// Subtracted whenever the action is not hold
    pub move_cost: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            hit_bonus: Params::REWARD_HIT,
            win: Params::REWARD_WIN,
            loss: Params::REWARD_LOSS,
            survival_bonus: Params::REWARD_SURVIVAL,
            alignment_weight: Params::REWARD_ALIGNMENT,
            move_cost: Params::REWARD_MOVE_COST,
        }
    }
}

/// Cosmetic switches. Never change simulation outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvOptions {
    pub render_enabled: bool,
    pub sound_enabled: bool,
}

/// Top-level kernel configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub options: EnvOptions,
    pub rules: Config,
    pub reward: RewardConfig,
}

impl EnvConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EnvConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.rules;
        let positive = [
            ("rules.arena_width", rules.arena_width),
            ("rules.arena_height", rules.arena_height),
            ("rules.paddle_width", rules.paddle_width),
            ("rules.paddle_height", rules.paddle_height),
            ("rules.paddle_speed", rules.paddle_speed),
            ("rules.ball_size", rules.ball_size),
            ("rules.ball_speed", rules.ball_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }
        if rules.paddle_margin.is_nan() || rules.paddle_margin < 0.0 {
            return Err(ConfigError::Validation(
                "rules.paddle_margin must be >= 0".into(),
            ));
        }
        if rules.paddle_height > rules.arena_height {
            return Err(ConfigError::Validation(
                "rules.paddle_height must be <= rules.arena_height".into(),
            ));
        }
        if rules.ball_size >= rules.arena_height || rules.ball_size >= rules.arena_width {
            return Err(ConfigError::Validation(
                "rules.ball_size must be smaller than the arena".into(),
            ));
        }
        if 2.0 * (rules.paddle_margin + rules.paddle_width) >= rules.arena_width {
            return Err(ConfigError::Validation(
                "paddles must fit inside rules.arena_width".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Opponent), 10.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Agent), 780.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_y() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 250.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-4.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(123.0), 123.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EnvConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let mut config = EnvConfig::default();
        config.rules.paddle_height = 700.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_zero_speed() {
        let mut config = EnvConfig::default();
        config.rules.ball_speed = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: rules.ball_speed must be > 0"
        );
    }

    #[test]
    fn test_validate_rejects_nan_margin() {
        let mut config = EnvConfig::default();
        config.rules.paddle_margin = f32::NAN;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: rules.paddle_margin must be >= 0"
        );

        config.rules.paddle_margin = -1.0;
        assert!(config.validate().is_err());
        config.rules.paddle_margin = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[options]\nrender_enabled = true\n\n[reward]\nhit_bonus = 0.5\n"
        )
        .unwrap();

        let config = EnvConfig::load(file.path()).unwrap();
        assert!(config.options.render_enabled);
        assert!(!config.options.sound_enabled);
        assert_eq!(config.reward.hit_bonus, 0.5);
        assert_eq!(config.reward.win, Params::REWARD_WIN);
        assert_eq!(config.rules, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules\narena_width = ").unwrap();
        let err = EnvConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnvConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, EnvConfig::default());
    }
}
