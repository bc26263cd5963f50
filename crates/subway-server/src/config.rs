//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default maximum length of station and line names.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// Default maximum length of a line color (e.g. `bg-red-600`).
pub const DEFAULT_MAX_COLOR_LENGTH: usize = 50;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub seed: SeedConfig,
    pub limits: LimitsConfig,
}

/// Network seed file to import at startup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    pub file: Option<PathBuf>,
}

/// Input length limits applied by commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_name_length: usize,
    pub max_color_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_color_length: DEFAULT_MAX_COLOR_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from `.env`, the environment, and defaults
    ///
    /// - `SUBWAY_SEED_FILE`: network description to import
    /// - `SUBWAY_MAX_NAME_LENGTH`
    /// - `SUBWAY_MAX_COLOR_LENGTH`
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            seed: SeedConfig {
                file: std::env::var("SUBWAY_SEED_FILE")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
            },
            limits: LimitsConfig {
                max_name_length: std::env::var("SUBWAY_MAX_NAME_LENGTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_MAX_NAME_LENGTH),
                max_color_length: std::env::var("SUBWAY_MAX_COLOR_LENGTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_MAX_COLOR_LENGTH),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.limits.max_name_length == 0 {
            anyhow::bail!("Maximum name length must be greater than 0");
        }

        if self.limits.max_color_length == 0 {
            anyhow::bail!("Maximum color length must be greater than 0");
        }

        if let Some(ref file) = self.seed.file {
            if !file.exists() {
                tracing::warn!(path = %file.display(), "Seed file does not exist");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SUBWAY_SEED_FILE");
        std::env::remove_var("SUBWAY_MAX_NAME_LENGTH");
        std::env::remove_var("SUBWAY_MAX_COLOR_LENGTH");
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = Config::load().unwrap();
        assert!(config.seed.file.is_none());
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        std::env::set_var("SUBWAY_SEED_FILE", "network.json");
        std::env::set_var("SUBWAY_MAX_NAME_LENGTH", "20");

        let config = Config::load().unwrap();
        assert_eq!(config.seed.file, Some(PathBuf::from("network.json")));
        assert_eq!(config.limits.max_name_length, 20);
        assert_eq!(config.limits.max_color_length, DEFAULT_MAX_COLOR_LENGTH);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_zero_limit() {
        clear_env();
        std::env::set_var("SUBWAY_MAX_COLOR_LENGTH", "0");

        assert!(Config::load().is_err());

        clear_env();
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.limits.max_name_length, DEFAULT_MAX_NAME_LENGTH);
        assert!(config.validate().is_ok());
    }
}
