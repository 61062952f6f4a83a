//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard REST backend configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Analytics window and cache configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// REST backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the versioned API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Analytics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Trailing window used for the daily burn rate.
    #[serde(default = "default_burn_window_days")]
    pub burn_window_days: u32,
    /// Window in which a category counts as recently modified.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
    /// Look-ahead window for upcoming milestones.
    #[serde(default = "default_milestone_horizon_days")]
    pub milestone_horizon_days: u32,
    /// Maximum number of cached analytics results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live of cached analytics results in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            burn_window_days: default_burn_window_days(),
            recent_window_days: default_recent_window_days(),
            milestone_horizon_days: default_milestone_horizon_days(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_burn_window_days() -> u32 {
    30
}

fn default_recent_window_days() -> u32 {
    7
}

fn default_milestone_horizon_days() -> u32 {
    30
}

fn default_cache_capacity() -> u64 {
    64
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when formatting amounts.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Czk
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FILMFLOW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            ["FILMFLOW__API__BASE_URL", "FILMFLOW__API__TIMEOUT_SECS"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
                assert_eq!(config.api.timeout_secs, 15);
                assert_eq!(config.analytics.burn_window_days, 30);
                assert_eq!(config.analytics.recent_window_days, 7);
                assert_eq!(config.analytics.milestone_horizon_days, 30);
                assert_eq!(config.display.currency, Currency::Czk);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("FILMFLOW__API__BASE_URL", Some("https://studio.example/api/v1")),
                ("FILMFLOW__API__TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.api.base_url, "https://studio.example/api/v1");
                assert_eq!(config.api.timeout_secs, 5);
                // untouched sections keep their defaults
                assert_eq!(config.analytics.burn_window_days, 30);
            },
        );
    }
}
