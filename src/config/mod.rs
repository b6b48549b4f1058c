use crate::i18n::Locale;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Config file compiled into the bundle; the browser has no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../harvester_dash.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Harvester backend base URL. Empty means the page origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays on screen, in milliseconds.
    #[serde(default = "default_lifetime_ms")]
    pub lifetime_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Status/candidates poll interval in seconds. 0 disables polling.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_lifetime_ms() -> u64 {
    5000
}
fn default_poll_interval() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_lifetime_ms(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded config, then overlay build-time environment values.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml_str(EMBEDDED_CONFIG)?;
        config.apply_overrides(
            option_env!("HARVESTER_API_BASE"),
            option_env!("HARVESTER_LOG_LEVEL"),
        );
        Ok(config)
    }

    fn apply_overrides(&mut self, api_base: Option<&str>, log_level: Option<&str>) {
        if let Some(base) = api_base {
            self.api.base_url = base.to_string();
        }
        if let Some(level) = log_level {
            self.logging.level = level.to_string();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.notifications.lifetime_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "notifications.lifetime_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::Invalid {
                field: "logging.level",
                reason: format!("unknown level {:?}", self.logging.level),
            })
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notifications.lifetime_ms)
    }

    /// `None` when polling is disabled.
    pub fn poll_interval(&self) -> Option<Duration> {
        match self.refresh.poll_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = Config::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.notification_lifetime(), Duration::from_secs(5));
        assert_eq!(config.ui.locale, Locale::Ru);
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.notifications.lifetime_ms, 5000);
        assert_eq!(config.poll_interval(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:5000"

            [refresh]
            poll_interval_secs = 0

            [ui]
            locale = "en"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.poll_interval(), None);
        assert_eq!(config.ui.locale, Locale::En);
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_toml_str("[notifications]\nlifetime_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "notifications.lifetime_ms",
                ..
            }
        ));

        let err = Config::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "logging.level", .. }));

        let err = Config::from_toml_str("[ui]\nlocale = \"de\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some("http://harvester:5000"), None);
        assert_eq!(config.api.base_url, "http://harvester:5000");
        assert_eq!(config.logging.level, "info");
    }
}
