use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "watchdog-config";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub polling: PollingConfig,
    pub services: ServicesConfig,
    /// Minimum level forwarded to the browser console.
    pub log_level: String,
}

/// REST backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL prepended to every endpoint path, without trailing slash.
    pub base_url: String,
}

/// Browser storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Prefix applied to every localStorage key owned by the app.
    pub prefix: String,
}

/// Background refetch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Refetch interval for the dashboard and service detail screens.
    pub refetch_interval_ms: u64,
}

/// Services list configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub page_limit: u32,
    /// Delay between the last keystroke and the search request.
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            polling: PollingConfig::default(),
            services: ServicesConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("WATCHDOG_API_BASE_URL")
                .unwrap_or("http://localhost:3000")
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefix: "watchdog_".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            refetch_interval_ms: 30_000,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            page_limit: 5,
            search_debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load configuration from the page's `#watchdog-config` block.
    /// Returns `Default` if the block is missing or unparseable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from #{CONFIG_ELEMENT_ID}");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse #{CONFIG_ELEMENT_ID}: {e}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::debug!("No #{CONFIG_ELEMENT_ID} block; using defaults");
                Self::default()
            }
        }
    }

    /// Resolved log level, `Info` when unrecognised.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Config from context, or defaults when rendered outside `App`.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.prefix, "watchdog_");
        assert_eq!(config.polling.refetch_interval_ms, 30_000);
        assert_eq!(config.services.page_limit, 5);
        assert_eq!(config.services.search_debounce_ms, 300);
        assert!(!config.api.base_url.ends_with('/'));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config =
            AppConfig::from_json(r#"{"api": {"base_url": "https://api.watchdog.dev/"}}"#).unwrap();
        assert_eq!(config.api.base_url, "https://api.watchdog.dev");
        assert_eq!(config.storage.prefix, "watchdog_");
        assert_eq!(config.services.page_limit, 5);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
