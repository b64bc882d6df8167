use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FinderError;

/// Main configuration structure
#[derive(Deserialize, Clone)]
pub struct FinderConfig {
    /// Spoonacular API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Shorter deadline for the search request, in seconds
    pub search_timeout: Option<u64>,
    /// How many recipes to fetch per search
    #[serde(default = "default_recipe_limit")]
    pub recipe_limit: u32,
    /// Optional list of allowed ingredient names, one per line
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            search_timeout: None,
            recipe_limit: default_recipe_limit(),
            vocabulary_path: None,
        }
    }
}

// The API key is a secret and must never reach the logs
impl fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("search_timeout", &self.search_timeout)
            .field("recipe_limit", &self.recipe_limit)
            .field("vocabulary_path", &self.vocabulary_path)
            .finish()
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

// The free tier allows 150 points a day; every recipe costs a search share
// plus one instructions call.
fn default_recipe_limit() -> u32 {
    2
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY__ prefix
    /// 2. pantry.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY__API_KEY, PANTRY__RECIPE_LIMIT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// API key from configuration, falling back to SPOONACULAR_API_KEY
    pub fn resolve_api_key(&self) -> Result<String, FinderError> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var("SPOONACULAR_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or(FinderError::MissingApiKey)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("pantry").required(false))
        // Use double underscore as separator: PANTRY__SEARCH_TIMEOUT
        .add_source(
            Environment::with_prefix("PANTRY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.base_url, "https://api.spoonacular.com");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.recipe_limit, 2);
        assert!(config.search_timeout.is_none());
        assert!(config.vocabulary_path.is_none());
    }

    #[test]
    fn test_durations() {
        let config = FinderConfig {
            search_timeout: Some(5),
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.search_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_configured_api_key_wins() {
        let config = FinderConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "from-config");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = FinderConfig {
            api_key: Some("SECRET-KEY-123".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", config);
        let pretty = format!("{:#?}", config);
        assert!(!printed.contains("SECRET-KEY-123"));
        assert!(!pretty.contains("SECRET-KEY-123"));
        assert!(printed.contains("***"));
        assert!(printed.contains("api.spoonacular.com"));
    }

    #[test]
    fn test_blank_keys_are_missing() {
        // Only unit test that touches SPOONACULAR_API_KEY
        let original_key = env::var("SPOONACULAR_API_KEY").ok();
        env::set_var("SPOONACULAR_API_KEY", "   ");

        let config = FinderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        let result = config.resolve_api_key();
        assert!(matches!(result, Err(FinderError::MissingApiKey)));

        env::set_var("SPOONACULAR_API_KEY", "env-key");
        assert_eq!(config.resolve_api_key().unwrap(), "env-key");

        match original_key {
            Some(key) => env::set_var("SPOONACULAR_API_KEY", key),
            None => env::remove_var("SPOONACULAR_API_KEY"),
        }
    }

    #[test]
    fn test_load_config_without_file() {
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("PANTRY__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // Every field has a default, so a bare environment still loads
        let config = load_config().unwrap();
        assert_eq!(config.recipe_limit, 2);
    }
}
