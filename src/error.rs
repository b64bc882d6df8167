use thiserror::Error;

/// Errors that can occur while talking to the recipe provider
#[derive(Error, Debug)]
pub enum FinderError {
    /// Request could not be sent or the response could not be read
    #[error("Failed to reach recipe provider: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned {status}: {body}")]
    ProviderError {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Daily request quota of the provider is used up
    #[error("Provider quota exhausted, try again tomorrow")]
    QuotaExceeded,

    /// Response body did not match the expected shape
    #[error("Failed to parse provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No API key in configuration or environment
    #[error("API key not found, set SPOONACULAR_API_KEY or PANTRY__API_KEY")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Reading a local file failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Problems with what the user typed. These never reach the provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Ingredient name cannot be empty")]
    EmptyName,

    #[error("Amount must be at least 1")]
    ZeroAmount,

    #[error("'{0}' is not a known ingredient")]
    UnknownIngredient(String),

    #[error("Minimum {nutrient} must be less than maximum {nutrient}")]
    InvalidRange { nutrient: &'static str },

    #[error("{nutrient} must be between {floor} and {ceiling}")]
    OutOfBounds {
        nutrient: &'static str,
        floor: u32,
        ceiling: u32,
    },

    #[error("{0}")]
    BadCommand(String),
}
