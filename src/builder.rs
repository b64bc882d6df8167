use std::path::PathBuf;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::providers::{RecipeProvider, SpoonacularProvider};
use crate::service::RecipeQueryService;
use crate::session::Session;
use crate::vocabulary::IngredientVocabulary;
use crate::FinderError;

/// Builder for configuring a recipe finder session
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    search_timeout: Option<Duration>,
    recipe_limit: Option<u32>,
    vocabulary_path: Option<PathBuf>,
    provider: Option<Box<dyn RecipeProvider>>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration; explicit setters still win
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the API key directly instead of relying on environment variables
    /// or config files.
    ///
    /// # Example
    /// ```
    /// use pantry_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point at a different API host (proxies, test servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for every HTTP request
    ///
    /// # Example
    /// ```
    /// use pantry_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Shorter deadline for the search request only
    pub fn search_timeout(mut self, duration: Duration) -> Self {
        self.search_timeout = Some(duration);
        self
    }

    /// Default number of recipes per search
    pub fn recipe_limit(mut self, limit: u32) -> Self {
        self.recipe_limit = Some(limit);
        self
    }

    /// Only accept ingredient names listed in this file
    pub fn vocabulary(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = Some(path.into());
        self
    }

    /// Use a custom provider instead of Spoonacular
    pub fn provider(mut self, provider: Box<dyn RecipeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    fn merged_config(&mut self) -> FinderConfig {
        let mut config = self.config.take().unwrap_or_default();
        if let Some(key) = self.api_key.take() {
            config.api_key = Some(key);
        }
        if let Some(url) = self.base_url.take() {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }
        if let Some(deadline) = self.search_timeout {
            config.search_timeout = Some(deadline.as_secs().max(1));
        }
        if let Some(limit) = self.recipe_limit {
            config.recipe_limit = limit;
        }
        if let Some(path) = self.vocabulary_path.take() {
            config.vocabulary_path = Some(path);
        }
        config
    }

    /// Build a session with an empty pantry
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No API key is configured and no custom provider was given
    /// - The HTTP client cannot be created
    /// - The vocabulary file cannot be read
    pub async fn build(mut self) -> Result<Session, FinderError> {
        let config = self.merged_config();

        let provider = match self.provider.take() {
            Some(provider) => provider,
            None => Box::new(SpoonacularProvider::new(&config)?),
        };

        let vocabulary = match &config.vocabulary_path {
            Some(path) => IngredientVocabulary::load(path).await?,
            None => IngredientVocabulary::default(),
        };

        Ok(Session::new(
            RecipeQueryService::new(provider),
            vocabulary,
            config.recipe_limit,
        ))
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a finder session
    ///
    /// # Example
    /// ```
    /// use pantry_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
