pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod nutrients;
pub mod pantry;
pub mod providers;
pub mod query;
pub mod render;
pub mod service;
pub mod session;
pub mod vocabulary;

pub use builder::{RecipeFinder, RecipeFinderBuilder};
pub use config::FinderConfig;
pub use error::{FinderError, InputError};
pub use model::{InstructionSet, RecipeDetail, RecipeMatch, RecipeSummary, Step};
pub use nutrients::NutrientRange;
pub use pantry::{Pantry, PantryItem, PantryNotice};
pub use service::{QueryOutcome, RecipeQueryService};
pub use session::{Command, Session};

use providers::SpoonacularProvider;

fn service_from_env() -> Result<(RecipeQueryService, FinderConfig), FinderError> {
    let config = FinderConfig::load()?;
    let provider = SpoonacularProvider::new(&config)?;
    Ok((RecipeQueryService::new(Box::new(provider)), config))
}

/// Search recipes for a list of ingredients using configuration from
/// `pantry.toml` and the environment.
///
/// `limit` falls back to the configured `recipe_limit`.
pub async fn find_by_ingredients<S: AsRef<str>>(
    names: &[S],
    limit: Option<u32>,
) -> Result<QueryOutcome, FinderError> {
    let (service, config) = service_from_env()?;
    Ok(service
        .by_ingredients(names, limit.unwrap_or(config.recipe_limit))
        .await)
}

/// Search recipes inside a nutrient range using configuration from
/// `pantry.toml` and the environment.
pub async fn find_by_nutrients(
    range: &NutrientRange,
    limit: Option<u32>,
) -> Result<QueryOutcome, FinderError> {
    let (service, config) = service_from_env()?;
    Ok(service
        .by_nutrients(range, limit.unwrap_or(config.recipe_limit))
        .await)
}

/// Full information for one recipe, `None` if it could not be fetched
pub async fn recipe_detail(recipe_id: u64) -> Result<Option<RecipeDetail>, FinderError> {
    let (service, _) = service_from_env()?;
    Ok(service.detail(recipe_id).await)
}
