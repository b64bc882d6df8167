mod spoonacular;

pub use spoonacular::SpoonacularProvider;

use async_trait::async_trait;

use crate::error::FinderError;
use crate::model::{InstructionSet, RecipeDetail, RecipeSummary};
use crate::query::{ByIngredientParams, ByNutrientParams};

/// Remote recipe search API
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    async fn search_by_ingredients(
        &self,
        params: &ByIngredientParams,
    ) -> Result<Vec<RecipeSummary>, FinderError>;

    async fn search_by_nutrients(
        &self,
        params: &ByNutrientParams,
    ) -> Result<Vec<RecipeSummary>, FinderError>;

    /// Step-by-step instructions for one recipe
    async fn instructions(&self, recipe_id: u64) -> Result<InstructionSet, FinderError>;

    /// Full ingredient and nutrition information for one recipe
    async fn information(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError>;
}
