//! Two-stage recipe lookup: one search call, then one instructions call per hit.

use log::{info, warn};

use crate::error::FinderError;
use crate::model::{InstructionSet, RecipeDetail, RecipeMatch, RecipeSummary};
use crate::nutrients::NutrientRange;
use crate::providers::RecipeProvider;
use crate::query::{ByIngredientParams, ByNutrientParams};

/// Result of a recipe query. A failed search is kept apart from an empty one
/// so the UI can tell "nothing matched" from "could not ask".
#[derive(Debug)]
pub enum QueryOutcome {
    Found(Vec<RecipeMatch>),
    Empty,
    Failed(FinderError),
}

impl QueryOutcome {
    /// Matches for display; empty for both `Empty` and `Failed`
    pub fn matches(&self) -> &[RecipeMatch] {
        match self {
            QueryOutcome::Found(matches) => matches,
            _ => &[],
        }
    }

    pub fn into_matches(self) -> Vec<RecipeMatch> {
        match self {
            QueryOutcome::Found(matches) => matches,
            _ => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }
}

pub struct RecipeQueryService {
    provider: Box<dyn RecipeProvider>,
}

impl RecipeQueryService {
    pub fn new(provider: Box<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Recipes that use the given ingredients
    pub async fn by_ingredients<S: AsRef<str>>(&self, names: &[S], limit: u32) -> QueryOutcome {
        let params = ByIngredientParams::new(names, limit);
        if params.ingredients.is_empty() || params.number == 0 {
            return QueryOutcome::Empty;
        }

        info!(
            "Searching {} for recipes with: {}",
            self.provider_name(),
            params.ingredients
        );
        let search = self.provider.search_by_ingredients(&params).await;
        self.pair_with_instructions(search).await
    }

    /// Recipes whose nutrients fall inside `range`
    pub async fn by_nutrients(&self, range: &NutrientRange, limit: u32) -> QueryOutcome {
        let params = ByNutrientParams::new(range, limit);
        if params.number == 0 {
            return QueryOutcome::Empty;
        }

        info!("Searching {} by nutrients", self.provider_name());
        let search = self.provider.search_by_nutrients(&params).await;
        self.pair_with_instructions(search).await
    }

    /// Full information for one recipe, `None` if it could not be fetched
    pub async fn detail(&self, recipe_id: u64) -> Option<RecipeDetail> {
        match self.provider.information(recipe_id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Could not fetch details for recipe {}: {}", recipe_id, e);
                None
            }
        }
    }

    async fn pair_with_instructions(
        &self,
        search: Result<Vec<RecipeSummary>, FinderError>,
    ) -> QueryOutcome {
        let summaries = match search {
            Ok(summaries) => summaries,
            Err(e) => {
                warn!("Recipe search failed: {}", e);
                return QueryOutcome::Failed(e);
            }
        };
        if summaries.is_empty() {
            return QueryOutcome::Empty;
        }

        let mut matches = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let instructions = self.instructions_or_empty(summary.id).await;
            matches.push(RecipeMatch {
                summary,
                instructions,
            });
        }
        QueryOutcome::Found(matches)
    }

    async fn instructions_or_empty(&self, recipe_id: u64) -> InstructionSet {
        match self.provider.instructions(recipe_id).await {
            Ok(set) => set,
            Err(e) => {
                warn!("No instructions for recipe {}: {}", recipe_id, e);
                InstructionSet::default()
            }
        }
    }
}
