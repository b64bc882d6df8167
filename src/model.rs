use serde::{Deserialize, Serialize};

/// Ingredient as the provider reports it inside a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    /// Line as written in the source recipe, e.g. "2 cups of flour"
    #[serde(default)]
    pub original: String,
    /// Either a full URL (search results) or a bare file name (details)
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// One search hit. Which optional fields are filled depends on the search mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,

    // by ingredients
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
    #[serde(default)]
    pub used_ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub missed_ingredients: Vec<RecipeIngredient>,

    // by nutrients
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub carbs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub step: String,
}

/// Numbered steps of a recipe, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructionSet {
    pub steps: Vec<Step>,
}

impl InstructionSet {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Build from an `analyzedInstructions` response. The provider groups
    /// steps into named sections; the first section holds the main method.
    pub fn from_groups(groups: Vec<InstructionGroup>) -> Self {
        let steps = groups
            .into_iter()
            .next()
            .map(|group| group.steps)
            .unwrap_or_default();
        InstructionSet { steps }
    }
}

/// Element of the `analyzedInstructions` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A search hit paired with its instructions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch {
    pub summary: RecipeSummary,
    pub instructions: InstructionSet,
}

/// Full recipe information from the detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// HTML fragment
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<RecipeIngredient>,
}
