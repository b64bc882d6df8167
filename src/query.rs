//! Typed query parameters for the two search modes.

use serde::Serialize;

use crate::nutrients::NutrientRange;

/// Largest `number` the provider accepts
pub const MAX_RESULTS: u32 = 100;

fn clamp_limit(limit: u32) -> u32 {
    limit.min(MAX_RESULTS)
}

/// How the provider orders by-ingredient hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Use as many pantry ingredients as possible
    #[default]
    MaximizeUsed,
    /// Need as few extra ingredients as possible
    MinimizeMissing,
}

impl Serialize for Ranking {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let code = match self {
            Ranking::MaximizeUsed => 1,
            Ranking::MinimizeMissing => 2,
        };
        serializer.serialize_u8(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByIngredientParams {
    /// Comma separated ingredient names
    pub ingredients: String,
    pub number: u32,
    /// Left to the provider default unless set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Ranking>,
    /// Skip staples like water, flour and salt when counting missing items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_pantry: Option<bool>,
}

impl ByIngredientParams {
    pub fn new<S: AsRef<str>>(names: &[S], limit: u32) -> Self {
        let ingredients = names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        ByIngredientParams {
            ingredients,
            number: clamp_limit(limit),
            ranking: None,
            ignore_pantry: None,
        }
    }

    pub fn ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn ignore_pantry(mut self, ignore: bool) -> Self {
        self.ignore_pantry = Some(ignore);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByNutrientParams {
    pub min_carbs: u32,
    pub max_carbs: u32,
    pub min_protein: u32,
    pub max_protein: u32,
    pub min_calories: u32,
    pub max_calories: u32,
    pub min_fat: u32,
    pub max_fat: u32,
    pub number: u32,
}

impl ByNutrientParams {
    pub fn new(range: &NutrientRange, limit: u32) -> Self {
        ByNutrientParams {
            min_carbs: range.carbs().min,
            max_carbs: range.carbs().max,
            min_protein: range.protein().min,
            max_protein: range.protein().max,
            min_calories: range.calories().min,
            max_calories: range.calories().max,
            min_fat: range.fat().min,
            max_fat: range.fat().max,
            number: clamp_limit(limit),
        }
    }
}
