//! Plain-text presentation of pantry state, notices and recipe results.

use scraper::Html;
use std::fmt::Write;

use crate::model::{InstructionSet, RecipeDetail, RecipeIngredient, RecipeMatch, RecipeSummary};
use crate::pantry::{PantryItem, PantryNotice};
use crate::service::QueryOutcome;

const INGREDIENT_CDN: &str = "https://spoonacular.com/cdn/ingredients_100x100/";

/// Detail responses carry bare file names, search responses full URLs
pub fn ingredient_image_url(image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        format!("{}{}", INGREDIENT_CDN, image)
    }
}

/// Titles sometimes arrive with escaped entities such as `&amp;`
pub fn clean_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return "No title".to_string();
    }
    html_escape::decode_html_entities(title).into_owned()
}

/// Strip tags from the HTML summary of the detail endpoint
pub fn summary_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<Vec<_>>().join("");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render_pantry(items: &[PantryItem]) -> String {
    if items.is_empty() {
        return "Your ingredient list is empty.".to_string();
    }
    let mut out = String::from("List of ingredients:\n");
    for item in items {
        let _ = writeln!(out, "  {}: {}", item.name, item.amount);
    }
    out
}

pub fn render_notice(notice: &PantryNotice) -> String {
    match notice {
        PantryNotice::Added { name, .. } => format!("Added: {}", name),
        PantryNotice::Merged { name, amount } => format!("Added: {} (now {})", name, amount),
        PantryNotice::Updated { name, amount } => format!("{}: {}", name, amount),
        PantryNotice::Removed { name } => format!("Deleted: {}", name),
        PantryNotice::FloorReached { name } => format!("{} can't be less than 1", name),
        PantryNotice::NotFound { name } => format!("{} is not in your list", name),
        PantryNotice::Rejected(reason) => reason.to_string(),
    }
}

fn render_ingredients(out: &mut String, heading: &str, ingredients: &[RecipeIngredient]) {
    let _ = writeln!(out, "{}", heading);
    for ingredient in ingredients {
        let line = if ingredient.original.is_empty() {
            &ingredient.name
        } else {
            &ingredient.original
        };
        match &ingredient.image {
            Some(image) => {
                let _ = writeln!(out, "  - {} [{}]", line, ingredient_image_url(image));
            }
            None => {
                let _ = writeln!(out, "  - {}", line);
            }
        }
    }
}

fn render_nutrition(out: &mut String, summary: &RecipeSummary) {
    let na = || "N/A".to_string();
    let _ = writeln!(out, "Nutrition facts");
    let _ = writeln!(
        out,
        "  Calories: {}",
        summary.calories.map(|c| c.to_string()).unwrap_or_else(na)
    );
    let _ = writeln!(out, "  Protein: {}", summary.protein.clone().unwrap_or_else(na));
    let _ = writeln!(out, "  Fat: {}", summary.fat.clone().unwrap_or_else(na));
    let _ = writeln!(out, "  Carbs: {}", summary.carbs.clone().unwrap_or_else(na));
}

fn render_steps(out: &mut String, instructions: &InstructionSet) {
    let _ = writeln!(out, "Instructions");
    if instructions.is_empty() {
        let _ = writeln!(out, "  No instructions available.");
        return;
    }
    for step in &instructions.steps {
        let _ = writeln!(out, "  {}. {}", step.number, step.step.trim());
    }
}

/// One recipe block. `detail` supplies the full ingredient list for
/// nutrient searches, whose hits carry no ingredients of their own.
pub fn render_match(recipe: &RecipeMatch, detail: Option<&RecipeDetail>) -> String {
    let summary = &recipe.summary;
    let mut out = String::new();
    let _ = writeln!(out, "== {} (#{})", clean_title(&summary.title), summary.id);
    if let Some(image) = &summary.image {
        let _ = writeln!(out, "Image: {}", image);
    }

    if !summary.missed_ingredients.is_empty() {
        render_ingredients(&mut out, "Missing ingredients", &summary.missed_ingredients);
    }

    if let Some(detail) = detail {
        if detail.extended_ingredients.is_empty() {
            let _ = writeln!(out, "No ingredient details available.");
        } else {
            render_ingredients(&mut out, "Ingredients", &detail.extended_ingredients);
        }
    }

    // Nutrient searches always show the facts, N/A where missing
    if detail.is_some() {
        render_nutrition(&mut out, summary);
    }

    render_steps(&mut out, &recipe.instructions);
    out
}

pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} (#{})", clean_title(&detail.title), detail.id);
    if let Some(minutes) = detail.ready_in_minutes {
        let _ = writeln!(out, "Ready in {} minutes", minutes);
    }
    if let Some(servings) = detail.servings {
        let _ = writeln!(out, "Servings: {}", servings);
    }
    if let Some(url) = &detail.source_url {
        let _ = writeln!(out, "Source: {}", url);
    }
    if let Some(summary) = &detail.summary {
        let _ = writeln!(out, "{}", summary_text(summary));
    }
    if detail.extended_ingredients.is_empty() {
        let _ = writeln!(out, "No ingredient details available.");
    } else {
        render_ingredients(&mut out, "Ingredients", &detail.extended_ingredients);
    }
    out
}

/// Headline for a query outcome when there is nothing to list
pub fn render_outcome_status(outcome: &QueryOutcome) -> Option<String> {
    match outcome {
        QueryOutcome::Found(_) => None,
        QueryOutcome::Empty => Some("No recipes matched.".to_string()),
        QueryOutcome::Failed(e) => Some(format!("Could not fetch recipes: {}", e)),
    }
}
