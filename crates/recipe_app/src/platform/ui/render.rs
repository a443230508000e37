use chrono::{DateTime, NaiveDateTime};
use recipe_core::{AppViewModel, Recipe};

use super::constants::*;

/// Lines to print for one frame.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(RULE.to_string());
    if let Some(error) = &view.error_message {
        lines.push(format!("! {error}"));
    }
    if let Some(success) = &view.success_message {
        lines.push(format!("+ {success}"));
    }
    if view.is_submitting {
        lines.push("Processing...".to_string());
    }

    match &view.current {
        None if view.is_loading => lines.push("Loading recipes...".to_string()),
        None => lines.push("No recipes found.".to_string()),
        Some(recipe) => {
            let position = view.current_index.map_or(0, |index| index + 1);
            lines.push(format!(
                "Recipe {position} of {}: {}",
                view.recipe_count, recipe.title
            ));
            lines.extend(recipe_lines(recipe));
            lines.push(indicator_row(view));
        }
    }

    if let Some(pending) = &view.pending_delete {
        lines.push(format!(
            "Are you sure you want to delete \"{}\"? [y/N]",
            pending.title
        ));
    } else if !view.draft_url.is_empty() {
        lines.push(format!("Link: {}", view.draft_url));
    }

    lines
}

fn recipe_lines(recipe: &Recipe) -> Vec<String> {
    let mut lines = vec![format!("YouTube Link: {}", recipe.youtube_url)];
    if let Some(time) = non_blank(recipe.cooking_time.as_deref()) {
        lines.push(format!("Cooking Time: {time}"));
    }
    if let Some(servings) = non_blank(recipe.servings.as_deref()) {
        lines.push(format!("Servings: {servings}"));
    }
    if let Some(added) = recipe.created_at.as_deref().and_then(format_timestamp) {
        lines.push(format!("Added: {added}"));
    }

    lines.push("Ingredients:".to_string());
    lines.extend(recipe.ingredients.iter().map(|item| format!("  - {item}")));
    lines.push("Instructions:".to_string());
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {step}", index + 1)),
    );
    lines
}

fn indicator_row(view: &AppViewModel) -> String {
    view.indicators()
        .into_iter()
        .map(|current| if current { INDICATOR_CURRENT } else { INDICATOR_OTHER })
        .collect()
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.trim().is_empty())
}

/// Server timestamps are naive ISO-8601, sometimes with fractional seconds.
fn format_timestamp(raw: &str) -> Option<String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.format("%Y-%m-%d %H:%M").to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.format("%Y-%m-%d %H:%M").to_string())
}
