//! The per-recipe import pipeline: create, then best-effort enrichment.

use super::ingredients::resolve_ingredients;
use super::{ImportOptions, ReferenceMaps};
use crate::gateway::CatalogGateway;
use crate::types::Recipe;
use std::collections::HashMap;
use tracing::info;

/// Outcome of one recipe's trip through the pipeline.
///
/// A recipe counts as created as soon as the create call succeeds; failures
/// in the attach steps only degrade the outcome to `CreatedWithWarnings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOutcome {
    Created,
    CreatedWithWarnings(Vec<String>),
    Failed(String),
}

impl RecipeOutcome {
    pub fn is_created(&self) -> bool {
        !matches!(self, RecipeOutcome::Failed(_))
    }
}

/// Looks up the requested names in a reference map, silently dropping names
/// whose entity never made it into the map (its create call failed during
/// reconciliation). Skip-on-miss is deliberate, not an error.
fn select_known<T: Clone>(requested: &[String], map: &HashMap<String, T>) -> Vec<T> {
    requested
        .iter()
        .filter_map(|name| map.get(name).cloned())
        .collect()
}

/// Imports a single recipe.
///
/// Step 1 creates the recipe; if that fails the whole recipe fails and no
/// attach step runs. Afterwards categories, tools, optionally tags, and
/// ingredients are attached, each step fault-isolated: any failure becomes a
/// warning on the outcome instead of failing the recipe. Attach calls with an
/// empty payload are skipped entirely.
pub async fn import_one<G: CatalogGateway + ?Sized>(
    gateway: &G,
    recipe: &Recipe,
    maps: &ReferenceMaps,
    options: &ImportOptions,
) -> RecipeOutcome {
    info!("importing recipe: {}", recipe.name);

    let slug = match gateway.create_recipe(recipe).await {
        Ok(slug) => slug,
        Err(err) => return RecipeOutcome::Failed(err.to_string()),
    };

    let mut warnings = Vec::new();

    if !recipe.recipe_category.is_empty() {
        let categories = select_known(&recipe.recipe_category, &maps.categories);
        if !categories.is_empty() {
            if let Err(err) = gateway.update_recipe_categories(&slug, &categories).await {
                warnings.push(format!("failed to update categories: {err}"));
            }
        }
    }

    if !recipe.tools.is_empty() {
        let tools = select_known(&recipe.tools, &maps.tools);
        if !tools.is_empty() {
            if let Err(err) = gateway.update_recipe_tools(&slug, &tools).await {
                warnings.push(format!("failed to update tools: {err}"));
            }
        }
    }

    if options.attach_tags && !recipe.keywords.is_empty() {
        let tags = select_known(&recipe.keywords, &maps.tags);
        if !tags.is_empty() {
            if let Err(err) = gateway.update_recipe_tags(&slug, &tags).await {
                warnings.push(format!("failed to update tags: {err}"));
            }
        }
    }

    if !recipe.recipe_ingredient.is_empty() {
        match resolve_ingredients(gateway, &recipe.recipe_ingredient).await {
            Ok(ingredients) => {
                if let Err(err) = gateway.update_recipe_ingredients(&slug, &ingredients).await {
                    warnings.push(format!("failed to update ingredients: {err}"));
                }
            }
            Err(err) => warnings.push(format!("failed to parse ingredients: {err}")),
        }
    }

    if warnings.is_empty() {
        info!("successfully imported recipe: {}", recipe.name);
        RecipeOutcome::Created
    } else {
        RecipeOutcome::CreatedWithWarnings(warnings)
    }
}
