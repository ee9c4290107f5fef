//! Batch import orchestration.
//!
//! A batch runs in two phases: reference data (tags, categories, tools) is
//! reconciled against the remote catalog once for the whole batch, then each
//! recipe runs through the create-then-enrich pipeline in input order. A
//! failed recipe never stops its siblings; only a failure while building the
//! reference maps aborts the batch.

pub mod ingredients;
pub mod pipeline;
pub mod reconcile;

pub use ingredients::resolve_ingredients;
pub use pipeline::{import_one, RecipeOutcome};
pub use reconcile::{reconcile, Organizer};

use crate::gateway::CatalogGateway;
use crate::types::{BulkImportResult, Category, Recipe, Tag, Tool};
use crate::MealieError;
use std::collections::{HashMap, HashSet};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Knobs for one batch run.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Attach reconciled tags to created recipes. Off by default: Mealie's
    /// create call already receives the keywords, so an explicit tag patch is
    /// usually redundant.
    pub attach_tags: bool,
}

/// The read-only name→entity snapshots built once per batch and shared by
/// every recipe pipeline. Never mutated after construction.
#[derive(Debug, Default)]
pub struct ReferenceMaps {
    pub tags: HashMap<String, Tag>,
    pub categories: HashMap<String, Category>,
    pub tools: HashMap<String, Tool>,
}

/// Drives bulk imports against a catalog gateway.
pub struct BulkImporter<G> {
    gateway: G,
    options: ImportOptions,
}

impl<G: CatalogGateway> BulkImporter<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            options: ImportOptions::default(),
        }
    }

    pub fn with_options(gateway: G, options: ImportOptions) -> Self {
        Self { gateway, options }
    }

    /// Imports a batch of recipes, returning the aggregate result.
    ///
    /// Never returns an error: a preparation-level failure is reported inside
    /// the result with zero recipes processed.
    pub async fn import(&self, recipes: &[Recipe]) -> BulkImportResult {
        self.import_with_cancellation(recipes, &CancellationToken::new())
            .await
    }

    /// Like [`import`](Self::import), but stops picking up new recipes once
    /// `cancel` fires. In-flight remote calls are not interrupted; recipes
    /// skipped due to cancellation are reported as failures so the count
    /// invariants hold.
    pub async fn import_with_cancellation(
        &self,
        recipes: &[Recipe],
        cancel: &CancellationToken,
    ) -> BulkImportResult {
        let mut result = BulkImportResult::default();

        let maps = match self.prepare(recipes).await {
            Ok(maps) => maps,
            Err(err) => {
                error!("error during bulk import preparation: {err}");
                result.error_messages.push(format!("Preparation error: {err}"));
                return result;
            }
        };

        for recipe in recipes {
            if cancel.is_cancelled() {
                warn!(recipe = %recipe.name, "batch cancelled, skipping recipe");
                result.record_failure(&recipe.name, format!("{}: import cancelled", recipe.name));
                continue;
            }
            match import_one(&self.gateway, recipe, &maps, &self.options).await {
                RecipeOutcome::Created => result.record_success(&recipe.name),
                RecipeOutcome::CreatedWithWarnings(warnings) => {
                    // Enrichment is best-effort: the recipe exists, so it
                    // still counts as a success.
                    for warning in &warnings {
                        warn!(recipe = %recipe.name, "{warning}");
                    }
                    result.record_success(&recipe.name);
                }
                RecipeOutcome::Failed(reason) => {
                    error!(recipe = %recipe.name, "failed to import recipe: {reason}");
                    result.record_failure(&recipe.name, format!("{}: {reason}", recipe.name));
                }
            }
        }

        result
    }

    /// Builds the three reference maps for the whole batch. An error here is
    /// batch-fatal; individual create failures are swallowed inside
    /// [`reconcile`].
    async fn prepare(&self, recipes: &[Recipe]) -> Result<ReferenceMaps, MealieError> {
        info!("preparing tags...");
        let tags =
            reconcile::<Tag, G>(&self.gateway, collect_names(recipes, |r| &r.keywords)).await?;

        info!("preparing categories...");
        let categories =
            reconcile::<Category, G>(&self.gateway, collect_names(recipes, |r| &r.recipe_category))
                .await?;

        info!("preparing tools...");
        let tools =
            reconcile::<Tool, G>(&self.gateway, collect_names(recipes, |r| &r.tools)).await?;

        Ok(ReferenceMaps {
            tags,
            categories,
            tools,
        })
    }
}

/// Collects the distinct non-empty names of one reference kind across the
/// batch, preserving first-observed order so creation order is deterministic.
fn collect_names<F>(recipes: &[Recipe], field: F) -> Vec<String>
where
    F: Fn(&Recipe) -> &Vec<String>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for recipe in recipes {
        for name in field(recipe) {
            if !name.is_empty() && seen.insert(name.clone()) {
                names.push(name.clone());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_keywords(keywords: &[&str]) -> Recipe {
        Recipe {
            name: "test".into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..Recipe::default()
        }
    }

    #[test]
    fn collect_names_dedups_in_first_observed_order() {
        let recipes = vec![
            recipe_with_keywords(&["dinner", "quick", ""]),
            recipe_with_keywords(&["quick", "vegan"]),
        ];
        let names = collect_names(&recipes, |r| &r.keywords);
        assert_eq!(names, vec!["dinner", "quick", "vegan"]);
    }

    #[test]
    fn collect_names_is_empty_for_empty_batch() {
        assert!(collect_names(&[], |r| &r.keywords).is_empty());
    }
}
