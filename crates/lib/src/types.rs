//! Data model shared between the gateway and the import orchestration.
//!
//! The wire structs mirror the JSON shapes Mealie exchanges: `camelCase`
//! fields, with the schema.org `@context`/`@type` discriminators kept as
//! renamed passthrough fields. Recipes are consumed read-only by the import
//! pipeline and never mutated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recipe record as submitted by the caller, in schema.org shape.
///
/// `name` is the batch-unique key used for result reporting. The descriptive
/// fields (instructions, timing, nutrition) are passed through opaquely to the
/// remote create call; only `recipe_ingredient`, `recipe_category`, `tools`
/// and `keywords` participate in orchestration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub schema_context: Option<String>,
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    pub name: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Free-text ingredient lines, order-significant.
    pub recipe_ingredient: Vec<String>,
    pub recipe_instructions: Vec<RecipeInstruction>,
    pub recipe_category: Vec<String>,
    pub tools: Vec<String>,
    pub recipe_yield: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub keywords: Vec<String>,
    pub nutrition: Option<NutritionInformation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeInstruction {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionInformation {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    pub calories: Option<String>,
    pub fat_content: Option<String>,
    pub carbohydrate_content: Option<String>,
    pub protein_content: Option<String>,
}

/// A Mealie tag organizer. Identity is name-keyed for reconciliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A Mealie category organizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A Mealie kitchen tool organizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub households_with_tool: Vec<String>,
}

/// A food item referenced by a parsed ingredient.
///
/// The id starts absent for foods the parser did not match against the remote
/// catalog and is back-filled once `create_food` confirms the item exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Food {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// A structured ingredient as produced by Mealie's ingredient parser.
///
/// The unit is kept as an opaque JSON object; the orchestration never
/// inspects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub food: Food,
    pub quantity: f64,
    pub unit: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One parser result, wrapping the structured ingredient for a single
/// free-text line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedIngredient {
    pub ingredient: Ingredient,
}

/// Paged list envelope returned by Mealie's organizer list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Aggregate outcome of one batch import.
///
/// `failed_recipes` and `error_messages` are parallel lists correlated by
/// position. Invariant: `success_count + failure_count` equals the number of
/// recipes processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkImportResult {
    pub success_count: usize,
    pub failure_count: usize,
    pub successful_recipes: Vec<String>,
    pub failed_recipes: Vec<String>,
    pub error_messages: Vec<String>,
}

impl BulkImportResult {
    pub(crate) fn record_success(&mut self, name: &str) {
        self.success_count += 1;
        self.successful_recipes.push(name.to_string());
    }

    pub(crate) fn record_failure(&mut self, name: &str, message: String) {
        self.failure_count += 1;
        self.failed_recipes.push(name.to_string());
        self.error_messages.push(message);
    }
}
