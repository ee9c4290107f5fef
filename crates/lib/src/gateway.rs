//! The remote catalog capability consumed by the import orchestration.

use crate::errors::MealieError;
use crate::types::{
    Category, Food, ItemsResponse, ParsedIngredient, Recipe, Tag, Tool,
};
use async_trait::async_trait;

/// The fixed set of Mealie operations the importer depends on.
///
/// Keeping this as a trait object seam lets the orchestration run against a
/// programmable mock in tests while [`crate::MealieClient`] talks to a real
/// instance in production. All list/create/update semantics follow the Mealie
/// HTTP API; implementations must not retry on their own.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn get_tags(&self) -> Result<ItemsResponse<Tag>, MealieError>;
    async fn create_tag(&self, name: &str) -> Result<Tag, MealieError>;

    async fn get_categories(&self) -> Result<ItemsResponse<Category>, MealieError>;
    async fn create_category(&self, name: &str) -> Result<Category, MealieError>;

    async fn get_tools(&self) -> Result<ItemsResponse<Tool>, MealieError>;
    async fn create_tool(&self, name: &str) -> Result<Tool, MealieError>;

    /// Creates a recipe and returns its catalog slug.
    async fn create_recipe(&self, recipe: &Recipe) -> Result<String, MealieError>;

    /// Parses one recipe's free-text ingredient lines in a single call,
    /// returning one parsed ingredient per line, order preserved.
    async fn parse_ingredients(
        &self,
        lines: &[String],
    ) -> Result<Vec<ParsedIngredient>, MealieError>;

    async fn update_recipe_categories(
        &self,
        slug: &str,
        categories: &[Category],
    ) -> Result<(), MealieError>;

    async fn update_recipe_tools(&self, slug: &str, tools: &[Tool]) -> Result<(), MealieError>;

    async fn update_recipe_tags(&self, slug: &str, tags: &[Tag]) -> Result<(), MealieError>;

    async fn update_recipe_ingredients(
        &self,
        slug: &str,
        ingredients: &[ParsedIngredient],
    ) -> Result<(), MealieError>;

    /// Creates a food item and returns its identifier.
    async fn create_food(&self, food: &Food) -> Result<String, MealieError>;
}
