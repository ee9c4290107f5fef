//! Shared test helpers for the `mealie-bulk` workspace: a programmable
//! in-memory [`CatalogGateway`] and recipe fixtures.

use async_trait::async_trait;
use mealie_bulk::types::{
    Category, Food, Ingredient, ItemsResponse, ParsedIngredient, Recipe, Tag, Tool,
};
use mealie_bulk::{CatalogGateway, MealieError};
use reqwest::StatusCode;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

// --- Fixtures ---

/// A minimal recipe with just a name.
pub fn recipe(name: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        ..Recipe::default()
    }
}

/// A parsed ingredient whose food already carries an id.
pub fn parsed_with_food_id(food: &str, id: &str) -> ParsedIngredient {
    ParsedIngredient {
        ingredient: Ingredient {
            food: Food {
                id: Some(id.to_string()),
                name: food.to_string(),
            },
            quantity: 1.0,
            unit: json!({}),
            note: None,
        },
    }
}

// --- Mock Gateway ---

#[derive(Default)]
struct Inner {
    tags: Vec<Tag>,
    categories: Vec<Category>,
    tools: Vec<Tool>,
    /// Per-line parser overrides; unscripted lines parse to an id-less food
    /// named after the line.
    parsed: HashMap<String, ParsedIngredient>,
    /// Organizer/food names whose create call fails.
    fail_creates: HashSet<String>,
    /// Recipe names whose create call fails.
    fail_recipes: HashSet<String>,
    /// Operations that always fail, by method name.
    fail_ops: HashSet<String>,
    calls: Vec<String>,
    next_id: usize,
}

impl Inner {
    fn record(&mut self, call: String) {
        self.calls.push(call);
    }

    fn id(&mut self, kind: &str) -> String {
        self.next_id += 1;
        format!("{kind}-{}", self.next_id)
    }
}

/// An in-memory catalog gateway with scripted failures and a call log.
///
/// Every gateway method records a `"<method>:<argument>"` entry, so tests can
/// assert which remote calls were (not) issued and in what order.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Arc<Mutex<Inner>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an existing remote tag.
    pub fn with_tag(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.id("tag");
            inner.tags.push(Tag {
                id,
                name: name.to_string(),
                ..Tag::default()
            });
        }
        self
    }

    /// Seeds an existing remote category.
    pub fn with_category(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.id("category");
            inner.categories.push(Category {
                id,
                name: name.to_string(),
                ..Category::default()
            });
        }
        self
    }

    /// Seeds an existing remote tool.
    pub fn with_tool(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.id("tool");
            inner.tools.push(Tool {
                id,
                name: name.to_string(),
                ..Tool::default()
            });
        }
        self
    }

    /// Scripts the parser result for one input line.
    pub fn with_parsed(self, line: &str, parsed: ParsedIngredient) -> Self {
        self.inner
            .lock()
            .unwrap()
            .parsed
            .insert(line.to_string(), parsed);
        self
    }

    /// Makes the create call for an organizer or food with this name fail.
    pub fn fail_create(self, name: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .fail_creates
            .insert(name.to_string());
        self
    }

    /// Makes `create_recipe` fail for this recipe name.
    pub fn fail_recipe(self, name: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .fail_recipes
            .insert(name.to_string());
        self
    }

    /// Makes a gateway method fail unconditionally, e.g. `"get_tags"` or
    /// `"update_recipe_ingredients"`.
    pub fn fail_op(self, op: &str) -> Self {
        self.inner.lock().unwrap().fail_ops.insert(op.to_string());
        self
    }

    /// The recorded calls, in issue order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// How many recorded calls start with `prefix`.
    pub fn call_count(&self, prefix: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn failure(op: &str) -> MealieError {
        MealieError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: format!("mock failure in {op}"),
        }
    }

    fn check_op(inner: &Inner, op: &str) -> Result<(), MealieError> {
        if inner.fail_ops.contains(op) {
            return Err(Self::failure(op));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for MockGateway {
    async fn get_tags(&self) -> Result<ItemsResponse<Tag>, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record("get_tags".into());
        Self::check_op(&inner, "get_tags")?;
        Ok(ItemsResponse {
            items: inner.tags.clone(),
            ..ItemsResponse::default()
        })
    }

    async fn create_tag(&self, name: &str) -> Result<Tag, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("create_tag:{name}"));
        if inner.fail_creates.contains(name) {
            return Err(Self::failure("create_tag"));
        }
        let id = inner.id("tag");
        let tag = Tag {
            id,
            name: name.to_string(),
            ..Tag::default()
        };
        inner.tags.push(tag.clone());
        Ok(tag)
    }

    async fn get_categories(&self) -> Result<ItemsResponse<Category>, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record("get_categories".into());
        Self::check_op(&inner, "get_categories")?;
        Ok(ItemsResponse {
            items: inner.categories.clone(),
            ..ItemsResponse::default()
        })
    }

    async fn create_category(&self, name: &str) -> Result<Category, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("create_category:{name}"));
        if inner.fail_creates.contains(name) {
            return Err(Self::failure("create_category"));
        }
        let id = inner.id("category");
        let category = Category {
            id,
            name: name.to_string(),
            ..Category::default()
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn get_tools(&self) -> Result<ItemsResponse<Tool>, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record("get_tools".into());
        Self::check_op(&inner, "get_tools")?;
        Ok(ItemsResponse {
            items: inner.tools.clone(),
            ..ItemsResponse::default()
        })
    }

    async fn create_tool(&self, name: &str) -> Result<Tool, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("create_tool:{name}"));
        if inner.fail_creates.contains(name) {
            return Err(Self::failure("create_tool"));
        }
        let id = inner.id("tool");
        let tool = Tool {
            id,
            name: name.to_string(),
            ..Tool::default()
        };
        inner.tools.push(tool.clone());
        Ok(tool)
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<String, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("create_recipe:{}", recipe.name));
        if inner.fail_recipes.contains(&recipe.name) {
            return Err(Self::failure("create_recipe"));
        }
        Ok(recipe.name.to_lowercase().replace(' ', "-"))
    }

    async fn parse_ingredients(
        &self,
        lines: &[String],
    ) -> Result<Vec<ParsedIngredient>, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("parse_ingredients:{}", lines.len()));
        Self::check_op(&inner, "parse_ingredients")?;
        Ok(lines
            .iter()
            .map(|line| {
                inner.parsed.get(line).cloned().unwrap_or(ParsedIngredient {
                    ingredient: Ingredient {
                        food: Food {
                            id: None,
                            name: line.clone(),
                        },
                        quantity: 1.0,
                        unit: json!({}),
                        note: None,
                    },
                })
            })
            .collect())
    }

    async fn update_recipe_categories(
        &self,
        slug: &str,
        categories: &[Category],
    ) -> Result<(), MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!(
            "update_recipe_categories:{slug}:{}",
            categories.len()
        ));
        Self::check_op(&inner, "update_recipe_categories")
    }

    async fn update_recipe_tools(&self, slug: &str, tools: &[Tool]) -> Result<(), MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("update_recipe_tools:{slug}:{}", tools.len()));
        Self::check_op(&inner, "update_recipe_tools")
    }

    async fn update_recipe_tags(&self, slug: &str, tags: &[Tag]) -> Result<(), MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("update_recipe_tags:{slug}:{}", tags.len()));
        Self::check_op(&inner, "update_recipe_tags")
    }

    async fn update_recipe_ingredients(
        &self,
        slug: &str,
        ingredients: &[ParsedIngredient],
    ) -> Result<(), MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!(
            "update_recipe_ingredients:{slug}:{}",
            ingredients.len()
        ));
        Self::check_op(&inner, "update_recipe_ingredients")
    }

    async fn create_food(&self, food: &Food) -> Result<String, MealieError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(format!("create_food:{}", food.name));
        if inner.fail_creates.contains(&food.name) {
            return Err(Self::failure("create_food"));
        }
        Ok(inner.id("food"))
    }
}
