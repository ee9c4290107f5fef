//! Reqwest-backed implementation of the [`CatalogGateway`] against a live
//! Mealie instance.

use crate::errors::MealieError;
use crate::gateway::CatalogGateway;
use crate::types::{
    Category, Food, ItemsResponse, ParsedIngredient, Recipe, Tag, Tool,
};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Connection settings for one Mealie instance.
#[derive(Debug, Clone)]
pub struct MealieConfig {
    pub base_url: String,
    pub api_token: String,
}

/// HTTP client for the Mealie API.
///
/// Thin wrapper over `reqwest`: every method maps to exactly one endpoint,
/// non-2xx responses surface as [`MealieError::Api`], and no retries happen at
/// this layer.
pub struct MealieClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl MealieClient {
    pub fn new(config: MealieConfig) -> Result<Self, MealieError> {
        // Url::join treats a base without a trailing slash as a file, which
        // would drop the last path segment.
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|e| MealieError::InvalidBaseUrl(e.to_string()))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(MealieError::InvalidBaseUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_token: config.api_token,
        })
    }

    fn url(&self, path: &str) -> Result<Url, MealieError> {
        self.base_url
            .join(path)
            .map_err(|e| MealieError::InvalidBaseUrl(e.to_string()))
    }

    /// Maps a non-success response to `MealieError::Api`, otherwise returns
    /// the body text.
    async fn read_body(response: reqwest::Response) -> Result<String, MealieError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MealieError::Api { status, body });
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, MealieError> {
        let response = self
            .http
            .get(self.url(path)?)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| MealieError::Decode(e.to_string()))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, MealieError> {
        let response = self
            .http
            .post(self.url(path)?)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| MealieError::Decode(e.to_string()))
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<(), MealieError> {
        let response = self
            .http
            .patch(self.url(path)?)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;
        Self::read_body(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for MealieClient {
    async fn get_tags(&self) -> Result<ItemsResponse<Tag>, MealieError> {
        self.get_json("api/organizers/tags").await
    }

    async fn create_tag(&self, name: &str) -> Result<Tag, MealieError> {
        self.post_json("api/organizers/tags", &json!({ "name": name }))
            .await
    }

    async fn get_categories(&self) -> Result<ItemsResponse<Category>, MealieError> {
        self.get_json("api/organizers/categories").await
    }

    async fn create_category(&self, name: &str) -> Result<Category, MealieError> {
        self.post_json("api/organizers/categories", &json!({ "name": name }))
            .await
    }

    async fn get_tools(&self) -> Result<ItemsResponse<Tool>, MealieError> {
        self.get_json("api/organizers/tools").await
    }

    async fn create_tool(&self, name: &str) -> Result<Tool, MealieError> {
        self.post_json(
            "api/organizers/tools",
            &json!({ "name": name, "householdsWithTool": [] }),
        )
        .await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<String, MealieError> {
        // Mealie's html-or-json endpoint takes the recipe as an embedded JSON
        // string and answers with the new slug as a bare quoted string.
        let body = json!({
            "includeTags": true,
            "data": serde_json::to_string(recipe)?,
        });
        let response = self
            .http
            .post(self.url("api/recipes/create/html-or-json")?)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        Ok(body.trim().trim_matches('"').to_string())
    }

    async fn parse_ingredients(
        &self,
        lines: &[String],
    ) -> Result<Vec<ParsedIngredient>, MealieError> {
        self.post_json(
            "api/parser/ingredients",
            &json!({ "parser": "nlp", "ingredients": lines }),
        )
        .await
    }

    async fn update_recipe_categories(
        &self,
        slug: &str,
        categories: &[Category],
    ) -> Result<(), MealieError> {
        self.patch_json(
            &format!("api/recipes/{slug}"),
            &json!({ "recipeCategory": categories }),
        )
        .await
    }

    async fn update_recipe_tools(&self, slug: &str, tools: &[Tool]) -> Result<(), MealieError> {
        self.patch_json(&format!("api/recipes/{slug}"), &json!({ "tools": tools }))
            .await
    }

    async fn update_recipe_tags(&self, slug: &str, tags: &[Tag]) -> Result<(), MealieError> {
        self.patch_json(&format!("api/recipes/{slug}"), &json!({ "tags": tags }))
            .await
    }

    async fn update_recipe_ingredients(
        &self,
        slug: &str,
        ingredients: &[ParsedIngredient],
    ) -> Result<(), MealieError> {
        // The patch body carries the inner ingredients, not the parser wrappers.
        let inner: Vec<_> = ingredients.iter().map(|p| &p.ingredient).collect();
        self.patch_json(
            &format!("api/recipes/{slug}"),
            &json!({ "recipeIngredient": inner }),
        )
        .await
    }

    async fn create_food(&self, food: &Food) -> Result<String, MealieError> {
        let created: Food = self
            .post_json("api/foods", &serde_json::to_value(food)?)
            .await?;
        Ok(created.id.unwrap_or_default())
    }
}
