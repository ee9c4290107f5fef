//! HTTP-level tests for `MealieClient` against a mocked Mealie instance.

use httpmock::{Method, MockServer};
use mealie_bulk::types::{Food, Recipe};
use mealie_bulk::{CatalogGateway, MealieClient, MealieConfig, MealieError};
use serde_json::json;

fn client_for(server: &MockServer) -> MealieClient {
    MealieClient::new(MealieConfig {
        base_url: server.base_url(),
        api_token: "test-token".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn get_tags_hits_the_organizers_endpoint_with_bearer_auth() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/api/organizers/tags")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(json!({
            "items": [{ "id": "t1", "name": "dinner" }],
            "total": 1, "page": 1, "perPage": 50
        }));
    });

    let tags = client_for(&server).get_tags().await.unwrap();

    mock.assert();
    assert_eq!(tags.items.len(), 1);
    assert_eq!(tags.items[0].name, "dinner");
}

#[tokio::test]
async fn create_tool_sends_the_households_field() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/organizers/tools")
            .json_body(json!({ "name": "Oven", "householdsWithTool": [] }));
        then.status(201)
            .json_body(json!({ "id": "tool-1", "name": "Oven" }));
    });

    let tool = client_for(&server).create_tool("Oven").await.unwrap();

    mock.assert();
    assert_eq!(tool.id, "tool-1");
}

#[tokio::test]
async fn create_recipe_unquotes_the_returned_slug() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/recipes/create/html-or-json")
            .json_body_partial(r#"{ "includeTags": true }"#);
        then.status(201).body("\"pancakes\"");
    });

    let recipe = Recipe {
        name: "Pancakes".to_string(),
        ..Recipe::default()
    };
    let slug = client_for(&server).create_recipe(&recipe).await.unwrap();

    mock.assert();
    assert_eq!(slug, "pancakes");
}

#[tokio::test]
async fn parse_ingredients_posts_the_nlp_parser_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/parser/ingredients")
            .json_body(json!({ "parser": "nlp", "ingredients": ["2 eggs"] }));
        then.status(200).json_body(json!([
            { "ingredient": { "food": { "name": "eggs" }, "quantity": 2.0, "unit": {} } }
        ]));
    });

    let parsed = client_for(&server)
        .parse_ingredients(&["2 eggs".to_string()])
        .await
        .unwrap();

    mock.assert();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].ingredient.food.name, "eggs");
    assert!(parsed[0].ingredient.food.id.is_none());
}

#[tokio::test]
async fn update_recipe_ingredients_patches_the_inner_ingredients() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PATCH)
            .path("/api/recipes/pancakes")
            .json_body_partial(r#"{ "recipeIngredient": [{ "food": { "name": "eggs" } }] }"#);
        then.status(200).json_body(json!({}));
    });

    let parsed = vec![mealie_bulk::types::ParsedIngredient {
        ingredient: mealie_bulk::types::Ingredient {
            food: Food {
                id: None,
                name: "eggs".to_string(),
            },
            quantity: 2.0,
            unit: json!({}),
            note: None,
        },
    }];
    client_for(&server)
        .update_recipe_ingredients("pancakes", &parsed)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn create_food_returns_the_new_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/api/foods");
        then.status(201)
            .json_body(json!({ "id": "food-9", "name": "salt" }));
    });

    let food = Food {
        id: None,
        name: "salt".to_string(),
    };
    let id = client_for(&server).create_food(&food).await.unwrap();

    assert_eq!(id, "food-9");
}

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/organizers/categories");
        then.status(500).body("boom");
    });

    let err = client_for(&server).get_categories().await.unwrap_err();

    match err {
        MealieError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn rejects_a_base_url_without_http_scheme() {
    let result = MealieClient::new(MealieConfig {
        base_url: "ftp://mealie.local".to_string(),
        api_token: "token".to_string(),
    });
    assert!(matches!(result, Err(MealieError::InvalidBaseUrl(_))));
}
