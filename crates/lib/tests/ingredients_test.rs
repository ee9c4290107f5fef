//! Tests for the ingredient resolver.

use mealie_bulk::import::resolve_ingredients;
use mealie_bulk_test_utils::{parsed_with_food_id, MockGateway};

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn empty_input_makes_no_remote_call() {
    let gateway = MockGateway::new();

    let resolved = resolve_ingredients(&gateway, &[]).await.unwrap();

    assert!(resolved.is_empty());
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn parses_all_lines_in_one_call_and_preserves_order() {
    let gateway = MockGateway::new();
    let input = lines(&["1 cup flour", "2 eggs", "pinch of salt"]);

    let resolved = resolve_ingredients(&gateway, &input).await.unwrap();

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0].ingredient.food.name, "1 cup flour");
    assert_eq!(resolved[2].ingredient.food.name, "pinch of salt");
    assert_eq!(gateway.call_count("parse_ingredients:"), 1);
}

#[tokio::test]
async fn backfills_ids_for_unknown_foods_only() {
    let gateway = MockGateway::new()
        .with_parsed("1 cup flour", parsed_with_food_id("flour", "food-flour"));
    let input = lines(&["1 cup flour", "2 eggs"]);

    let resolved = resolve_ingredients(&gateway, &input).await.unwrap();

    // The known food keeps its id; only the unknown one was created.
    assert_eq!(resolved[0].ingredient.food.id.as_deref(), Some("food-flour"));
    assert!(resolved[1].ingredient.food.id.is_some());
    assert_eq!(gateway.call_count("create_food:"), 1);
    assert_eq!(gateway.call_count("create_food:2 eggs"), 1);
}

#[tokio::test]
async fn food_create_failure_is_isolated_per_ingredient() {
    let gateway = MockGateway::new().fail_create("2 eggs");
    let input = lines(&["2 eggs", "pinch of salt"]);

    let resolved = resolve_ingredients(&gateway, &input).await.unwrap();

    // The failed food is passed through id-less; its sibling still resolved.
    assert_eq!(resolved.len(), 2);
    assert!(resolved[0].ingredient.food.id.is_none());
    assert!(resolved[1].ingredient.food.id.is_some());
}

#[tokio::test]
async fn parser_failure_propagates() {
    let gateway = MockGateway::new().fail_op("parse_ingredients");

    let result = resolve_ingredients(&gateway, &lines(&["2 eggs"])).await;

    assert!(result.is_err());
    assert_eq!(gateway.call_count("create_food:"), 0);
}
