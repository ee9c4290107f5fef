//! Unit-level tests for the reference reconciler.

use mealie_bulk::import::reconcile;
use mealie_bulk::types::{Category, Tag};
use mealie_bulk_test_utils::MockGateway;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn existing_names_are_never_created() {
    let gateway = MockGateway::new().with_tag("dinner").with_tag("quick");

    let map = reconcile::<Tag, _>(&gateway, names(&["dinner", "quick"]))
        .await
        .unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(gateway.call_count("create_tag:"), 0);
}

#[tokio::test]
async fn missing_names_are_created_in_request_order() {
    let gateway = MockGateway::new().with_tag("dinner");

    let map = reconcile::<Tag, _>(&gateway, names(&["dinner", "vegan", "quick"]))
        .await
        .unwrap();

    assert_eq!(map.len(), 3);
    assert!(map.contains_key("vegan"));
    assert!(map.contains_key("quick"));
    let creates: Vec<_> = gateway
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("create_tag:"))
        .collect();
    assert_eq!(creates, vec!["create_tag:vegan", "create_tag:quick"]);
}

#[tokio::test]
async fn create_failure_leaves_the_name_absent() {
    let gateway = MockGateway::new().fail_create("vegan");

    let map = reconcile::<Category, _>(&gateway, names(&["vegan", "quick"]))
        .await
        .unwrap();

    // The failed name is simply missing; the next one was still created.
    assert!(!map.contains_key("vegan"));
    assert!(map.contains_key("quick"));
}

#[tokio::test]
async fn list_failure_propagates() {
    let gateway = MockGateway::new().fail_op("get_categories");

    let result = reconcile::<Category, _>(&gateway, names(&["Dinner"])).await;

    assert!(result.is_err());
    assert_eq!(gateway.call_count("create_category:"), 0);
}

#[tokio::test]
async fn remote_duplicate_names_collapse_to_one_entry() {
    // The remote catalog itself holds two tags with the same name; the later
    // one wins when indexing.
    let gateway = MockGateway::new().with_tag("dinner").with_tag("dinner");

    let map = reconcile::<Tag, _>(&gateway, Vec::new()).await.unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["dinner"].id, "tag-2");
}
