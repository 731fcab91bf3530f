use super::*;
use crate::services::cart::tests::request;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn list_cart_starts_empty() {
    let state = test_app_state();
    let Json(body) = list_cart(State(state)).await;
    assert!(body.items.is_empty());
}

#[tokio::test]
async fn add_cart_item_returns_created_with_item() {
    let state = test_app_state();
    let (status, Json(body)) = add_cart_item(State(state.clone()), Json(request("modern-red", "S-1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.status, "added");
    assert_eq!(body.item.item_id, 1);
    assert_eq!(body.item.template_id, "modern-red");

    let Json(listed) = list_cart(State(state)).await;
    assert_eq!(listed.items, vec![body.item]);
}

#[tokio::test]
async fn remove_cart_item_deletes_only_that_item() {
    let state = test_app_state();
    let (_, Json(a)) = add_cart_item(State(state.clone()), Json(request("modern-red", "S-1"))).await;
    let (_, Json(b)) = add_cart_item(State(state.clone()), Json(request("classic-blue", "S-1"))).await;

    let Json(resp) = remove_cart_item(State(state.clone()), Path(a.item.item_id)).await.unwrap();
    assert_eq!(resp["status"], "deleted");

    let Json(listed) = list_cart(State(state)).await;
    assert_eq!(listed.items, vec![b.item]);
}

#[tokio::test]
async fn remove_unknown_item_is_not_found() {
    let state = test_app_state();
    let err = remove_cart_item(State(state), Path(99)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_cart_reports_removed_count() {
    let state = test_app_state();
    add_cart_item(State(state.clone()), Json(request("modern-red", "S-1"))).await;
    add_cart_item(State(state.clone()), Json(request("modern-red", "S-2"))).await;

    let Json(resp) = clear_cart(State(state.clone())).await;
    assert_eq!(resp.status, "cleared");
    assert_eq!(resp.removed, 2);
    let Json(listed) = list_cart(State(state)).await;
    assert!(listed.items.is_empty());
}
