use super::*;
use crate::{model::inventory::AdjustStockDto, server::controller::inventory};

/// Tests deleting an item.
///
/// Expected: 204 with an empty body, then 404 on a second delete
#[tokio::test]
async fn delete_returns_no_content() {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let lead = factory::create_shop_lead(db).await.unwrap();
    let item = factory::create_inventory_item(db).await.unwrap();

    let (status, body) = respond(
        inventory::delete_inventory_item(
            State(state.clone()),
            bearer_headers(&state, &lead),
            Path(item.id),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = respond(
        inventory::delete_inventory_item(
            State(state.clone()),
            bearer_headers(&state, &lead),
            Path(item.id),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests a stock adjustment without a delta.
///
/// Expected: 400 naming `delta`
#[tokio::test]
async fn adjust_requires_delta() {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let mechanic = factory::create_mechanic(db).await.unwrap();
    let item = factory::create_inventory_item(db).await.unwrap();

    let (status, body) = respond(
        inventory::adjust_inventory_item(
            State(state.clone()),
            bearer_headers(&state, &mechanic),
            Path(item.id),
            Json(AdjustStockDto { delta: None }),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["missing_fields"],
        serde_json::json!(["delta"])
    );
}

/// Tests that clients cannot see inventory.
///
/// Expected: 403
#[tokio::test]
async fn clients_cannot_adjust_stock() {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = app_state(db);

    let client = factory::create_user(db).await.unwrap();
    let item = factory::create_inventory_item(db).await.unwrap();

    let (status, _) = respond(
        inventory::adjust_inventory_item(
            State(state.clone()),
            bearer_headers(&state, &client),
            Path(item.id),
            Json(AdjustStockDto { delta: Some(-1) }),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
