//! Integration tests for checkout and order history.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use threadline_core::repository::ProductRepository;
use threadline_test_support::{demo_product, user_named};
use uuid::Uuid;

#[tokio::test]
async fn test_full_checkout_flow_snapshots_the_cart_into_an_order() {
    let app = common::build_test_app();
    let shirt = demo_product("Classic Cotton T-Shirt", 2999);
    let user = user_named("Ada");
    app.products.insert(shirt.clone());
    app.users.insert(user.clone());

    // Two adds with the same (product, size) key merge into one line of 3.
    let body = json!({ "productId": shirt.id, "size": "M", "quantity": 2 });
    common::post_json(&app, "/api/cart", Some(user.id), &body).await;
    let body = json!({ "productId": shirt.id, "size": "M", "quantity": 1 });
    common::post_json(&app, "/api/cart", Some(user.id), &body).await;

    let (status, json) = common::post_empty(&app, "/api/orders", Some(user.id)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Order placed successfully");
    assert_eq!(json["data"]["totalPrice"], "89.97");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["user"]["email"], "ada@example.test");

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["price"], "29.99");
    assert_eq!(items[0]["name"], "Classic Cotton T-Shirt");

    // The cart is emptied by checkout.
    let (_, json) = common::get_json(&app, "/api/cart", Some(user.id)).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // The confirmation send is spawned; give it a beat to land.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let sent = app.sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "ada@example.test");
}

#[tokio::test]
async fn test_checkout_with_an_empty_cart_is_rejected() {
    let app = common::build_test_app();
    let user = user_named("Ada");
    app.users.insert(user.clone());

    let (status, json) = common::post_empty(&app, "/api/orders", Some(user.id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Cart is empty");
    assert!(app.orders.all().is_empty());
}

#[tokio::test]
async fn test_order_snapshot_survives_catalog_deletion() {
    let app = common::build_test_app();
    let shirt = demo_product("Classic Cotton T-Shirt", 2999);
    let user = user_named("Ada");
    app.products.insert(shirt.clone());
    app.users.insert(user.clone());

    let body = json!({ "productId": shirt.id, "size": "M" });
    common::post_json(&app, "/api/cart", Some(user.id), &body).await;
    let (_, placed) = common::post_empty(&app, "/api/orders", Some(user.id)).await;
    let order_id = placed["data"]["id"].as_str().unwrap().to_string();

    // Wipe the catalog after checkout.
    app.products.delete_all().await.unwrap();

    let uri = format!("/api/orders/{order_id}");
    let (status, json) = common::get_json(&app, &uri, Some(user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["totalPrice"], "29.99");
    assert_eq!(json["data"]["items"][0]["price"], "29.99");
    assert_eq!(json["data"]["items"][0]["name"], "Classic Cotton T-Shirt");
    // The expanded product record is gone; the snapshot stays authoritative.
    assert!(json["data"]["items"][0]["product"].is_null());
}

#[tokio::test]
async fn test_order_history_is_per_user_and_owner_only() {
    let app = common::build_test_app();
    let shirt = demo_product("Classic Cotton T-Shirt", 2999);
    let ada = user_named("Ada");
    let ben = user_named("Ben");
    app.products.insert(shirt.clone());
    app.users.insert(ada.clone());
    app.users.insert(ben.clone());

    let body = json!({ "productId": shirt.id, "size": "M" });
    common::post_json(&app, "/api/cart", Some(ada.id), &body).await;
    let (_, placed) = common::post_empty(&app, "/api/orders", Some(ada.id)).await;
    let order_id = placed["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = common::get_json(&app, "/api/orders", Some(ada.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let (status, json) = common::get_json(&app, "/api/orders", Some(ben.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_array().unwrap().is_empty());

    let uri = format!("/api/orders/{order_id}");
    let (status, json) = common::get_json(&app, &uri, Some(ben.id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Not authorized to view this order");
}

#[tokio::test]
async fn test_unknown_order_is_a_404_envelope() {
    let app = common::build_test_app();
    let user = user_named("Ada");
    app.users.insert(user.clone());

    let uri = format!("/api/orders/{}", Uuid::new_v4());
    let (status, json) = common::get_json(&app, &uri, Some(user.id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Order not found");
}

#[tokio::test]
async fn test_cart_clear_failure_after_insert_leaves_both_writes_visible() {
    let app = common::build_test_app();
    let shirt = demo_product("Classic Cotton T-Shirt", 2999);
    let user = user_named("Ada");
    app.products.insert(shirt.clone());
    app.users.insert(user.clone());

    let body = json!({ "productId": shirt.id, "size": "M" });
    common::post_json(&app, "/api/cart", Some(user.id), &body).await;
    app.users.fail_next_save_cart();

    let (status, json) = common::post_empty(&app, "/api/orders", Some(user.id)).await;

    // The two checkout writes are not transactional: the order insert
    // committed before the cart clear failed, so the caller sees a 500
    // while the order exists and the cart is still populated.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Server error");
    assert_eq!(json["error"], "injected datastore failure");
    assert_eq!(app.orders.all().len(), 1);
    assert_eq!(app.users.cart_of(user.id).len(), 1);
}
