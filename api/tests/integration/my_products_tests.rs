//! Seller listings, flag toggles and deletes.

use mongodb::bson::{doc, oid::ObjectId};
use savvy_pulse_backend::store::DocumentStore;
use serde_json::json;

use super::test_utils::TestApp;

const SELLER: &str = "seller@shop.io";

async fn stored_flag(app: &TestApp, id: &str, field: &str) -> Option<bool> {
    let oid = ObjectId::parse_str(id).unwrap();
    app.store
        .find_one("products", doc! { "_id": oid })
        .await
        .unwrap()
        .and_then(|p| p.get_bool(field).ok())
}

#[rocket::async_test]
async fn test_new_products_get_default_flags() {
    let app = TestApp::new().await;
    let (_, created) = app
        .post_json_as("/products/new", SELLER, &json!({ "type": "camera", "seller": SELLER }))
        .await;
    let id = created["insertedId"].as_str().unwrap();

    assert_eq!(stored_flag(&app, id, "isAvailable").await, Some(true));
    assert_eq!(stored_flag(&app, id, "isAdvertised").await, Some(false));
    assert_eq!(stored_flag(&app, id, "isWishListed").await, Some(false));
}

#[rocket::async_test]
async fn test_sell_toggle_twice_restores_availability() {
    let app = TestApp::new().await;
    let id = app
        .seed("products", doc! { "type": "phone", "seller": SELLER, "isAvailable": true })
        .await;
    let uri = format!("/my-products/sell/{}", id);

    let (status, first) = app.patch_as(&uri, SELLER).await;
    assert_eq!(status, 200);
    assert_eq!(first["matchedCount"], 1);
    assert_eq!(first["modifiedCount"], 1);
    assert_eq!(stored_flag(&app, &id, "isAvailable").await, Some(false));

    app.patch_as(&uri, SELLER).await;
    assert_eq!(stored_flag(&app, &id, "isAvailable").await, Some(true));
}

#[rocket::async_test]
async fn test_missing_flag_toggles_to_true() {
    let app = TestApp::new().await;
    let id = app.seed("products", doc! { "type": "phone" }).await;

    app.patch_as(&format!("/my-products/wishlist/new/{}", id), SELLER)
        .await;
    assert_eq!(stored_flag(&app, &id, "isWishListed").await, Some(true));
}

#[rocket::async_test]
async fn test_wishlist_and_advertised_shelves() {
    let app = TestApp::new().await;
    let wished = app
        .seed("products", doc! { "name": "tablet", "isWishListed": false, "isAdvertised": false })
        .await;
    let advertised = app
        .seed("products", doc! { "name": "monitor", "isWishListed": false, "isAdvertised": false })
        .await;

    app.patch_as(&format!("/my-products/wishlist/new/{}", wished), SELLER)
        .await;
    app.patch_as(&format!("/my-products/advertisements/{}", advertised), SELLER)
        .await;

    let (status, wishlist) = app.get_json("/my-products/wishlist").await;
    assert_eq!(status, 200);
    assert_eq!(wishlist.as_array().unwrap().len(), 1);
    assert_eq!(wishlist[0]["name"], "tablet");

    let (status, shelf) = app.get_json("/my-products/advertised").await;
    assert_eq!(status, 200);
    assert_eq!(shelf.as_array().unwrap().len(), 1);
    assert_eq!(shelf[0]["name"], "monitor");
}

#[rocket::async_test]
async fn test_my_products_filters_by_seller() {
    let app = TestApp::new().await;
    app.seed("products", doc! { "name": "mine", "seller": SELLER }).await;
    app.seed("products", doc! { "name": "theirs", "seller": "other@shop.io" }).await;

    let (status, body) = app
        .get_json_as(&format!("/my-products/{}", SELLER), SELLER)
        .await;
    assert_eq!(status, 200);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "mine");
}

#[rocket::async_test]
async fn test_toggle_rejects_bad_and_unknown_ids() {
    let app = TestApp::new().await;

    let (status, body) = app.patch_as("/my-products/sell/not-an-id", SELLER).await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("not-an-id"));

    let unknown = ObjectId::new().to_hex();
    let (status, _) = app
        .patch_as(&format!("/my-products/advertisements/{}", unknown), SELLER)
        .await;
    assert_eq!(status, 404);
}

#[rocket::async_test]
async fn test_delete_product() {
    let app = TestApp::new().await;
    let id = app.seed("products", doc! { "name": "old phone" }).await;
    let uri = format!("/my-products/delete/{}", id);

    let (status, body) = app.delete_as(&uri, SELLER).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "acknowledged": true, "deletedCount": 1 }));
    assert_eq!(app.store.count("products").await, 0);

    let (status, body) = app.delete_as(&uri, SELLER).await;
    assert_eq!(status, 200);
    assert_eq!(body["deletedCount"], 0);
}

#[rocket::async_test]
async fn test_product_body_must_be_an_object() {
    let app = TestApp::new().await;
    let (status, _) = app
        .post_json_as("/products/new", SELLER, &json!(["not", "an", "object"]))
        .await;
    assert_eq!(status, 400);
    assert_eq!(app.store.count("products").await, 0);
}
