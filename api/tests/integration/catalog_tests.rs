//! Public catalog reads, CORS and fallback routes.

use mongodb::bson::doc;
use rocket::http::Status;
use serde_json::json;

use super::test_utils::TestApp;

#[rocket::async_test]
async fn test_liveness_string() {
    let app = TestApp::new().await;
    let response = app.client.get("/").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_string().await.as_deref(),
        Some("SavvyPulse server running...")
    );
}

#[rocket::async_test]
async fn test_categories_are_listed() {
    let app = TestApp::new().await;
    app.seed("categories", doc! { "name": "Laptops", "type": "laptop" }).await;
    app.seed("categories", doc! { "name": "Phones", "type": "phone" }).await;

    let (status, body) = app.get_json("/categories").await;
    assert_eq!(status, 200);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Laptops", "Phones"]);
}

#[rocket::async_test]
async fn test_empty_collections_return_empty_arrays() {
    let app = TestApp::new().await;
    assert_eq!(app.get_json("/categories").await, (200, json!([])));
    assert_eq!(app.get_json("/blog").await, (200, json!([])));
    assert_eq!(app.get_json("/products/anything").await, (200, json!([])));
}

#[rocket::async_test]
async fn test_new_product_is_listed_under_its_type() {
    let app = TestApp::new().await;
    let product = json!({ "type": "laptop", "name": "ThinkPad X1", "seller": "seller@shop.io" });

    let (status, created) = app
        .post_json_as("/products/new", "seller@shop.io", &product)
        .await;
    assert_eq!(status, 201);
    assert_eq!(created["acknowledged"], true);
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (status, listed) = app.get_json("/products/laptop").await;
    assert_eq!(status, 200);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["_id"], id);
    assert_eq!(listed[0]["name"], "ThinkPad X1");

    // first-revision path serves the same list
    let (_, by_category) = app.get_json("/categories/laptop").await;
    assert_eq!(by_category.as_array().unwrap().len(), 1);

    let (_, other) = app.get_json("/products/phone").await;
    assert_eq!(other, json!([]));
}

#[rocket::async_test]
async fn test_blog_posts_are_listed() {
    let app = TestApp::new().await;
    let id = app
        .seed("blog", doc! { "title": "Buying used laptops", "views": 12_i32 })
        .await;

    let (status, body) = app.get_json("/blog").await;
    assert_eq!(status, 200);
    assert_eq!(body[0]["_id"], id);
    assert_eq!(body[0]["title"], "Buying used laptops");
    assert_eq!(body[0]["views"], 12);
}

#[rocket::async_test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let (status, body) = app.get_json("/no/such/route").await;

    assert_eq!(status, 404);
    assert!(body["message"].as_str().unwrap().contains("/no/such/route"));
    assert!(body["result"].is_null());
}

#[rocket::async_test]
async fn test_cors_headers_and_preflight() {
    let app = TestApp::new().await;

    let response = app.client.get("/categories").dispatch().await;
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );

    let preflight = app.client.options("/products/new").dispatch().await;
    assert_eq!(preflight.status(), Status::Ok);
    assert_eq!(preflight.headers().get_one("Content-Type"), None);
    let methods = preflight
        .headers()
        .get_one("Access-Control-Allow-Methods")
        .unwrap();
    assert!(methods.contains("PATCH"));
    assert!(preflight
        .headers()
        .get_one("Access-Control-Allow-Headers")
        .unwrap()
        .contains("Authorization"));
    assert_eq!(preflight.into_string().await.unwrap_or_default(), "");
}
