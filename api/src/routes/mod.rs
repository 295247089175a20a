pub mod auth;
pub mod catalog;
pub mod my_products;
pub mod orders;
pub mod users;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, Request, Route};

use crate::models::api_response::ApiResponse;

pub fn all() -> Vec<Route> {
    rocket::routes![
        catalog::index,
        catalog::get_all_categories,
        catalog::get_category_products,
        catalog::get_products_by_type,
        catalog::get_blog_posts,
        my_products::get_my_products,
        my_products::get_wishlist,
        my_products::get_advertised,
        my_products::add_product,
        my_products::toggle_available,
        my_products::toggle_advertised,
        my_products::toggle_wishlisted,
        my_products::delete_product,
        users::create_user,
        users::get_user_type,
        users::get_seller_verification,
        users::get_all_users,
        users::toggle_user_verified,
        users::delete_user,
        orders::create_order,
        orders::get_orders,
        auth::issue_token,
    ]
}

pub fn catchers() -> Vec<rocket::Catcher> {
    rocket::catchers![
        bad_request,
        unauthorized,
        forbidden,
        not_found,
        unprocessable,
        internal_error,
        fallback
    ]
}

#[catch(400)]
fn bad_request(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure("400: Bad Request"))
}

#[catch(401)]
fn unauthorized(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure("401: unauthorized access"))
}

#[catch(403)]
fn forbidden(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure("403: forbidden access"))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure(format!("404: '{}' route not found", req.uri())))
}

#[catch(422)]
fn unprocessable(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure("422: request body is not valid JSON"))
}

#[catch(500)]
fn internal_error(_req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure("500: Internal Server Error"))
}

// Any other status, e.g. 413 for an oversized body
#[catch(default)]
fn fallback(status: Status, _req: &Request) -> Json<ApiResponse<()>> {
    Json(ApiResponse::failure(format!(
        "{}: {}",
        status.code,
        status.reason().unwrap_or("Error")
    )))
}
