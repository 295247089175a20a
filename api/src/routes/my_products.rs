use rocket::http::Status;
use rocket::serde::json::{Json, Value};
use rocket::{delete, get, patch, post, State};

use crate::error::Result;
use crate::models::document::{from_json, to_json_array};
use crate::models::product::ProductFlag;
use crate::repository::product_repository::ProductRepository;
use crate::services::auth_guard::AuthenticatedUser;
use crate::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};

#[get("/my-products/wishlist")]
pub async fn get_wishlist(product_repo: &State<ProductRepository>) -> Result<Json<Value>> {
    let products = product_repo
        .find_flagged_products(ProductFlag::WishListed)
        .await?;
    Ok(Json(to_json_array(products)))
}

#[get("/my-products/advertised")]
pub async fn get_advertised(product_repo: &State<ProductRepository>) -> Result<Json<Value>> {
    let products = product_repo
        .find_flagged_products(ProductFlag::Advertised)
        .await?;
    Ok(Json(to_json_array(products)))
}

// A seller's own listings
#[get("/my-products/<email>")]
pub async fn get_my_products(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    email: &str,
) -> Result<Json<Value>> {
    let products = product_repo.find_products_by_seller(email).await?;
    Ok(Json(to_json_array(products)))
}

#[post("/products/new", data = "<new_product>")]
pub async fn add_product(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    new_product: Json<Value>,
) -> Result<(Status, Json<InsertOutcome>)> {
    let product = from_json(new_product.into_inner())?;
    let outcome = product_repo.create_product(product).await?;
    Ok((Status::Created, Json(outcome)))
}

#[patch("/my-products/sell/<id>")]
pub async fn toggle_available(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    id: &str,
) -> Result<Json<UpdateOutcome>> {
    let outcome = product_repo
        .toggle_product_flag(id, ProductFlag::Available)
        .await?;
    Ok(Json(outcome))
}

#[patch("/my-products/advertisements/<id>")]
pub async fn toggle_advertised(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    id: &str,
) -> Result<Json<UpdateOutcome>> {
    let outcome = product_repo
        .toggle_product_flag(id, ProductFlag::Advertised)
        .await?;
    Ok(Json(outcome))
}

#[patch("/my-products/wishlist/new/<id>")]
pub async fn toggle_wishlisted(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    id: &str,
) -> Result<Json<UpdateOutcome>> {
    let outcome = product_repo
        .toggle_product_flag(id, ProductFlag::WishListed)
        .await?;
    Ok(Json(outcome))
}

#[delete("/my-products/delete/<id>")]
pub async fn delete_product(
    _user: AuthenticatedUser,
    product_repo: &State<ProductRepository>,
    id: &str,
) -> Result<Json<DeleteOutcome>> {
    let outcome = product_repo.delete_product(id).await?;
    Ok(Json(outcome))
}
