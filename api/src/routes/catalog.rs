use rocket::serde::json::{Json, Value};
use rocket::{get, State};

use crate::error::Result;
use crate::models::document::to_json_array;
use crate::repository::{
    blog_repository::BlogRepository, category_repository::CategoryRepository,
    product_repository::ProductRepository,
};

pub const LIVENESS: &str = "SavvyPulse server running...";

#[get("/")]
pub fn index() -> &'static str {
    LIVENESS
}

#[get("/categories")]
pub async fn get_all_categories(category_repo: &State<CategoryRepository>) -> Result<Json<Value>> {
    let categories = category_repo.get_all_categories().await?;
    Ok(Json(to_json_array(categories)))
}

// Older clients browse a category through this path
#[get("/categories/<product_type>")]
pub async fn get_category_products(
    product_repo: &State<ProductRepository>,
    product_type: &str,
) -> Result<Json<Value>> {
    products_of_type(product_repo, product_type).await
}

#[get("/products/<product_type>")]
pub async fn get_products_by_type(
    product_repo: &State<ProductRepository>,
    product_type: &str,
) -> Result<Json<Value>> {
    products_of_type(product_repo, product_type).await
}

async fn products_of_type(product_repo: &ProductRepository, product_type: &str) -> Result<Json<Value>> {
    let products = product_repo.find_products_by_type(product_type).await?;
    Ok(Json(to_json_array(products)))
}

#[get("/blog")]
pub async fn get_blog_posts(blog_repo: &State<BlogRepository>) -> Result<Json<Value>> {
    let posts = blog_repo.get_all_posts().await?;
    Ok(Json(to_json_array(posts)))
}
