use rocket::http::Status;
use rocket::serde::json::{Json, Value};
use rocket::{get, post, State};

use crate::error::{ApiError, Result};
use crate::models::document::{from_json, to_json_array};
use crate::repository::order_repository::OrderRepository;
use crate::services::auth_guard::AuthenticatedUser;
use crate::store::InsertOutcome;

#[post("/orders", data = "<new_order>")]
pub async fn create_order(
    _user: AuthenticatedUser,
    order_repo: &State<OrderRepository>,
    new_order: Json<Value>,
) -> Result<(Status, Json<InsertOutcome>)> {
    let order = from_json(new_order.into_inner())?;
    let outcome = order_repo.create_order(order).await?;
    Ok((Status::Created, Json(outcome)))
}

#[get("/orders?<email>")]
pub async fn get_orders(
    _user: AuthenticatedUser,
    order_repo: &State<OrderRepository>,
    email: Option<&str>,
) -> Result<Json<Value>> {
    let email = email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("email query parameter is required".to_string()))?;
    let orders = order_repo.find_orders_by_email(email).await?;
    Ok(Json(to_json_array(orders)))
}
