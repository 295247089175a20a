use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{delete, get, patch, post, FromForm, State};

use crate::error::Result;
use crate::models::document::{from_json, to_json_array};
use crate::repository::user_repository::{Registration, UserRepository};
use crate::services::auth_guard::AuthenticatedUser;
use crate::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};

/// Registers an account once per email. A repeat registration answers 200 with
/// the id already on file instead of inserting a second user.
#[post("/user/new", data = "<new_user>")]
pub async fn create_user(
    user_repo: &State<UserRepository>,
    new_user: Json<Value>,
) -> Result<(Status, Json<InsertOutcome>)> {
    let user = from_json(new_user.into_inner())?;
    let (registration, outcome) = user_repo.create_user(user).await?;

    let status = match registration {
        Registration::Created => Status::Created,
        Registration::AlreadyExists => Status::Ok,
    };
    Ok((status, Json(outcome)))
}

#[get("/user/type/<email>")]
pub async fn get_user_type(user_repo: &State<UserRepository>, email: &str) -> Result<Json<Value>> {
    let user_type = user_repo.find_user_type(email).await?;
    Ok(Json(json!({ "type": user_type })))
}

#[get("/user/seller/verify/<email>")]
pub async fn get_seller_verification(
    user_repo: &State<UserRepository>,
    email: &str,
) -> Result<Json<Value>> {
    let verified = user_repo.is_verified(email).await?;
    Ok(Json(json!({ "isVerified": verified })))
}

#[derive(Debug, FromForm)]
pub struct UserFilter<'r> {
    #[field(name = "type")]
    user_type: Option<&'r str>,
}

#[get("/user/all?<filter..>")]
pub async fn get_all_users(
    _user: AuthenticatedUser,
    user_repo: &State<UserRepository>,
    filter: UserFilter<'_>,
) -> Result<Json<Value>> {
    let user_type = filter.user_type.filter(|t| !t.is_empty());
    let users = user_repo.get_all_users(user_type).await?;
    Ok(Json(to_json_array(users)))
}

#[patch("/user/verify/<id>")]
pub async fn toggle_user_verified(
    _user: AuthenticatedUser,
    user_repo: &State<UserRepository>,
    id: &str,
) -> Result<Json<UpdateOutcome>> {
    let outcome = user_repo.toggle_verified(id).await?;
    Ok(Json(outcome))
}

#[delete("/user/delete/<id>")]
pub async fn delete_user(
    _user: AuthenticatedUser,
    user_repo: &State<UserRepository>,
    id: &str,
) -> Result<Json<DeleteOutcome>> {
    let outcome = user_repo.delete_user(id).await?;
    Ok(Json(outcome))
}
