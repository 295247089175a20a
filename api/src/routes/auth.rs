use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{get, State};
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::jwt::TokenIssuer;
use crate::repository::user_repository::UserRepository;

/// Issues an access token for a registered email. Unknown emails get 403 and an
/// empty token.
#[get("/jwt?<email>")]
pub async fn issue_token(
    user_repo: &State<UserRepository>,
    issuer: &State<TokenIssuer>,
    email: Option<&str>,
) -> Result<(Status, Json<Value>)> {
    let email = email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("email query parameter is required".to_string()))?;

    if user_repo.find_user_by_email(email).await?.is_none() {
        warn!(%email, "token requested for unknown email");
        return Ok((Status::Forbidden, Json(json!({ "accessToken": "" }))));
    }

    let token = issuer.create_token(email)?;
    info!(%email, "access token issued");
    Ok((Status::Ok, Json(json!({ "accessToken": token }))))
}
