use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use tracing::warn;

use crate::jwt::{AuthError, TokenIssuer};

/// Caller proven by a valid `Authorization: Bearer <token>` header.
///
/// A missing or malformed header fails with 401, a token that does not verify
/// with 403. Either way the route handler is not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

pub(crate) fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(issuer) = request.rocket().state::<TokenIssuer>() else {
            return Outcome::Error((Status::InternalServerError, AuthError::NotConfigured));
        };

        let Some(header) = request.headers().get_one("Authorization") else {
            warn!(uri = %request.uri(), "rejected: no authorization header");
            return Outcome::Error((Status::Unauthorized, AuthError::MissingToken));
        };

        let token = match bearer_token(header) {
            Ok(token) => token,
            Err(e) => {
                warn!(uri = %request.uri(), "rejected: {}", e);
                return Outcome::Error((Status::Unauthorized, e));
            }
        };

        match issuer.verify_token(token) {
            Ok(claims) => Outcome::Success(AuthenticatedUser {
                email: claims.email,
            }),
            Err(e) => {
                warn!(uri = %request.uri(), "rejected: {}", e);
                Outcome::Error((Status::Forbidden, e))
            }
        }
    }
}
