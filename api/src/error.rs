use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::api_response::ApiResponse;
use crate::store::StoreError;

/// Errors a route handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid document id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidId(_) | ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Store(_) | ApiError::Token(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!(method = %req.method(), uri = %req.uri(), "{}", self);
        } else {
            debug!(method = %req.method(), uri = %req.uri(), "{}", self);
        }

        let body = ApiResponse::<()>::failure(format!("{}: {}", status.code, self));
        (status, Json(body)).respond_to(req)
    }
}
