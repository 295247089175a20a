use std::sync::Arc;

use mongodb::bson::{doc, Bson, Document};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::user::{self, COLLECTION};
use crate::store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};

/// Whether `create_user` stored a new account or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyExists,
}

pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        UserRepository { store }
    }

    /// Stores a user unless one with the same email exists already.
    pub async fn create_user(&self, new_user: Document) -> Result<(Registration, InsertOutcome)> {
        let email = user::email_of(&new_user)
            .ok_or_else(|| ApiError::BadRequest("user email is required".to_string()))?
            .to_string();

        if let Some(existing) = self.find_user_by_email(&email).await? {
            let id = existing.get("_id").cloned().unwrap_or(Bson::Null);
            return Ok((Registration::AlreadyExists, InsertOutcome::new(&id)));
        }

        let outcome = self
            .store
            .insert_one(COLLECTION, user::with_defaults(new_user))
            .await?;
        info!(%email, id = %outcome.inserted_id, "user registered");
        Ok((Registration::Created, outcome))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<Document>> {
        let filter = doc! { user::EMAIL: email };
        Ok(self.store.find_one(COLLECTION, filter).await?)
    }

    /// The user's role, `None` for unknown emails or users without one.
    pub async fn find_user_type(&self, email: &str) -> Result<Option<String>> {
        let user = self.find_user_by_email(email).await?;
        Ok(user.and_then(|u| u.get_str(user::TYPE).ok().map(str::to_string)))
    }

    pub async fn is_verified(&self, email: &str) -> Result<bool> {
        let user = self.find_user_by_email(email).await?;
        Ok(user
            .map(|u| u.get_bool(user::IS_VERIFIED).unwrap_or(false))
            .unwrap_or(false))
    }

    pub async fn get_all_users(&self, user_type: Option<&str>) -> Result<Vec<Document>> {
        let filter = match user_type {
            Some(t) => doc! { user::TYPE: t },
            None => doc! {},
        };
        Ok(self.store.find(COLLECTION, filter).await?)
    }

    pub async fn toggle_verified(&self, id: &str) -> Result<UpdateOutcome> {
        super::toggle_flag(self.store.as_ref(), COLLECTION, id, user::IS_VERIFIED).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<DeleteOutcome> {
        super::delete_by_id(self.store.as_ref(), COLLECTION, id).await
    }
}
