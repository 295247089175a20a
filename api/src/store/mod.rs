//! Document storage behind the repositories.
//!
//! Every route ends in exactly one call on a [`DocumentStore`]. The production
//! implementation talks to MongoDB; [`MemoryStore`] keeps collections in process
//! and backs the test suite and the `--in-memory-store` mode.

pub mod memory_store;
pub mod mongo_store;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use thiserror::Error;

pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("duplicate key {key} in collection '{collection}'")]
    DuplicateKey { collection: String, key: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result of `insert_one`, shaped like the driver's reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertOutcome {
    pub fn new(inserted_id: &Bson) -> Self {
        InsertOutcome {
            acknowledged: true,
            inserted_id: id_to_string(inserted_id),
        }
    }
}

/// Result of `update_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

/// Result of `delete_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// One-call-per-operation access to named collections.
///
/// Filters are plain equality documents (`{ "field": value, ... }`). Updates take
/// the fields to `$set`; no other update operators are used by the service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertOutcome>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
    ) -> StoreResult<UpdateOutcome>;

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteOutcome>;

    /// Round-trip to the backend, used once at startup.
    async fn ping(&self) -> StoreResult<()>;
}

/// Renders an `_id` the way clients see it: ObjectIds as hex, anything else as JSON text.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}
