pub mod blog_repository;
pub mod category_repository;
pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

use mongodb::bson::{doc, Document};

use crate::error::{ApiError, Result};
use crate::models::document::parse_id;
use crate::store::{DeleteOutcome, DocumentStore, UpdateOutcome};

/// Flips a boolean field on the document with the given id.
///
/// Reads, negates, writes back. A missing field counts as `false`. Two concurrent
/// toggles on the same document can both read the old value.
pub(crate) async fn toggle_flag(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
    field: &str,
) -> Result<UpdateOutcome> {
    let oid = parse_id(id)?;
    let filter = doc! { "_id": oid };

    let current = store
        .find_one(collection, filter.clone())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} document {}", collection, id)))?;
    let flipped = !flag_value(&current, field);

    let outcome = store
        .update_one(collection, filter, doc! { field: flipped })
        .await?;
    Ok(outcome)
}

pub(crate) async fn delete_by_id(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
) -> Result<DeleteOutcome> {
    let oid = parse_id(id)?;
    Ok(store.delete_one(collection, doc! { "_id": oid }).await?)
}

fn flag_value(document: &Document, field: &str) -> bool {
    document.get_bool(field).unwrap_or(false)
}
