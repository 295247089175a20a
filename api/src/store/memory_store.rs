use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{
    id_to_string, DeleteOutcome, DocumentStore, InsertOutcome, StoreError, StoreResult,
    UpdateOutcome,
};

/// In-process [`DocumentStore`]. Collections keep insertion order and are created
/// on first write. Contents are lost when the process exits.
///
/// Filters match by exact BSON equality on top-level fields only. Unlike MongoDB
/// there is no array-contains matching and no cross-type numeric equality
/// (`Int32(1)` does not match `Double(1.0)`), which the service's string and
/// boolean filters never rely on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(found)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)).cloned()))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertOutcome> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        // _id goes first, as the driver does when it generates one
        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));
        if docs.iter().any(|doc| doc.get("_id") == Some(&id)) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                key: id_to_string(&id),
            });
        }

        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        docs.push(stored);

        Ok(InsertOutcome::new(&id))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
    ) -> StoreResult<UpdateOutcome> {
        let mut collections = self.collections.write().await;
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| matches(doc, &filter)));

        let Some(doc) = target else {
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
            });
        };

        let mut modified = false;
        for (key, value) in set {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_id: None,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteOutcome> {
        let mut collections = self.collections.write().await;
        let deleted = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|doc| matches(doc, &filter)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: deleted,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
