use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use tracing::debug;

use super::{DeleteOutcome, DocumentStore, InsertOutcome, StoreResult, UpdateOutcome};

/// [`DocumentStore`] over one MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(client: &Client, db_name: &str) -> Self {
        MongoStore {
            db: client.database(db_name),
        }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        debug!(collection, ?filter, "find");
        let cursor = self.collection(collection).find(filter, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        debug!(collection, ?filter, "find_one");
        let document = self.collection(collection).find_one(filter, None).await?;
        Ok(document)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertOutcome> {
        debug!(collection, "insert_one");
        let result = self.collection(collection).insert_one(document, None).await?;
        Ok(InsertOutcome::new(&result.inserted_id))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
    ) -> StoreResult<UpdateOutcome> {
        debug!(collection, ?filter, ?set, "update_one");
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": set }, None)
            .await?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(super::id_to_string),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteOutcome> {
        debug!(collection, ?filter, "delete_one");
        let result = self.collection(collection).delete_one(filter, None).await?;
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
