use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::error::Result;
use crate::store::{DocumentStore, InsertOutcome};

const COLLECTION: &str = "orders";

pub struct OrderRepository {
    store: Arc<dyn DocumentStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        OrderRepository { store }
    }

    pub async fn create_order(&self, order: Document) -> Result<InsertOutcome> {
        Ok(self.store.insert_one(COLLECTION, order).await?)
    }

    pub async fn find_orders_by_email(&self, email: &str) -> Result<Vec<Document>> {
        Ok(self.store.find(COLLECTION, doc! { "email": email }).await?)
    }
}
