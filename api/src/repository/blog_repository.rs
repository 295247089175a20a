use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::error::Result;
use crate::store::DocumentStore;

const COLLECTION: &str = "blog";

pub struct BlogRepository {
    store: Arc<dyn DocumentStore>,
}

impl BlogRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        BlogRepository { store }
    }

    pub async fn get_all_posts(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(COLLECTION, doc! {}).await?)
    }
}
