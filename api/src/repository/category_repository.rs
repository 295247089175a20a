use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::error::Result;
use crate::store::DocumentStore;

const COLLECTION: &str = "categories";

pub struct CategoryRepository {
    store: Arc<dyn DocumentStore>,
}

impl CategoryRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        CategoryRepository { store }
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(COLLECTION, doc! {}).await?)
    }
}
