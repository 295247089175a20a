use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::error::Result;
use crate::models::product::{self, ProductFlag, COLLECTION};
use crate::store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};

pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        ProductRepository { store }
    }

    pub async fn find_products_by_type(&self, product_type: &str) -> Result<Vec<Document>> {
        let filter = doc! { product::TYPE: product_type };
        Ok(self.store.find(COLLECTION, filter).await?)
    }

    pub async fn find_products_by_seller(&self, seller: &str) -> Result<Vec<Document>> {
        let filter = doc! { product::SELLER: seller };
        Ok(self.store.find(COLLECTION, filter).await?)
    }

    /// Products with `flag` set, e.g. the wish list or the advertised shelf.
    pub async fn find_flagged_products(&self, flag: ProductFlag) -> Result<Vec<Document>> {
        let filter = doc! { flag.field(): true };
        Ok(self.store.find(COLLECTION, filter).await?)
    }

    pub async fn create_product(&self, product: Document) -> Result<InsertOutcome> {
        let product = product::with_defaults(product);
        Ok(self.store.insert_one(COLLECTION, product).await?)
    }

    pub async fn toggle_product_flag(&self, id: &str, flag: ProductFlag) -> Result<UpdateOutcome> {
        super::toggle_flag(self.store.as_ref(), COLLECTION, id, flag.field()).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<DeleteOutcome> {
        super::delete_by_id(self.store.as_ref(), COLLECTION, id).await
    }
}
