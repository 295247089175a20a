//! Shared setup for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;
use rocket::http::{ContentType, Header};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::Value;

use savvy_pulse_backend::build_rocket;
use savvy_pulse_backend::jwt::TokenIssuer;
use savvy_pulse_backend::store::{
    DeleteOutcome, DocumentStore, InsertOutcome, MemoryStore, StoreError, StoreResult,
    UpdateOutcome,
};

pub const TEST_SECRET: &str = "test-access-token-secret";

pub struct TestApp {
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let rocket = build_rocket(store.clone(), TokenIssuer::new(TEST_SECRET, 3600));
        let client = Client::tracked(rocket)
            .await
            .expect("valid rocket instance");
        TestApp { client, store }
    }

    /// Inserts a document directly and returns its id as hex.
    pub async fn seed(&self, collection: &str, document: Document) -> String {
        self.store
            .insert_one(collection, document)
            .await
            .expect("seed insert")
            .inserted_id
    }

    pub async fn get_json(&self, uri: &str) -> (u16, Value) {
        let response = self.client.get(uri.to_string()).dispatch().await;
        into_status_and_json(response).await
    }

    pub async fn get_json_as(&self, uri: &str, email: &str) -> (u16, Value) {
        let response = self
            .client
            .get(uri.to_string())
            .header(bearer(email))
            .dispatch()
            .await;
        into_status_and_json(response).await
    }

    pub async fn post_json_as(&self, uri: &str, email: &str, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .post(uri.to_string())
            .header(ContentType::JSON)
            .header(bearer(email))
            .body(body.to_string())
            .dispatch()
            .await;
        into_status_and_json(response).await
    }

    pub async fn patch_as(&self, uri: &str, email: &str) -> (u16, Value) {
        let response = self
            .client
            .patch(uri.to_string())
            .header(bearer(email))
            .dispatch()
            .await;
        into_status_and_json(response).await
    }

    pub async fn delete_as(&self, uri: &str, email: &str) -> (u16, Value) {
        let response = self
            .client
            .delete(uri.to_string())
            .header(bearer(email))
            .dispatch()
            .await;
        into_status_and_json(response).await
    }
}

/// `Authorization` header carrying a token signed with the test secret.
pub fn bearer(email: &str) -> Header<'static> {
    let token = TokenIssuer::new(TEST_SECRET, 3600)
        .create_token(email)
        .expect("token");
    Header::new("Authorization", format!("Bearer {}", token))
}

pub async fn into_status_and_json(response: LocalResponse<'_>) -> (u16, Value) {
    let status = response.status().code;
    let body = response.into_json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Failing Store
// =============================================================================

/// A store whose every call fails, standing in for an unreachable database.
/// Counts the calls it receives.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self, collection: &str) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::DuplicateKey {
            collection: collection.to_string(),
            key: "unavailable".to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find(&self, collection: &str, _filter: Document) -> StoreResult<Vec<Document>> {
        self.fail(collection)
    }

    async fn find_one(&self, collection: &str, _filter: Document) -> StoreResult<Option<Document>> {
        self.fail(collection)
    }

    async fn insert_one(&self, collection: &str, _document: Document) -> StoreResult<InsertOutcome> {
        self.fail(collection)
    }

    async fn update_one(
        &self,
        collection: &str,
        _filter: Document,
        _set: Document,
    ) -> StoreResult<UpdateOutcome> {
        self.fail(collection)
    }

    async fn delete_one(&self, collection: &str, _filter: Document) -> StoreResult<DeleteOutcome> {
        self.fail(collection)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.fail("admin")
    }
}

/// A client over [`FailingStore`], returned with the store for call counting.
pub async fn failing_client() -> (Client, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    let rocket = build_rocket(store.clone(), TokenIssuer::new(TEST_SECRET, 3600));
    let client = Client::tracked(rocket)
        .await
        .expect("valid rocket instance");
    (client, store)
}
