use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failures surfaced by a document-store backend.
///
/// A missing document is not an error; `read_one` reports it as `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),
    #[error("malformed document in `{collection}`: {reason}")]
    Malformed { collection: String, reason: String },
}

/// A single document: a store-assigned id plus a JSON object of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Read a string field, if present and a string.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Read-only client contract against the external document store.
///
/// Futures are not `Send`: everything runs on the single-threaded browser
/// event loop, and native test executors handle local futures fine.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Fetch one document by id. Absence is `Ok(None)`, not an error.
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Fetch every document in a collection, in store order.
    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}

/// In-memory store used by tests and host applications that embed the page
/// without a remote backend. Documents keep insertion order per collection.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: BTreeMap<String, Vec<Document>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: &str, id: impl Into<String>, fields: Value) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id, fields));
    }

    #[must_use]
    pub fn with_document(mut self, collection: &str, id: impl Into<String>, fields: Value) -> Self {
        self.insert(collection, id, fields);
        self
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
