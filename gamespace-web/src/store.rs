use crate::dom;
use async_trait::async_trait;
use gamespace_core::store::{Document, DocumentStore, StoreError};
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Fetch-backed document-store client.
///
/// Wire shape: `GET {base}/{collection}` returns a JSON array of documents,
/// `GET {base}/{collection}/{id}` returns one document (404 when absent).
/// A document is a JSON object whose reserved `id` key is the document id;
/// every remaining key is a field.
pub struct HttpStore {
    base: String,
}

impl HttpStore {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, parts: &[&str]) -> String {
        let mut url = self.base.clone();
        for part in parts {
            url.push('/');
            // Handles and collection names are opaque; a `/` or `?` in one
            // must stay inside its own path segment.
            url.push_str(&urlencoding::encode(part));
        }
        url
    }
}

fn request_error(url: &str, err: &JsValue) -> StoreError {
    StoreError::Request(format!("GET {url}: {}", dom::js_error_message(err)))
}

fn document_from_value(collection: &str, value: Value) -> Result<Document, StoreError> {
    let malformed = |reason: &str| StoreError::Malformed {
        collection: collection.to_string(),
        reason: reason.to_string(),
    };
    let Value::Object(mut fields) = value else {
        return Err(malformed("document body is not an object"));
    };
    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        _ => return Err(malformed("document without a string `id`")),
    };
    Ok(Document::new(id, Value::Object(fields)))
}

#[async_trait(?Send)]
impl DocumentStore for HttpStore {
    async fn read_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.url(&[collection, id]);
        let response = dom::fetch_response(&url)
            .await
            .map_err(|err| request_error(&url, &err))?;
        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(StoreError::Request(format!(
                "GET {url}: status {}",
                response.status()
            )));
        }
        let body = dom::response_json(&response)
            .await
            .map_err(|err| request_error(&url, &err))?;
        document_from_value(collection, body).map(Some)
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let url = self.url(&[collection]);
        let response = dom::fetch_response(&url)
            .await
            .map_err(|err| request_error(&url, &err))?;
        if !response.ok() {
            return Err(StoreError::Request(format!(
                "GET {url}: status {}",
                response.status()
            )));
        }
        let body = dom::response_json(&response)
            .await
            .map_err(|err| request_error(&url, &err))?;
        let Value::Array(items) = body else {
            return Err(StoreError::Malformed {
                collection: collection.to_string(),
                reason: "collection body is not an array".to_string(),
            });
        };
        items
            .into_iter()
            .map(|item| document_from_value(collection, item))
            .collect()
    }
}
