use crate::store::Document;
use serde::{Deserialize, Serialize};

/// Profile fields read from a `users` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
}

impl UserProfile {
    /// Deserialize a profile from a store document. `None` when the document
    /// body is not an object of the expected shape.
    #[must_use]
    pub fn from_document(doc: &Document) -> Option<Self> {
        serde_json::from_value(doc.fields.clone()).ok()
    }
}
