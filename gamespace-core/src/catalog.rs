use serde::{Deserialize, Serialize};

/// One entry in the game catalog, as loaded from the `onlineGames` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
}

impl GameRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Case-insensitive substring filter over the catalog.
///
/// The query is literal text, never a pattern. Catalog order is preserved.
#[must_use]
pub fn filter_catalog(catalog: &[GameRecord], query: &str) -> Vec<GameRecord> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|game| game.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
