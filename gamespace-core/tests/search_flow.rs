//! End-to-end flows over the loaders and the search state machine, using the
//! in-memory store the way the page wires the real one.

use async_trait::async_trait;
use futures::executor::block_on;
use gamespace_core::{
    DropdownView, GAMES_COLLECTION, MemoryStore, SearchEvent, SearchState, USERS_COLLECTION,
    load_catalog, resolve_profile,
};
use gamespace_core::store::{Document, DocumentStore, StoreError};
use serde_json::json;

struct FlakyProfileStore {
    inner: MemoryStore,
}

#[async_trait(?Send)]
impl DocumentStore for FlakyProfileStore {
    async fn read_one(&self, collection: &str, _: &str) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Request(format!("read of {collection} timed out")))
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.inner.read_all(collection).await
    }
}

fn lobby_store() -> MemoryStore {
    MemoryStore::new()
        .with_document(USERS_COLLECTION, "u1", json!({ "username": "magnus" }))
        .with_document(GAMES_COLLECTION, "1", json!({ "gameTitle": "Chess Arena" }))
        .with_document(GAMES_COLLECTION, "2", json!({ "gameTitle": "Speed Chess" }))
        .with_document(GAMES_COLLECTION, "3", json!({ "gameTitle": "Poker Night" }))
}

#[test]
fn typing_selecting_and_dismissing_walk_the_documented_scenario() {
    let store = lobby_store();
    let catalog = block_on(load_catalog(&store));

    let state = SearchState::new()
        .apply(SearchEvent::CatalogLoaded(catalog))
        .apply(SearchEvent::Focus)
        .apply(SearchEvent::Type("chess".into()));
    let titles: Vec<&str> = state.results().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Chess Arena", "Speed Chess"]);

    let pick = state.results()[0].clone();
    let state = state.apply(SearchEvent::SelectItem(pick));
    assert_eq!(state.query(), "Chess Arena");
    assert_eq!(state.dropdown_view(), DropdownView::Hidden);

    let state = state.apply(SearchEvent::Type("xyz".into()));
    assert_eq!(state.dropdown_view(), DropdownView::NoMatches);
    assert_eq!(state.selected(), None);
}

#[test]
fn profile_failure_leaves_search_fully_functional() {
    let store = FlakyProfileStore {
        inner: lobby_store(),
    };

    // Greeting side: blank name.
    assert_eq!(block_on(resolve_profile(&store, "u1")), None);

    // Search side: unaffected.
    let catalog = block_on(load_catalog(&store));
    let state = SearchState::new()
        .apply(SearchEvent::CatalogLoaded(catalog))
        .apply(SearchEvent::Type("poker".into()));
    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results()[0].title, "Poker Night");
}

#[test]
fn catalog_failure_degrades_every_query_to_no_matches() {
    struct Dead;

    #[async_trait(?Send)]
    impl DocumentStore for Dead {
        async fn read_one(&self, _: &str, _: &str) -> Result<Option<Document>, StoreError> {
            Err(StoreError::Request("boom".into()))
        }
        async fn read_all(&self, _: &str) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Request("boom".into()))
        }
    }

    let catalog = block_on(load_catalog(&Dead));
    let state = SearchState::new()
        .apply(SearchEvent::CatalogLoaded(catalog))
        .apply(SearchEvent::Type("anything".into()));
    assert_eq!(state.dropdown_view(), DropdownView::NoMatches);
}
