use crate::catalog::GameRecord;
use crate::profile::UserProfile;
use crate::store::DocumentStore;

pub const USERS_COLLECTION: &str = "users";
pub const GAMES_COLLECTION: &str = "onlineGames";
pub const GAME_TITLE_FIELD: &str = "gameTitle";

/// Resolve the profile behind an authenticated-user handle.
///
/// One read, no retry. A missing document and a failed read both degrade to
/// `None` with a diagnostic; the caller renders a blank name either way.
pub async fn resolve_profile(store: &dyn DocumentStore, handle: &str) -> Option<UserProfile> {
    match store.read_one(USERS_COLLECTION, handle).await {
        Ok(Some(doc)) => {
            let profile = UserProfile::from_document(&doc);
            if profile.is_none() {
                log::warn!("user document {handle} has an unexpected shape");
            }
            profile
        }
        Ok(None) => {
            log::warn!("no user document for handle {handle}");
            None
        }
        Err(err) => {
            log::warn!("failed to read user profile for {handle}: {err}");
            None
        }
    }
}

/// Load the whole game catalog, once per mount.
///
/// A failed read degrades to an empty catalog with a diagnostic; every search
/// then lands on the "No games found." branch. Documents without a title
/// field are skipped rather than rendered blank.
pub async fn load_catalog(store: &dyn DocumentStore) -> Vec<GameRecord> {
    match store.read_all(GAMES_COLLECTION).await {
        Ok(docs) => docs
            .into_iter()
            .filter_map(|doc| match doc.field_str(GAME_TITLE_FIELD) {
                Some(title) => Some(GameRecord::new(doc.id.clone(), title)),
                None => {
                    log::warn!("game document {} has no {GAME_TITLE_FIELD} field", doc.id);
                    None
                }
            })
            .collect(),
        Err(err) => {
            log::warn!("failed to load game catalog: {err}");
            Vec::new()
        }
    }
}
