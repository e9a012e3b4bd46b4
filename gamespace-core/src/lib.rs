//! Gamespace Core
//!
//! Platform-agnostic logic for the Gamespace dashboard: the game catalog model,
//! the search filter and selection state machine, and the document-store client
//! seam used by the session and catalog loaders. No UI or browser dependencies.

pub mod catalog;
pub mod profile;
pub mod search;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::{GameRecord, filter_catalog};
pub use profile::UserProfile;
pub use search::{DropdownView, SearchEvent, SearchPhase, SearchState};
pub use session::{GAME_TITLE_FIELD, GAMES_COLLECTION, USERS_COLLECTION, load_catalog, resolve_profile};
pub use store::{Document, DocumentStore, MemoryStore, StoreError};
